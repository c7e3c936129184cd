//! # parklot-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `VehicleRepository` — plate-keyed storage of vehicle records
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ParkingService` — enter, exit, cost, list active, list history
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `parklot-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
