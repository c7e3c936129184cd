//! # parklot-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **REST-ish JSON API** for the parking ledger
//!   (`/api/parking/entries`, `/api/parking/exits/{plate}`, …)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and domain faults into HTTP responses
//!
//! ## Dependency rule
//! Depends on `parklot-app` (for port traits and services) and `parklot-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
