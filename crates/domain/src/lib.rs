//! # parklot-domain
//!
//! Pure domain model for the parklot parking-lot ledger.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define **Plates** (normalised vehicle identifiers)
//! - Define **Vehicle records** (one stay in the lot: entry, exit, class)
//! - Define the **billing rule** (hourly rate per vehicle class)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod billing;
pub mod plate;
pub mod vehicle;
