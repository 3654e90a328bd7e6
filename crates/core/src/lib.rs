//! Domain types and rules shared by the CamQuest crates.
//!
//! Nothing in here performs I/O: the store, notifier, and HTTP layers all
//! call into these functions so the rules can be unit-tested in isolation.

pub mod catalog;
pub mod error;
pub mod rental;
pub mod types;
pub mod validation;
