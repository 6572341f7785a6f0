//! # Adapters
//!
//! Concrete wiring of the relay's ports.

pub mod ledger;
