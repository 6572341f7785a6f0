//! # Ferrum Shared Types
//!
//! Primitive entity types shared by every component of the Ferrum ledger.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: addresses, hashes, amounts and signature
//!   containers are defined once, here, and re-used by the authorization,
//!   ledger and forwarder crates.
//! - **Deterministic values only**: nothing in this crate touches a clock,
//!   RNG or I/O; the execution environment supplies caller identity and
//!   time through [`CallContext`].

pub mod entities;

pub use entities::{
    hex_address, Address, Amount, CallContext, EcdsaSignature, Hash, U256, ZERO_ADDRESS,
};
