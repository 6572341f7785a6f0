//! # Ledger Domain Logic
//!
//! Pure state and arithmetic: roles, safety switch, compliance, fees and
//! issuance allowances. Every guard here returns a tagged error; the
//! service layer composes them at the top of each entry point.

pub mod compliance;
pub mod entities;
pub mod errors;
pub mod fees;
pub mod issuance;
pub mod roles;
pub mod safety;
