//! # Integration Tests
//!
//! Cross-component flows exercising the public entry points end to end.

pub mod flows;
pub mod invariants;
