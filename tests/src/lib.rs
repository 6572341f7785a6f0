//! # Ferrum Test Suite
//!
//! Unified test crate covering cross-crate behavior:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Shared world builders and constants
//! │
//! └── integration/      # Cross-component flows
//!     ├── flows.rs              # Role governance + ledger lifecycle
//!     ├── meta_authorization.rs # Permit / transfer-with-authorization
//!     ├── forwarding.rs         # Relay end-to-end against the real ledger
//!     └── invariants.rs         # Supply conservation, atomicity, fee math
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ferrum-tests
//!
//! # By category
//! cargo test -p ferrum-tests integration::
//!
//! # Benchmarks
//! cargo bench -p ferrum-tests
//! ```

#![allow(dead_code)]

pub mod fixtures;
pub mod integration;
