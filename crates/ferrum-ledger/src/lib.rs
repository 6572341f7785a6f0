//! # Ferrum Ledger Core
//!
//! A role-governed, fee-bearing digital-asset ledger that additionally
//! accepts signed, off-chain-authorized state transitions.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): roles, safety switch, compliance, fee
//!   arithmetic and issuance allowances — pure state machines with tagged
//!   errors, no I/O
//! - **Service Layer** (`service.rs`): the [`Ledger`] aggregate root that
//!   composes the guards at the top of every entry point and owns all
//!   balance/allowance/nonce state
//!
//! Direct calls, permits, transfer-with-authorization and forwarded
//! transfers converge on one arithmetic core; invariants hold across every
//! path because there is only one implementation of the movement.

pub mod domain;
pub mod service;

// Re-export public API
pub use domain::compliance::ComplianceState;
pub use domain::entities::{AccountState, LedgerConfig};
pub use domain::errors::LedgerError;
pub use domain::fees::{FeeConfig, FEE_RATIO};
pub use domain::issuance::IssuerAllowances;
pub use domain::roles::{Role, RoleRegistry};
pub use domain::safety::SafetyState;
pub use service::Ledger;
