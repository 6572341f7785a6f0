//! # Forwarder Relay
//!
//! A separate trusted component that lets a sponsor submit a principal's
//! signed intent as its own transaction. The relay verifies the forward
//! signature under its own signing domain, restricts the relayed call to
//! plain transfers, tracks its own consumed nonces independently of the
//! ledger's authorization nonces, and invokes the ledger's arithmetic core
//! as an already-serialized sub-call.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): forward-request hashing, the
//!   transfer-only calldata codec, relay errors
//! - **Ports Layer** (`ports/`): the outbound [`LedgerGateway`] seam
//! - **Adapters** (`adapters/`): the concrete ledger wiring
//! - **Service Layer** (`service.rs`): the [`Forwarder`] execute flow

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::codec::{decode_transfer, encode_transfer, selector_of, TRANSFER_SELECTOR};
pub use domain::entities::{forward_request_type_hash, ForwardRequest};
pub use domain::errors::ForwarderError;
pub use ports::outbound::LedgerGateway;
pub use service::Forwarder;
