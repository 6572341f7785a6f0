//! # Meta-Authorization Verifier
//!
//! Detached-signature authorization for the Ferrum ledger.
//!
//! A party signs its intent off-band (an allowance grant, a transfer, a
//! forward request) over a domain-separated typed-data digest; any other
//! party may submit that signed intent to the ledger, which uses this crate
//! to recover and check the signing principal. Verification here is pure —
//! hash-and-recover with no state — so the same functions service the
//! direct, permit, transfer-with-authorization and forwarded paths.
//!
//! ## Layers
//!
//! - **Domain Layer** (`domain/`): typed-data hashing and strict ECDSA
//!   recovery, no I/O
//! - **Signer** (`signer.rs`): client-side helpers that produce the signed
//!   requests the verifier accepts; used by integrators and the test suite
//!
//! ## Security Notes
//!
//! - **Malleability Prevention (EIP-2)**: signatures with high S values are
//!   rejected
//! - **Domain Separation**: every digest binds the ledger's name, version,
//!   chain id and contract identity, preventing cross-context replay

pub mod domain;
pub mod signer;

// Re-export public API
pub use domain::ecdsa::{keccak256, recover_address, recover_expected_signer};
pub use domain::entities::{AuthorizationScheme, MetaAuthorization};
pub use domain::errors::AuthorizationError;
pub use domain::typed_data::{
    digest, domain_type_hash, word_from_address, word_from_u256, Eip712Domain,
};
