//! # Authorization Errors
//!
//! Error types for signature recovery and typed-data verification.

use ferrum_types::{hex_address, Address};
use thiserror::Error;

/// Errors that can occur while validating a detached signature.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthorizationError {
    /// The signature components are malformed (zero scalar, out of curve
    /// order, wrong length).
    #[error("invalid signature format")]
    InvalidFormat,

    /// Signature has a high S value (EIP-2 malleability protection).
    #[error("malleable signature (high S value)")]
    MalleableSignature,

    /// Invalid recovery ID (v must be 0, 1, 27, or 28).
    #[error("invalid recovery id: {0}")]
    InvalidRecoveryId(u8),

    /// Failed to recover a public key from the signature.
    #[error("failed to recover public key")]
    RecoveryFailed,

    /// Recovered signer does not match the claimed principal.
    #[error(
        "signer mismatch: expected {}, got {}",
        hex_address(expected),
        hex_address(actual)
    )]
    SignerMismatch {
        expected: Address,
        actual: Address,
    },

    /// The signing backend rejected the key or digest.
    #[error("signing failed")]
    SigningFailed,
}
