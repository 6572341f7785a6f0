//! # Core Entity Types
//!
//! The primitive vocabulary of the ledger: opaque 160-bit account
//! identifiers, 256-bit unsigned amounts, 32-byte hashes and recoverable
//! ECDSA signatures.

use serde::{Deserialize, Serialize};

// Re-export U256 from primitive-types for use across all components
pub use primitive_types::U256;

/// A 32-byte Keccak-256 hash.
pub type Hash = [u8; 32];

/// A 20-byte Ethereum-style address (last 20 bytes of keccak256(pubkey)).
pub type Address = [u8; 20];

/// Monetary values, allowances, nonces and deadlines are all unsigned
/// 256-bit integers. No negative value is representable.
pub type Amount = U256;

/// The all-zero address. Never a valid role holder.
pub const ZERO_ADDRESS: Address = [0u8; 20];

/// Render an address as a 0x-prefixed hex string for logs and errors.
pub fn hex_address(address: &Address) -> String {
    format!("0x{}", hex::encode(address))
}

// =============================================================================
// SIGNATURES
// =============================================================================

/// ECDSA signature on the secp256k1 curve, in recoverable (r, s, v) form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcdsaSignature {
    /// R component (32 bytes)
    pub r: [u8; 32],
    /// S component (32 bytes)
    pub s: [u8; 32],
    /// Recovery ID (0, 1, 27, or 28)
    pub v: u8,
}

// =============================================================================
// CALL CONTEXT
// =============================================================================

/// Identity and time for one admitted call.
///
/// The ledger executes inside a single-writer environment that decides the
/// global order of calls; that environment supplies who is calling and the
/// current Unix timestamp. Entry points never read an ambient clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContext {
    /// The account invoking the entry point.
    pub caller: Address,
    /// Unix timestamp (seconds) at which the call was admitted.
    pub timestamp: u64,
}

impl CallContext {
    /// Create a context for `caller` admitted at `timestamp`.
    pub fn new(caller: Address, timestamp: u64) -> Self {
        Self { caller, timestamp }
    }
}
