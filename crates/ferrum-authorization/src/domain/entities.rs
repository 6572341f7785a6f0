//! # Authorization Request Entities
//!
//! The signed message formats the ledger accepts on its meta-transaction
//! paths. Both schemes share one field set; they differ only in type hash
//! (so a permit signature can never be submitted as a transfer, and vice
//! versa) and in the effect the ledger applies after verification.

use super::ecdsa::keccak256;
use super::typed_data::{digest, word_from_address, word_from_u256};
use ferrum_types::{Address, Hash, U256};
use serde::{Deserialize, Serialize};

/// Which typed-data schema an authorization was signed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthorizationScheme {
    /// Grants `spender` an allowance of `value` from `owner`.
    Permit,
    /// Moves `value` from `owner` to `spender` through the fee engine,
    /// with no allowance gate.
    TransferWithAuthorization,
}

impl AuthorizationScheme {
    /// The canonical type string hashed into every digest of this scheme.
    pub fn type_string(&self) -> &'static [u8] {
        match self {
            AuthorizationScheme::Permit => {
                b"Permit(address owner,address spender,uint256 value,uint256 nonce,uint256 deadline)"
            }
            AuthorizationScheme::TransferWithAuthorization => {
                b"TransferWithAuthorization(address owner,address spender,uint256 value,uint256 nonce,uint256 deadline)"
            }
        }
    }

    /// Type hash of this scheme.
    pub fn type_hash(&self) -> Hash {
        keccak256(self.type_string())
    }
}

// =============================================================================
// META AUTHORIZATION
// =============================================================================

/// A signed, single-use authorization `{owner, spender, value, nonce,
/// deadline}`.
///
/// `nonce` must equal the owner's current stored nonce when submitted;
/// consumption is strictly sequential, so an authorization is accepted at
/// most once and out-of-order submissions fail until their predecessor
/// lands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaAuthorization {
    /// The signing principal whose funds or allowance are affected.
    pub owner: Address,
    /// Allowance beneficiary (permit) or transfer recipient.
    pub spender: Address,
    /// Allowance or transfer amount.
    pub value: U256,
    /// The owner's account nonce at signing time.
    pub nonce: U256,
    /// Unix timestamp after which the authorization is dead.
    pub deadline: U256,
}

impl MetaAuthorization {
    /// Typed-data struct hash under the given scheme.
    pub fn struct_hash(&self, scheme: AuthorizationScheme) -> Hash {
        let mut buf = Vec::with_capacity(192);
        buf.extend_from_slice(&scheme.type_hash());
        buf.extend_from_slice(&word_from_address(&self.owner));
        buf.extend_from_slice(&word_from_address(&self.spender));
        buf.extend_from_slice(&word_from_u256(&self.value));
        buf.extend_from_slice(&word_from_u256(&self.nonce));
        buf.extend_from_slice(&word_from_u256(&self.deadline));
        keccak256(&buf)
    }

    /// Full signing digest under the given domain separator and scheme.
    pub fn digest(&self, domain_separator: &Hash, scheme: AuthorizationScheme) -> Hash {
        digest(domain_separator, &self.struct_hash(scheme))
    }
}
