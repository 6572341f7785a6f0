//! # Typed-Data Hashing (EIP-712)
//!
//! Domain-separated structured hashing. A signature produced over one of
//! these digests is bound to a specific contract identity, chain and
//! message schema, so it can never be replayed in another context.
//!
//! Layout rules:
//! - every field is encoded as a 32-byte big-endian word (addresses are
//!   left-padded with zeros)
//! - dynamic `string`/`bytes` fields contribute the keccak256 of their
//!   contents
//! - the final digest is `keccak256(0x19 || 0x01 || domainSeparator ||
//!   structHash)`

use super::ecdsa::keccak256;
use ferrum_types::{Address, Hash, U256};
use serde::{Deserialize, Serialize};

/// Type string of the signing domain.
const EIP712_DOMAIN_TYPE: &[u8] =
    b"EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

/// Type hash of the signing domain.
pub fn domain_type_hash() -> Hash {
    keccak256(EIP712_DOMAIN_TYPE)
}

// =============================================================================
// SIGNING DOMAIN
// =============================================================================

/// The signing domain `{name, version, chainId, verifyingContract}`.
///
/// The ledger and the forwarder each carry their own domain, keyed to their
/// own contract identity, which keeps their signature spaces disjoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eip712Domain {
    /// Human-readable signing domain name (the token or relay name).
    pub name: String,
    /// Schema version. Fixed at "1" for the current message formats.
    pub version: String,
    /// Chain identity the signature is bound to.
    pub chain_id: u64,
    /// The verifying contract identity.
    pub verifying_contract: Address,
}

impl Eip712Domain {
    /// Create a version-"1" domain.
    pub fn new(name: impl Into<String>, chain_id: u64, verifying_contract: Address) -> Self {
        Self {
            name: name.into(),
            version: "1".to_string(),
            chain_id,
            verifying_contract,
        }
    }

    /// The domain separator hash.
    pub fn separator(&self) -> Hash {
        let mut buf = Vec::with_capacity(160);
        buf.extend_from_slice(&domain_type_hash());
        buf.extend_from_slice(&keccak256(self.name.as_bytes()));
        buf.extend_from_slice(&keccak256(self.version.as_bytes()));
        buf.extend_from_slice(&word_from_u256(&U256::from(self.chain_id)));
        buf.extend_from_slice(&word_from_address(&self.verifying_contract));
        keccak256(&buf)
    }
}

// =============================================================================
// WORD ENCODING
// =============================================================================

/// Left-pad a 20-byte address into a 32-byte word.
pub fn word_from_address(address: &Address) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(address);
    word
}

/// Big-endian 32-byte word of a 256-bit value.
pub fn word_from_u256(value: &U256) -> [u8; 32] {
    let mut word = [0u8; 32];
    value.to_big_endian(&mut word);
    word
}

/// Final signing digest: `keccak256(0x19 0x01 || domain || struct)`.
pub fn digest(domain_separator: &Hash, struct_hash: &Hash) -> Hash {
    let mut buf = Vec::with_capacity(66);
    buf.extend_from_slice(&[0x19, 0x01]);
    buf.extend_from_slice(domain_separator);
    buf.extend_from_slice(struct_hash);
    keccak256(&buf)
}

// =============================================================================
// UNIT TESTS
// =============================================================================
