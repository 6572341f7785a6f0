//! # Forward Request
//!
//! The signed message a sponsor submits on a principal's behalf. Hashed
//! under the relay's own signing domain — not the ledger's — so forward
//! signatures and ledger authorizations live in disjoint spaces, each with
//! its own nonce sequence.

use ferrum_authorization::{keccak256, word_from_address, word_from_u256};
use ferrum_types::{Address, Hash, U256};
use serde::{Deserialize, Serialize};

/// Canonical type string of a forward request.
const FORWARD_REQUEST_TYPE: &[u8] =
    b"ForwardRequest(address from,address to,uint256 value,uint256 gas,uint256 nonce,bytes data)";

/// Type hash of the forward-request schema.
pub fn forward_request_type_hash() -> Hash {
    keccak256(FORWARD_REQUEST_TYPE)
}

/// A signed request to execute a call as `from`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardRequest {
    /// The principal the call executes as; must equal the recovered signer.
    pub from: Address,
    /// Call target. The relay only accepts its bound ledger here.
    pub to: Address,
    /// Native value attached to the call. The ledger path carries none.
    pub value: U256,
    /// Gas the sponsor is asked to supply.
    pub gas: U256,
    /// Relay-local nonce of `from` at signing time.
    pub nonce: U256,
    /// ABI-encoded calldata; restricted to the transfer selector.
    pub data: Vec<u8>,
}

impl ForwardRequest {
    /// Typed-data struct hash: every word-encoded field, then the keccak
    /// of the dynamic `data` bytes, then any suffix data appended by the
    /// submitting convention.
    pub fn struct_hash(&self, type_hash: &Hash, suffix_data: &[u8]) -> Hash {
        let mut buf = Vec::with_capacity(224 + suffix_data.len());
        buf.extend_from_slice(type_hash);
        buf.extend_from_slice(&word_from_address(&self.from));
        buf.extend_from_slice(&word_from_address(&self.to));
        buf.extend_from_slice(&word_from_u256(&self.value));
        buf.extend_from_slice(&word_from_u256(&self.gas));
        buf.extend_from_slice(&word_from_u256(&self.nonce));
        buf.extend_from_slice(&keccak256(&self.data));
        buf.extend_from_slice(suffix_data);
        keccak256(&buf)
    }
}
