//! # Relayed Calldata Codec
//!
//! ABI encoding for the one call shape the relay is allowed to deliver:
//! `transfer(address,uint256)`. Everything else — including the ledger's
//! gasless-fee-settlement entry point — must be rejected before it reaches
//! the ledger, closing the privilege-escalation path where a relay is
//! tricked into invoking a function only it may call.

use super::errors::ForwarderError;
use ferrum_authorization::keccak256;
use ferrum_types::{Address, U256};

/// 4-byte selector of `transfer(address,uint256)`.
pub const TRANSFER_SELECTOR: [u8; 4] = [0xa9, 0x05, 0x9c, 0xbb];

/// Calldata length of a transfer call: selector + two 32-byte words.
const TRANSFER_CALLDATA_LEN: usize = 4 + 32 + 32;

/// First four bytes of the keccak256 of a function signature.
pub fn selector_of(signature: &[u8]) -> [u8; 4] {
    let hash = keccak256(signature);
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Encode a `transfer(to, amount)` call.
pub fn encode_transfer(to: &Address, amount: &U256) -> Vec<u8> {
    let mut data = Vec::with_capacity(TRANSFER_CALLDATA_LEN);
    data.extend_from_slice(&TRANSFER_SELECTOR);

    let mut to_word = [0u8; 32];
    to_word[12..].copy_from_slice(to);
    data.extend_from_slice(&to_word);

    let mut amount_word = [0u8; 32];
    amount.to_big_endian(&mut amount_word);
    data.extend_from_slice(&amount_word);

    data
}

/// Decode relayed calldata, accepting only a well-formed transfer call:
/// exact length, the transfer selector, and zero padding on the address
/// word.
pub fn decode_transfer(data: &[u8]) -> Result<(Address, U256), ForwarderError> {
    if data.len() != TRANSFER_CALLDATA_LEN || data[..4] != TRANSFER_SELECTOR {
        return Err(ForwarderError::ForwardedCallNotAllowed);
    }

    let to_word = &data[4..36];
    if to_word[..12] != [0u8; 12] {
        return Err(ForwarderError::ForwardedCallNotAllowed);
    }
    let mut to = [0u8; 20];
    to.copy_from_slice(&to_word[12..]);

    let amount = U256::from_big_endian(&data[36..68]);
    Ok((to, amount))
}
