//! # ECDSA Recovery (secp256k1)
//!
//! Strict signature validation and signer recovery for the authorization
//! protocol.
//!
//! ## Security Notes
//!
//! - **Scalar Range Validation**: R and S must be in [1, n-1]
//! - **Malleability Prevention (EIP-2)**: S must be strictly less than
//!   n/2; the high-S twin of a valid signature is rejected
//! - **Constant-Time Comparisons**: scalar range checks use the `subtle`
//!   crate so acceptance does not leak through timing

use super::errors::AuthorizationError;
use ferrum_types::{Address, EcdsaSignature, Hash};
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use sha3::{Digest, Keccak256};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

/// secp256k1 curve order n
/// n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
const SECP256K1_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// Half of the secp256k1 curve order (for the EIP-2 malleability check).
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
];

/// Keccak256 hash function.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

// =============================================================================
// RECOVERY
// =============================================================================

/// Recover the signing address from a typed-data digest.
///
/// Validations performed, in order:
/// 1. R and S are in range [1, n-1] per SEC1
/// 2. S is in the lower half of the curve order (EIP-2)
/// 3. The recovery ID is one of 0, 1, 27, 28
/// 4. Public key recovery succeeds
pub fn recover_address(
    digest: &Hash,
    signature: &EcdsaSignature,
) -> Result<Address, AuthorizationError> {
    if !is_valid_scalar(&signature.r) || !is_valid_scalar(&signature.s) {
        return Err(AuthorizationError::InvalidFormat);
    }
    if !is_low_s(&signature.s) {
        return Err(AuthorizationError::MalleableSignature);
    }

    let recovery_id = parse_recovery_id(signature.v)?;

    // Scratch buffer is cleared on every exit path.
    let mut sig_bytes = [0u8; 64];
    sig_bytes[..32].copy_from_slice(&signature.r);
    sig_bytes[32..].copy_from_slice(&signature.s);

    let sig = match Signature::from_slice(&sig_bytes) {
        Ok(s) => {
            sig_bytes.zeroize();
            s
        }
        Err(_) => {
            sig_bytes.zeroize();
            return Err(AuthorizationError::InvalidFormat);
        }
    };

    let recovered_key = VerifyingKey::recover_from_prehash(digest, &sig, recovery_id)
        .map_err(|_| AuthorizationError::RecoveryFailed)?;

    Ok(address_from_pubkey(&recovered_key))
}

/// Recover the signer and require it to equal the claimed principal.
pub fn recover_expected_signer(
    digest: &Hash,
    signature: &EcdsaSignature,
    expected: Address,
) -> Result<Address, AuthorizationError> {
    let actual = recover_address(digest, signature)?;
    if actual != expected {
        return Err(AuthorizationError::SignerMismatch { expected, actual });
    }
    Ok(actual)
}

/// Derive the Ethereum-style address from a public key: the last 20 bytes
/// of keccak256 over the uncompressed point without its 0x04 prefix.
pub fn address_from_pubkey(public_key: &VerifyingKey) -> Address {
    let encoded = public_key.to_encoded_point(false);
    let hash = keccak256(&encoded.as_bytes()[1..]);

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

// =============================================================================
// SCALAR CHECKS
// =============================================================================

/// Constant-time strict less-than over 32-byte big-endian values.
fn ct_less_than(a: &[u8; 32], b: &[u8; 32]) -> bool {
    let mut less = Choice::from(0u8);
    let mut greater = Choice::from(0u8);

    for i in 0..32 {
        let not_decided = !(less | greater);
        let byte_less = Choice::from((a[i] < b[i]) as u8);
        let byte_greater = Choice::from((a[i] > b[i]) as u8);

        less |= not_decided & byte_less;
        greater |= not_decided & byte_greater;
    }

    less.into()
}

/// A scalar is valid when it is non-zero and strictly below the curve order.
fn is_valid_scalar(scalar: &[u8; 32]) -> bool {
    let mut is_zero = Choice::from(1u8);
    for byte in scalar {
        is_zero &= byte.ct_eq(&0u8);
    }

    let nonzero: bool = (!is_zero).into();
    nonzero && ct_less_than(scalar, &SECP256K1_ORDER)
}

/// EIP-2: S must be strictly less than n/2.
fn is_low_s(s: &[u8; 32]) -> bool {
    ct_less_than(s, &SECP256K1_HALF_ORDER)
}

/// Parse a recovery ID from a v value. Valid: 0, 1, 27, 28.
fn parse_recovery_id(v: u8) -> Result<RecoveryId, AuthorizationError> {
    let id = match v {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return Err(AuthorizationError::InvalidRecoveryId(v)),
    };

    RecoveryId::try_from(id).map_err(|_| AuthorizationError::InvalidRecoveryId(v))
}

// =============================================================================
// UNIT TESTS
// =============================================================================
