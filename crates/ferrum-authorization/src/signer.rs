//! # Client-Side Signer
//!
//! Helpers that produce the signed requests the verifier accepts: permits,
//! transfer authorizations, and raw typed-data signatures for forward
//! requests. The ledger never calls into this module; it exists for
//! integrators and the test suite, which sign off-band and submit the
//! detached `(r, s, v)` triple.
//!
//! Signatures are normalized to low-S (with the recovery ID flipped when
//! normalization negates S), so everything produced here passes the
//! verifier's EIP-2 check.

use crate::domain::ecdsa::address_from_pubkey;
use crate::domain::entities::{AuthorizationScheme, MetaAuthorization};
use crate::domain::errors::AuthorizationError;
use crate::domain::typed_data::{digest, Eip712Domain};
use ferrum_types::{Address, EcdsaSignature, Hash};
use k256::ecdsa::{RecoveryId, SigningKey};

/// Generate a fresh signing key.
pub fn random_signer() -> SigningKey {
    SigningKey::random(&mut rand::thread_rng())
}

/// The address a key signs as.
pub fn address_of(key: &SigningKey) -> Address {
    address_from_pubkey(key.verifying_key())
}

/// Sign a 32-byte digest, returning a low-S `(r, s, v)` signature with
/// v in {27, 28}.
pub fn sign_digest(key: &SigningKey, digest: &Hash) -> Result<EcdsaSignature, AuthorizationError> {
    let (sig, recovery_id) = key
        .sign_prehash_recoverable(digest)
        .map_err(|_| AuthorizationError::SigningFailed)?;

    // Normalizing S to the lower half negates it, which flips the parity
    // the recovery ID encodes.
    let (sig, recovery_id) = match sig.normalize_s() {
        Some(normalized) => {
            let flipped = RecoveryId::try_from(recovery_id.to_byte() ^ 1)
                .map_err(|_| AuthorizationError::SigningFailed)?;
            (normalized, flipped)
        }
        None => (sig, recovery_id),
    };

    let bytes = sig.to_bytes();
    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&bytes[..32]);
    s.copy_from_slice(&bytes[32..]);

    Ok(EcdsaSignature {
        r,
        s,
        v: recovery_id.to_byte() + 27,
    })
}

/// Sign an arbitrary struct hash under a domain separator.
pub fn sign_typed(
    key: &SigningKey,
    domain_separator: &Hash,
    struct_hash: &Hash,
) -> Result<EcdsaSignature, AuthorizationError> {
    sign_digest(key, &digest(domain_separator, struct_hash))
}

/// Sign a permit authorization under the ledger's domain.
pub fn sign_permit(
    key: &SigningKey,
    domain: &Eip712Domain,
    authorization: &MetaAuthorization,
) -> Result<EcdsaSignature, AuthorizationError> {
    sign_digest(
        key,
        &authorization.digest(&domain.separator(), AuthorizationScheme::Permit),
    )
}

/// Sign a transfer authorization under the ledger's domain.
pub fn sign_transfer_authorization(
    key: &SigningKey,
    domain: &Eip712Domain,
    authorization: &MetaAuthorization,
) -> Result<EcdsaSignature, AuthorizationError> {
    sign_digest(
        key,
        &authorization.digest(
            &domain.separator(),
            AuthorizationScheme::TransferWithAuthorization,
        ),
    )
}
