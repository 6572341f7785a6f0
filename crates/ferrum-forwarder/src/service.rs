//! # Forwarder Service
//!
//! Verifies a signed forward request and, if it is a whitelisted call,
//! executes it against the bound ledger as the named principal. The relay
//! keeps its own consumed-nonce map, independent of the ledger's
//! authorization nonces, and consumes a nonce only after the ledger call
//! succeeds — a failed relay leaves no state behind anywhere.

use crate::domain::codec::decode_transfer;
use crate::domain::entities::{forward_request_type_hash, ForwardRequest};
use crate::domain::errors::ForwarderError;
use crate::ports::outbound::LedgerGateway;
use ferrum_authorization::{digest, recover_expected_signer, Eip712Domain};
use ferrum_types::{hex_address, Address, EcdsaSignature, Hash, U256};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

/// The trusted forward relay. Bound to exactly one ledger at construction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Forwarder {
    /// This relay's own contract identity.
    address: Address,
    /// Contract identity of the one ledger this relay fronts.
    target: Address,
    /// The relay's signing domain (distinct from the ledger's).
    domain: Eip712Domain,
    /// Cached separator of `domain`.
    domain_separator: Hash,
    /// Relay-local consumed-nonce sequence per principal.
    nonces: HashMap<Address, U256>,
}

impl Forwarder {
    /// Create a relay with its own signing domain, bound to the ledger at
    /// `target`.
    pub fn new(name: impl Into<String>, chain_id: u64, address: Address, target: Address) -> Self {
        let domain = Eip712Domain::new(name, chain_id, address);
        let domain_separator = domain.separator();
        Self {
            address,
            target,
            domain,
            domain_separator,
            nonces: HashMap::new(),
        }
    }

    /// This relay's contract identity.
    pub fn address(&self) -> Address {
        self.address
    }

    /// The bound ledger's contract identity.
    pub fn target(&self) -> Address {
        self.target
    }

    /// The relay's signing domain.
    pub fn domain(&self) -> &Eip712Domain {
        &self.domain
    }

    /// The registered domain separator forward signatures must be bound to.
    pub fn domain_separator(&self) -> Hash {
        self.domain_separator
    }

    /// Relay-local nonce of a principal.
    pub fn nonce_of(&self, from: &Address) -> U256 {
        self.nonces.get(from).copied().unwrap_or_default()
    }

    /// Verify and execute a forward request as `request.from`.
    ///
    /// `operator` is the sponsor submitting the transaction; it receives
    /// the flat gasless base fee if the ledger's administrator configured
    /// one. Checks, in order: the ledger trusts this relay, the domain
    /// separator and type hash are the registered ones, the nonce is
    /// current, the signature recovers to `request.from`, and the calldata
    /// is a plain transfer aimed at the bound ledger. The relay nonce is
    /// consumed only once the ledger accepts the call.
    pub fn execute<L: LedgerGateway>(
        &mut self,
        ledger: &mut L,
        operator: Address,
        request: &ForwardRequest,
        domain_separator: Hash,
        type_hash: Hash,
        suffix_data: &[u8],
        signature: &EcdsaSignature,
    ) -> Result<(), ForwarderError> {
        if ledger.contract_address() != self.target
            || !ledger.is_trusted_forwarder(&self.address)
        {
            return Err(ForwarderError::ForwardingNotTrusted);
        }
        if domain_separator != self.domain_separator {
            return Err(ForwarderError::UnregisteredDomain);
        }
        if type_hash != forward_request_type_hash() {
            return Err(ForwarderError::UnregisteredRequestType);
        }

        let current = self.nonce_of(&request.from);
        if request.nonce != current {
            return Err(ForwarderError::NonceMismatch);
        }

        let signing_digest = digest(
            &domain_separator,
            &request.struct_hash(&type_hash, suffix_data),
        );
        recover_expected_signer(&signing_digest, signature, request.from)?;

        if request.to != self.target {
            return Err(ForwarderError::ForwardedCallNotAllowed);
        }
        let (to, amount) = decode_transfer(&request.data)?;

        ledger.relayed_transfer(self.address, request.from, to, amount, operator)?;
        self.nonces
            .insert(request.from, current.saturating_add(U256::one()));

        info!(
            target: "ferrum::forwarder",
            from = %hex_address(&request.from),
            to = %hex_address(&to),
            amount = %amount,
            operator = %hex_address(&operator),
            "forward executed"
        );
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
