//! # Ledger Domain Entities
//!
//! Account state and static configuration. Accounts are created implicitly
//! on first balance-affecting reference and never destroyed; nonces only
//! increase. The state layout is plain key-value maps so snapshots stay
//! stable and append-only-friendly.

use ferrum_authorization::Eip712Domain;
use ferrum_types::{Address, U256};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-account ledger state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountState {
    /// Token balance. Unsigned; no negative balance is representable.
    pub balance: U256,
    /// Authorization nonce, shared by the permit and
    /// transfer-with-authorization schemes. Strictly increasing.
    pub nonce: U256,
    /// Spending allowances granted by this account, keyed by spender.
    pub allowances: HashMap<Address, U256>,
}

/// Static ledger configuration: token metadata plus the signing-domain
/// identity. Fixed at construction for the ledger's lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Token name; also the EIP-712 signing domain name.
    pub name: String,
    /// Token symbol.
    pub symbol: String,
    /// Display decimals.
    pub decimals: u8,
    /// Chain identity signatures are bound to.
    pub chain_id: u64,
    /// This ledger's own contract identity.
    pub contract: Address,
}

impl LedgerConfig {
    /// Create a ledger configuration.
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: u8,
        chain_id: u64,
        contract: Address,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
            chain_id,
            contract,
        }
    }

    /// The EIP-712 signing domain of this ledger (version "1").
    pub fn signing_domain(&self) -> Eip712Domain {
        Eip712Domain::new(self.name.clone(), self.chain_id, self.contract)
    }
}
