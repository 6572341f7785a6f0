//! # Outbound Port
//!
//! The relay's view of its target ledger. The relay holds a reference to
//! exactly one ledger per execution; this trait is the seam that keeps
//! relay verification testable against a mock while the adapter wires the
//! concrete ledger in.

use ferrum_ledger::LedgerError;
use ferrum_types::{Address, U256};

/// What the relay needs from the ledger it fronts.
pub trait LedgerGateway {
    /// Whether the ledger recognizes `forwarder` as trusted.
    fn is_trusted_forwarder(&self, forwarder: &Address) -> bool;

    /// The ledger's own contract identity; the only valid forward target.
    fn contract_address(&self) -> Address;

    /// Execute a transfer as `from`, settling the flat gasless base fee to
    /// `operator` in the same call.
    fn relayed_transfer(
        &mut self,
        forwarder: Address,
        from: Address,
        to: Address,
        amount: U256,
        operator: Address,
    ) -> Result<(), LedgerError>;
}
