//! # Ledger Adapter
//!
//! Wires the outbound [`LedgerGateway`] port to the concrete
//! [`ferrum_ledger::Ledger`], so a relay drives the real arithmetic core
//! through the same entry points every other path uses.

use crate::ports::outbound::LedgerGateway;
use ferrum_ledger::{Ledger, LedgerError};
use ferrum_types::{Address, U256};

impl LedgerGateway for Ledger {
    fn is_trusted_forwarder(&self, forwarder: &Address) -> bool {
        Ledger::is_trusted_forwarder(self, forwarder)
    }

    fn contract_address(&self) -> Address {
        Ledger::contract_address(self)
    }

    fn relayed_transfer(
        &mut self,
        forwarder: Address,
        from: Address,
        to: Address,
        amount: U256,
        operator: Address,
    ) -> Result<(), LedgerError> {
        Ledger::relayed_transfer(self, forwarder, from, to, amount, operator)
    }
}
