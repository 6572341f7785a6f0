//! # Issuance Allowance Engine
//!
//! Per-issuer minting ceilings, administered exclusively by the
//! Master-Issuer. An allowance is created when an issuer is added,
//! decremented on mint, restored (uncapped) on burn by the same issuer,
//! and deleted on removal.

use super::errors::LedgerError;
use ferrum_types::{Address, U256};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Remaining mint capacity per issuer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuerAllowances {
    allowances: HashMap<Address, U256>,
}

impl IssuerAllowances {
    /// Remaining allowance of an issuer (zero if none is registered).
    pub fn allowance_of(&self, issuer: &Address) -> U256 {
        self.allowances.get(issuer).copied().unwrap_or_default()
    }

    /// Overwrite an issuer's allowance.
    pub fn set(&mut self, issuer: Address, allowance: U256) {
        self.allowances.insert(issuer, allowance);
    }

    /// Delete an issuer's allowance, returning what remained.
    pub fn remove(&mut self, issuer: &Address) -> U256 {
        self.allowances.remove(issuer).unwrap_or_default()
    }

    /// Consume allowance on mint. Fails without mutating when the amount
    /// exceeds the remainder.
    pub fn debit(&mut self, issuer: &Address, amount: U256) -> Result<U256, LedgerError> {
        let remaining = self.allowance_of(issuer);
        let rest = remaining
            .checked_sub(amount)
            .ok_or(LedgerError::AllowanceExceeded)?;
        self.allowances.insert(*issuer, rest);
        Ok(rest)
    }

    /// Restore allowance on burn. The restoration is an unconditional
    /// checked addition; it is not capped at any original ceiling.
    pub fn credit(&mut self, issuer: &Address, amount: U256) -> Result<U256, LedgerError> {
        let restored = self
            .allowance_of(issuer)
            .checked_add(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        self.allowances.insert(*issuer, restored);
        Ok(restored)
    }
}
