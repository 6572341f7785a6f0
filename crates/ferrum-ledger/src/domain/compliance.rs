//! # Compliance Guard
//!
//! Blacklist set and global pause flag, consulted before every
//! balance-affecting operation. Forced administrative transfers bypass
//! both; that override lives in the service layer.

use super::errors::LedgerError;
use ferrum_types::Address;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Blacklist and pause state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceState {
    blacklist: HashSet<Address>,
    paused: bool,
}

impl ComplianceState {
    /// Add an address to the blacklist. Returns whether it was newly added.
    pub fn blacklist(&mut self, address: Address) -> bool {
        self.blacklist.insert(address)
    }

    /// Remove an address from the blacklist. Returns whether it was listed.
    pub fn unblacklist(&mut self, address: &Address) -> bool {
        self.blacklist.remove(address)
    }

    /// Whether an address is blacklisted.
    pub fn is_blacklisted(&self, address: &Address) -> bool {
        self.blacklist.contains(address)
    }

    /// Set the global pause flag.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Whether the ledger is paused.
    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Guard for balance-mutating entry points.
    pub fn ensure_not_paused(&self) -> Result<(), LedgerError> {
        if self.paused {
            Err(LedgerError::Paused)
        } else {
            Ok(())
        }
    }

    /// Guard that every party to an operation is clear of the blacklist.
    pub fn ensure_clear(&self, parties: &[Address]) -> Result<(), LedgerError> {
        for party in parties {
            if self.is_blacklisted(party) {
                return Err(LedgerError::Blacklisted(*party));
            }
        }
        Ok(())
    }
}
