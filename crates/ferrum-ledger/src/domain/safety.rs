//! # Safety Switch
//!
//! A single shared "operating" flag with an exclusive-release lock: the
//! party that flips it off is recorded as `locked_by` and is the only one
//! (besides the owner) allowed to flip it back on. While off, issuance
//! (mint and burn) is suspended for every caller; transfers are not
//! affected by this switch.

use super::errors::LedgerError;
use ferrum_types::Address;
use serde::{Deserialize, Serialize};

/// The safety-switch state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyState {
    operating: bool,
    locked_by: Option<Address>,
}

impl Default for SafetyState {
    fn default() -> Self {
        Self {
            operating: true,
            locked_by: None,
        }
    }
}

impl SafetyState {
    /// Current status: `(operating, locked_by)`.
    pub fn status(&self) -> (bool, Option<Address>) {
        (self.operating, self.locked_by)
    }

    /// Guard for issuance entry points.
    pub fn ensure_operating(&self) -> Result<(), LedgerError> {
        if self.operating {
            Ok(())
        } else {
            Err(LedgerError::OperationsSuspended)
        }
    }

    /// Flip the switch. Engaging records `caller` as the lock holder;
    /// releasing requires the lock holder or the owner override. Returns
    /// the new operating state.
    pub fn toggle(&mut self, caller: Address, is_owner: bool) -> Result<bool, LedgerError> {
        if self.operating {
            self.operating = false;
            self.locked_by = Some(caller);
            Ok(false)
        } else {
            if self.locked_by != Some(caller) && !is_owner {
                return Err(LedgerError::NotAuthorizedToResume);
            }
            self.operating = true;
            self.locked_by = None;
            Ok(true)
        }
    }
}
