//! # Role Registry
//!
//! Assignment of the five governance roles to addresses. Owner,
//! Administrator and Master-Issuer are singletons; Issuer and Controller
//! are multi-member sets. Any address may hold several roles at once.
//!
//! The registry itself only enforces role-shape invariants (singleton
//! transitions, non-zero owner); caller authorization is the service
//! layer's guard.

use super::errors::LedgerError;
use ferrum_types::{Address, ZERO_ADDRESS};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The governance roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Root authority: appoints every other role.
    Owner,
    /// Compliance authority: blacklist, pause, fees, forwarders.
    Administrator,
    /// Issuance authority: uncapped minting, delegates capped issuers.
    MasterIssuer,
    /// Delegated minter with a remaining-allowance ceiling.
    Issuer,
    /// May trip the safety switch.
    Controller,
}

/// Holds the current role assignment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRegistry {
    owner: Address,
    administrator: Option<Address>,
    master_issuer: Option<Address>,
    issuers: HashSet<Address>,
    controllers: HashSet<Address>,
}

impl RoleRegistry {
    /// Create a registry with the initial owner. The owner is never the
    /// zero address.
    pub fn new(owner: Address) -> Result<Self, LedgerError> {
        if owner == ZERO_ADDRESS {
            return Err(LedgerError::InvalidRoleTransition);
        }
        Ok(Self {
            owner,
            administrator: None,
            master_issuer: None,
            issuers: HashSet::new(),
            controllers: HashSet::new(),
        })
    }

    /// Check whether `address` holds `role`.
    pub fn has_role(&self, role: Role, address: &Address) -> bool {
        match role {
            Role::Owner => self.owner == *address,
            Role::Administrator => self.administrator.as_ref() == Some(address),
            Role::MasterIssuer => self.master_issuer.as_ref() == Some(address),
            Role::Issuer => self.issuers.contains(address),
            Role::Controller => self.controllers.contains(address),
        }
    }

    /// The current owner.
    pub fn owner(&self) -> Address {
        self.owner
    }

    // =========================================================================
    // SINGLETON TRANSITIONS
    // =========================================================================

    /// Transfer ownership. Returns the previous owner.
    pub fn set_owner(&mut self, new_owner: Address) -> Result<Address, LedgerError> {
        if new_owner == ZERO_ADDRESS || new_owner == self.owner {
            return Err(LedgerError::InvalidRoleTransition);
        }
        let previous = self.owner;
        self.owner = new_owner;
        Ok(previous)
    }

    /// Appoint the administrator. Returns the previous holder, if any.
    pub fn set_administrator(
        &mut self,
        new_administrator: Address,
    ) -> Result<Option<Address>, LedgerError> {
        if self.administrator == Some(new_administrator) {
            return Err(LedgerError::InvalidRoleTransition);
        }
        Ok(self.administrator.replace(new_administrator))
    }

    /// Appoint the master issuer. Returns the previous holder, if any;
    /// the outgoing holder loses its minting ability, while allowances it
    /// already delegated to issuers remain until explicitly removed.
    pub fn set_master_issuer(
        &mut self,
        new_master_issuer: Address,
    ) -> Result<Option<Address>, LedgerError> {
        if self.master_issuer == Some(new_master_issuer) {
            return Err(LedgerError::InvalidRoleTransition);
        }
        Ok(self.master_issuer.replace(new_master_issuer))
    }

    // =========================================================================
    // MEMBER SETS
    // =========================================================================

    /// Grant a multi-member role. Only Controller is grantable here; the
    /// singleton roles move through their dedicated transitions and Issuer
    /// through the issuance engine.
    pub fn grant(&mut self, role: Role, address: Address) -> Result<(), LedgerError> {
        match role {
            Role::Controller => {
                self.controllers.insert(address);
                Ok(())
            }
            _ => Err(LedgerError::InvalidRoleTransition),
        }
    }

    /// Revoke a multi-member role.
    pub fn revoke(&mut self, role: Role, address: &Address) -> Result<(), LedgerError> {
        match role {
            Role::Controller => {
                self.controllers.remove(address);
                Ok(())
            }
            _ => Err(LedgerError::InvalidRoleTransition),
        }
    }

    /// Register an issuer (idempotent; the allowance lives in the
    /// issuance engine).
    pub fn add_issuer(&mut self, address: Address) {
        self.issuers.insert(address);
    }

    /// Deregister an issuer.
    pub fn remove_issuer(&mut self, address: &Address) {
        self.issuers.remove(address);
    }
}
