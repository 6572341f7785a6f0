//! # Ledger Service
//!
//! The aggregate root. One `Ledger` value owns every sub-map (balances,
//! allowances, nonces, roles, issuance ceilings, compliance flags) and
//! exposes the public entry points, each of which evaluates its guards at
//! the top and only then mutates. The execution environment is the single
//! writer: entry points take `&mut self` plus an explicit [`CallContext`],
//! and every failure aborts the call before state changes.
//!
//! Direct calls, permits, transfer-with-authorization and forwarded
//! transfers all converge on one internal movement routine, so the
//! balance/fee arithmetic is implemented (and proven) once.

use crate::domain::compliance::ComplianceState;
use crate::domain::entities::{AccountState, LedgerConfig};
use crate::domain::errors::LedgerError;
use crate::domain::fees::FeeConfig;
use crate::domain::issuance::IssuerAllowances;
use crate::domain::roles::{Role, RoleRegistry};
use crate::domain::safety::SafetyState;
use ferrum_authorization::{
    recover_expected_signer, AuthorizationScheme, MetaAuthorization,
};
use ferrum_types::{hex_address, Address, CallContext, EcdsaSignature, Hash, U256};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{info, warn};

/// The role-governed, fee-bearing ledger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    config: LedgerConfig,
    /// Cached EIP-712 domain separator; the domain is fixed at construction.
    domain_separator: Hash,
    roles: RoleRegistry,
    safety: SafetyState,
    compliance: ComplianceState,
    fees: FeeConfig,
    accounts: HashMap<Address, AccountState>,
    issuance: IssuerAllowances,
    trusted_forwarders: HashSet<Address>,
    total_supply: U256,
}

impl Ledger {
    /// Create a ledger with its initial owner. Fails if the owner is the
    /// zero address.
    pub fn new(config: LedgerConfig, owner: Address) -> Result<Self, LedgerError> {
        let roles = RoleRegistry::new(owner)?;
        let domain_separator = config.signing_domain().separator();
        Ok(Self {
            config,
            domain_separator,
            roles,
            safety: SafetyState::default(),
            compliance: ComplianceState::default(),
            fees: FeeConfig::default(),
            accounts: HashMap::new(),
            issuance: IssuerAllowances::default(),
            trusted_forwarders: HashSet::new(),
            total_supply: U256::zero(),
        })
    }

    // =========================================================================
    // GUARDS
    // =========================================================================

    fn ensure_owner(&self, ctx: &CallContext) -> Result<(), LedgerError> {
        if self.roles.has_role(Role::Owner, &ctx.caller) {
            Ok(())
        } else {
            Err(LedgerError::Unauthorized)
        }
    }

    fn ensure_administrator(&self, ctx: &CallContext) -> Result<(), LedgerError> {
        if self.roles.has_role(Role::Administrator, &ctx.caller) {
            Ok(())
        } else {
            Err(LedgerError::Unauthorized)
        }
    }

    fn ensure_master_issuer(&self, ctx: &CallContext) -> Result<(), LedgerError> {
        if self.roles.has_role(Role::MasterIssuer, &ctx.caller) {
            Ok(())
        } else {
            Err(LedgerError::Unauthorized)
        }
    }

    // =========================================================================
    // ROLE REGISTRY
    // =========================================================================

    /// Transfer ownership. Owner only.
    pub fn set_owner(&mut self, ctx: CallContext, new_owner: Address) -> Result<(), LedgerError> {
        self.ensure_owner(&ctx)?;
        let previous = self.roles.set_owner(new_owner)?;
        info!(
            target: "ferrum::roles",
            role = "owner",
            previous = %hex_address(&previous),
            new = %hex_address(&new_owner),
            "role changed"
        );
        Ok(())
    }

    /// Appoint the administrator. Owner only.
    pub fn set_administrator(
        &mut self,
        ctx: CallContext,
        new_administrator: Address,
    ) -> Result<(), LedgerError> {
        self.ensure_owner(&ctx)?;
        let previous = self.roles.set_administrator(new_administrator)?;
        info!(
            target: "ferrum::roles",
            role = "administrator",
            previous = ?previous.as_ref().map(hex_address),
            new = %hex_address(&new_administrator),
            "role changed"
        );
        Ok(())
    }

    /// Appoint the master issuer. Owner only. The outgoing holder loses
    /// its minting ability; allowances it delegated to issuers survive
    /// until explicitly removed.
    pub fn set_master_issuer(
        &mut self,
        ctx: CallContext,
        new_master_issuer: Address,
    ) -> Result<(), LedgerError> {
        self.ensure_owner(&ctx)?;
        let previous = self.roles.set_master_issuer(new_master_issuer)?;
        if let Some(outgoing) = previous {
            info!(
                target: "ferrum::issuance",
                minter = %hex_address(&outgoing),
                allowance = %U256::zero(),
                "minting allowance updated"
            );
        }
        info!(
            target: "ferrum::roles",
            role = "master_issuer",
            previous = ?previous.as_ref().map(hex_address),
            new = %hex_address(&new_master_issuer),
            "role changed"
        );
        Ok(())
    }

    /// Grant a multi-member role (Controller). Owner only.
    pub fn grant_role(
        &mut self,
        ctx: CallContext,
        role: Role,
        address: Address,
    ) -> Result<(), LedgerError> {
        self.ensure_owner(&ctx)?;
        self.roles.grant(role, address)?;
        info!(
            target: "ferrum::roles",
            role = ?role,
            new = %hex_address(&address),
            "role granted"
        );
        Ok(())
    }

    /// Revoke a multi-member role (Controller). Owner only.
    pub fn revoke_role(
        &mut self,
        ctx: CallContext,
        role: Role,
        address: Address,
    ) -> Result<(), LedgerError> {
        self.ensure_owner(&ctx)?;
        self.roles.revoke(role, &address)?;
        info!(
            target: "ferrum::roles",
            role = ?role,
            previous = %hex_address(&address),
            "role revoked"
        );
        Ok(())
    }

    /// Whether `address` currently holds `role`.
    pub fn has_role(&self, role: Role, address: &Address) -> bool {
        self.roles.has_role(role, address)
    }

    // =========================================================================
    // SAFETY SWITCH
    // =========================================================================

    /// Trip or release the safety switch. Controller or Owner.
    pub fn safety_switch(&mut self, ctx: CallContext) -> Result<(), LedgerError> {
        let caller = ctx.caller;
        let is_owner = self.roles.has_role(Role::Owner, &caller);
        if !is_owner && !self.roles.has_role(Role::Controller, &caller) {
            return Err(LedgerError::Unauthorized);
        }
        let operating = self.safety.toggle(caller, is_owner)?;
        warn!(
            target: "ferrum::safety",
            operating,
            by = %hex_address(&caller),
            "safety switch toggled"
        );
        Ok(())
    }

    /// Current safety status: `(operating, locked_by)`.
    pub fn is_operating(&self) -> (bool, Option<Address>) {
        self.safety.status()
    }

    // =========================================================================
    // COMPLIANCE GUARD
    // =========================================================================

    /// Blacklist an address. Administrator only.
    pub fn blacklist(&mut self, ctx: CallContext, address: Address) -> Result<(), LedgerError> {
        self.ensure_administrator(&ctx)?;
        self.compliance.blacklist(address);
        warn!(target: "ferrum::compliance", address = %hex_address(&address), "blacklisted");
        Ok(())
    }

    /// Remove an address from the blacklist. Administrator only.
    pub fn unblacklist(&mut self, ctx: CallContext, address: Address) -> Result<(), LedgerError> {
        self.ensure_administrator(&ctx)?;
        self.compliance.unblacklist(&address);
        info!(target: "ferrum::compliance", address = %hex_address(&address), "unblacklisted");
        Ok(())
    }

    /// Halt all balance-mutating entry points. Administrator only.
    pub fn pause(&mut self, ctx: CallContext) -> Result<(), LedgerError> {
        self.ensure_administrator(&ctx)?;
        self.compliance.set_paused(true);
        warn!(target: "ferrum::compliance", "paused");
        Ok(())
    }

    /// Lift the global halt. Administrator only.
    pub fn unpause(&mut self, ctx: CallContext) -> Result<(), LedgerError> {
        self.ensure_administrator(&ctx)?;
        self.compliance.set_paused(false);
        info!(target: "ferrum::compliance", "unpaused");
        Ok(())
    }

    /// Emergency remediation: move funds bypassing allowance, blacklist
    /// and pause. Administrator only; fee-exempt. Only the sender balance
    /// guards it.
    pub fn force_transfer(
        &mut self,
        ctx: CallContext,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), LedgerError> {
        self.ensure_administrator(&ctx)?;
        self.debit(from, amount)?;
        self.credit(to, amount)?;
        warn!(
            target: "ferrum::compliance",
            from = %hex_address(&from),
            to = %hex_address(&to),
            amount = %amount,
            "forced transfer"
        );
        Ok(())
    }

    /// Whether an address is blacklisted.
    pub fn is_blacklisted(&self, address: &Address) -> bool {
        self.compliance.is_blacklisted(address)
    }

    /// Whether the ledger is paused.
    pub fn paused(&self) -> bool {
        self.compliance.paused()
    }

    // =========================================================================
    // FEE & FORWARDER CONFIGURATION
    // =========================================================================

    /// Set the transfer-fee recipient. Administrator only.
    pub fn set_fee_faucet(&mut self, ctx: CallContext, faucet: Address) -> Result<(), LedgerError> {
        self.ensure_administrator(&ctx)?;
        self.fees.fee_faucet = Some(faucet);
        info!(target: "ferrum::fees", faucet = %hex_address(&faucet), "fees faucet updated");
        Ok(())
    }

    /// Set the transfer fee rate (parts per 10_000). Administrator only.
    pub fn set_tx_fee_rate(&mut self, ctx: CallContext, rate: U256) -> Result<(), LedgerError> {
        self.ensure_administrator(&ctx)?;
        self.fees.tx_fee_rate = rate;
        info!(target: "ferrum::fees", rate = %rate, "tx fee rate updated");
        Ok(())
    }

    /// Current transfer fee rate.
    pub fn get_tx_fee_rate(&self) -> U256 {
        self.fees.tx_fee_rate
    }

    /// Set the flat gasless base fee. Administrator only.
    pub fn set_gasless_basefee(
        &mut self,
        ctx: CallContext,
        basefee: U256,
    ) -> Result<(), LedgerError> {
        self.ensure_administrator(&ctx)?;
        self.fees.gasless_basefee = basefee;
        info!(target: "ferrum::fees", basefee = %basefee, "gasless base fee updated");
        Ok(())
    }

    /// Current gasless base fee.
    pub fn gasless_basefee(&self) -> U256 {
        self.fees.gasless_basefee
    }

    /// Register a trusted forwarder. Administrator only.
    pub fn set_trusted_forwarder(
        &mut self,
        ctx: CallContext,
        forwarder: Address,
    ) -> Result<(), LedgerError> {
        self.ensure_administrator(&ctx)?;
        self.trusted_forwarders.insert(forwarder);
        info!(
            target: "ferrum::fees",
            forwarder = %hex_address(&forwarder),
            "trusted forwarder updated"
        );
        Ok(())
    }

    /// Whether `forwarder` is a trusted forwarder of this ledger.
    pub fn is_trusted_forwarder(&self, forwarder: &Address) -> bool {
        self.trusted_forwarders.contains(forwarder)
    }

    // =========================================================================
    // ISSUANCE
    // =========================================================================

    /// Mint new supply. Master-Issuer uncapped; a registered Issuer only
    /// within its remaining allowance, which is decremented by exactly the
    /// minted amount. Requires operating and not paused.
    pub fn mint(&mut self, ctx: CallContext, to: Address, amount: U256) -> Result<(), LedgerError> {
        let caller = ctx.caller;
        let is_master = self.roles.has_role(Role::MasterIssuer, &caller);
        let is_issuer = self.roles.has_role(Role::Issuer, &caller);
        if !is_master && !is_issuer {
            return Err(LedgerError::Unauthorized);
        }
        self.safety.ensure_operating()?;
        self.compliance.ensure_not_paused()?;

        let new_supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        if !is_master {
            self.issuance.debit(&caller, amount)?;
        }
        self.credit(to, amount)?;
        self.total_supply = new_supply;

        info!(
            target: "ferrum::issuance",
            by = %hex_address(&caller),
            to = %hex_address(&to),
            amount = %amount,
            "minted"
        );
        Ok(())
    }

    /// Burn from the caller's own balance. Master-Issuer or Issuer;
    /// requires operating and not paused. An Issuer's allowance is
    /// restored by exactly the burned amount (uncapped).
    pub fn burn(&mut self, ctx: CallContext, amount: U256) -> Result<(), LedgerError> {
        let caller = ctx.caller;
        let is_master = self.roles.has_role(Role::MasterIssuer, &caller);
        let is_issuer = self.roles.has_role(Role::Issuer, &caller);
        if !is_master && !is_issuer {
            return Err(LedgerError::Unauthorized);
        }
        self.safety.ensure_operating()?;
        self.compliance.ensure_not_paused()?;

        // Validate everything before any mutation.
        if self.balance_of(&caller) < amount {
            return Err(LedgerError::InsufficientBalance);
        }
        let new_supply = self
            .total_supply
            .checked_sub(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        let restored = if is_issuer {
            Some(
                self.issuance
                    .allowance_of(&caller)
                    .checked_add(amount)
                    .ok_or(LedgerError::ArithmeticOverflow)?,
            )
        } else {
            None
        };

        self.debit(caller, amount)?;
        self.total_supply = new_supply;
        if let Some(restored) = restored {
            self.issuance.set(caller, restored);
        }

        info!(
            target: "ferrum::issuance",
            by = %hex_address(&caller),
            amount = %amount,
            "burned"
        );
        Ok(())
    }

    /// Register an issuer with a minting allowance. Master-Issuer only.
    /// Re-adding an existing issuer overwrites its allowance.
    pub fn add_minter(
        &mut self,
        ctx: CallContext,
        minter: Address,
        allowance: U256,
    ) -> Result<(), LedgerError> {
        self.ensure_master_issuer(&ctx)?;
        self.roles.add_issuer(minter);
        self.issuance.set(minter, allowance);
        info!(
            target: "ferrum::issuance",
            minter = %hex_address(&minter),
            allowance = %allowance,
            "minting allowance updated"
        );
        Ok(())
    }

    /// Deregister an issuer, zeroing its allowance. Master-Issuer only.
    pub fn remove_minter(&mut self, ctx: CallContext, minter: Address) -> Result<(), LedgerError> {
        self.ensure_master_issuer(&ctx)?;
        if !self.roles.has_role(Role::Issuer, &minter) {
            return Err(LedgerError::InvalidRoleTransition);
        }
        self.roles.remove_issuer(&minter);
        self.issuance.remove(&minter);
        info!(
            target: "ferrum::issuance",
            minter = %hex_address(&minter),
            allowance = %U256::zero(),
            "minting allowance updated"
        );
        Ok(())
    }

    /// Overwrite an issuer's allowance. Master-Issuer only; the target
    /// must currently be an issuer.
    pub fn update_minting_allowance(
        &mut self,
        ctx: CallContext,
        minter: Address,
        allowance: U256,
    ) -> Result<(), LedgerError> {
        self.ensure_master_issuer(&ctx)?;
        if !self.roles.has_role(Role::Issuer, &minter) {
            return Err(LedgerError::InvalidRoleTransition);
        }
        self.issuance.set(minter, allowance);
        info!(
            target: "ferrum::issuance",
            minter = %hex_address(&minter),
            allowance = %allowance,
            "minting allowance updated"
        );
        Ok(())
    }

    /// Remaining minting allowance of an issuer.
    pub fn get_minter_allowance(&self, minter: &Address) -> U256 {
        self.issuance.allowance_of(minter)
    }

    // =========================================================================
    // TRANSFERS & ALLOWANCES
    // =========================================================================

    /// Fee-bearing transfer from the caller.
    pub fn transfer(
        &mut self,
        ctx: CallContext,
        to: Address,
        amount: U256,
    ) -> Result<(), LedgerError> {
        let fee = self.execute_transfer(ctx.caller, to, amount)?;
        info!(
            target: "ferrum::ledger",
            from = %hex_address(&ctx.caller),
            to = %hex_address(&to),
            amount = %amount,
            fee = %fee,
            "transfer"
        );
        Ok(())
    }

    /// Overwrite the caller's allowance for `spender`.
    pub fn approve(
        &mut self,
        ctx: CallContext,
        spender: Address,
        amount: U256,
    ) -> Result<(), LedgerError> {
        self.set_allowance(ctx.caller, spender, amount);
        info!(
            target: "ferrum::ledger",
            owner = %hex_address(&ctx.caller),
            spender = %hex_address(&spender),
            amount = %amount,
            "approval"
        );
        Ok(())
    }

    /// Fee-bearing transfer on behalf of `from`, within the caller's
    /// allowance. The allowance is decremented by the gross debited
    /// amount, not the net-of-fee credit.
    pub fn transfer_from(
        &mut self,
        ctx: CallContext,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), LedgerError> {
        let granted = self.allowance(&from, &ctx.caller);
        let remaining = granted
            .checked_sub(amount)
            .ok_or(LedgerError::AllowanceExceeded)?;

        let fee = self.execute_transfer(from, to, amount)?;
        self.set_allowance(from, ctx.caller, remaining);

        info!(
            target: "ferrum::ledger",
            from = %hex_address(&from),
            to = %hex_address(&to),
            spender = %hex_address(&ctx.caller),
            amount = %amount,
            fee = %fee,
            "transfer from"
        );
        Ok(())
    }

    // =========================================================================
    // SIGNATURE-AUTHORIZED PATHS
    // =========================================================================

    /// Apply a signed allowance grant. Anyone may submit it; the effect is
    /// exactly `approve(owner -> spender, value)`. Single-use: the request
    /// nonce must equal the owner's stored nonce and is consumed
    /// atomically with the approval.
    pub fn permit(
        &mut self,
        ctx: CallContext,
        authorization: &MetaAuthorization,
        signature: &EcdsaSignature,
    ) -> Result<(), LedgerError> {
        self.compliance
            .ensure_clear(&[authorization.owner, authorization.spender])?;
        let next_nonce = self.validate_authorization(
            &ctx,
            authorization,
            signature,
            AuthorizationScheme::Permit,
        )?;

        self.account_mut(authorization.owner).nonce = next_nonce;
        self.set_allowance(authorization.owner, authorization.spender, authorization.value);

        info!(
            target: "ferrum::ledger",
            owner = %hex_address(&authorization.owner),
            spender = %hex_address(&authorization.spender),
            amount = %authorization.value,
            "permit applied"
        );
        Ok(())
    }

    /// Apply a signed transfer. Performs the full fee-bearing transfer
    /// from `owner` to `spender`; no prior allowance is required or
    /// consumed. Single-use via the same nonce space as permits.
    pub fn transfer_with_authorization(
        &mut self,
        ctx: CallContext,
        authorization: &MetaAuthorization,
        signature: &EcdsaSignature,
    ) -> Result<(), LedgerError> {
        let next_nonce = self.validate_authorization(
            &ctx,
            authorization,
            signature,
            AuthorizationScheme::TransferWithAuthorization,
        )?;

        // Pause, blacklist and balance guards run inside the shared
        // movement routine; the nonce is consumed only on success.
        let fee =
            self.execute_transfer(authorization.owner, authorization.spender, authorization.value)?;
        self.account_mut(authorization.owner).nonce = next_nonce;

        info!(
            target: "ferrum::ledger",
            from = %hex_address(&authorization.owner),
            to = %hex_address(&authorization.spender),
            amount = %authorization.value,
            fee = %fee,
            "transfer with authorization"
        );
        Ok(())
    }

    /// Shared validation for both authorization schemes: nonce equality,
    /// deadline, signature. Returns the successor nonce to store on
    /// success.
    fn validate_authorization(
        &self,
        ctx: &CallContext,
        authorization: &MetaAuthorization,
        signature: &EcdsaSignature,
        scheme: AuthorizationScheme,
    ) -> Result<U256, LedgerError> {
        let current = self.nonce_of(&authorization.owner);
        if authorization.nonce != current {
            return Err(LedgerError::NonceMismatch);
        }
        let next = current
            .checked_add(U256::one())
            .ok_or(LedgerError::ArithmeticOverflow)?;

        if U256::from(ctx.timestamp) > authorization.deadline {
            return Err(LedgerError::Expired);
        }

        let digest = authorization.digest(&self.domain_separator, scheme);
        recover_expected_signer(&digest, signature, authorization.owner)?;

        Ok(next)
    }

    // =========================================================================
    // FORWARDED PATH
    // =========================================================================

    /// Apply a transfer relayed by a trusted forwarder on behalf of
    /// `from`, settling the flat gasless base fee to `operator` in the
    /// same call. The combined debit is validated up front so a failed
    /// settlement can never strand a half-applied forward.
    pub fn relayed_transfer(
        &mut self,
        forwarder: Address,
        from: Address,
        to: Address,
        amount: U256,
        operator: Address,
    ) -> Result<(), LedgerError> {
        if !self.is_trusted_forwarder(&forwarder) {
            return Err(LedgerError::ForwardingNotTrusted);
        }

        let basefee = self.fees.gasless_basefee;
        let required = amount
            .checked_add(basefee)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        if self.balance_of(&from) < required {
            return Err(LedgerError::InsufficientBalance);
        }

        let fee = self.execute_transfer(from, to, amount)?;
        self.pay_gasless_basefee(forwarder, from, operator)?;

        info!(
            target: "ferrum::ledger",
            forwarder = %hex_address(&forwarder),
            from = %hex_address(&from),
            to = %hex_address(&to),
            amount = %amount,
            fee = %fee,
            "relayed transfer"
        );
        Ok(())
    }

    /// Settle the flat gasless base fee from `from` to the forward
    /// operator. Callable only through a trusted forwarder; no-op when no
    /// base fee is configured. Fee-exempt.
    pub fn pay_gasless_basefee(
        &mut self,
        forwarder: Address,
        from: Address,
        operator: Address,
    ) -> Result<(), LedgerError> {
        if !self.is_trusted_forwarder(&forwarder) {
            return Err(LedgerError::ForwardingNotTrusted);
        }
        let basefee = self.fees.gasless_basefee;
        if basefee.is_zero() {
            return Ok(());
        }
        self.debit(from, basefee)?;
        self.credit(operator, basefee)?;
        info!(
            target: "ferrum::fees",
            from = %hex_address(&from),
            operator = %hex_address(&operator),
            basefee = %basefee,
            "gasless base fee settled"
        );
        Ok(())
    }

    // =========================================================================
    // READ VIEWS
    // =========================================================================

    /// Balance of an account.
    pub fn balance_of(&self, address: &Address) -> U256 {
        self.accounts
            .get(address)
            .map(|account| account.balance)
            .unwrap_or_default()
    }

    /// Allowance granted by `owner` to `spender`.
    pub fn allowance(&self, owner: &Address, spender: &Address) -> U256 {
        self.accounts
            .get(owner)
            .and_then(|account| account.allowances.get(spender))
            .copied()
            .unwrap_or_default()
    }

    /// Total circulating supply.
    pub fn total_supply(&self) -> U256 {
        self.total_supply
    }

    /// Current authorization nonce of an account.
    pub fn nonce_of(&self, address: &Address) -> U256 {
        self.accounts
            .get(address)
            .map(|account| account.nonce)
            .unwrap_or_default()
    }

    /// Token name.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Token symbol.
    pub fn symbol(&self) -> &str {
        &self.config.symbol
    }

    /// Display decimals.
    pub fn decimals(&self) -> u8 {
        self.config.decimals
    }

    /// This ledger's contract identity.
    pub fn contract_address(&self) -> Address {
        self.config.contract
    }

    /// The EIP-712 domain separator signatures must be bound to.
    pub fn domain_separator(&self) -> Hash {
        self.domain_separator
    }

    // =========================================================================
    // INTERNAL ARITHMETIC CORE
    // =========================================================================

    /// The single movement routine behind `transfer`, `transfer_from`,
    /// `transfer_with_authorization` and relayed transfers: pause and
    /// blacklist guards, gross debit, net-of-fee credit, fee credit.
    /// Returns the fee taken.
    fn execute_transfer(
        &mut self,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<U256, LedgerError> {
        self.compliance.ensure_not_paused()?;
        self.compliance.ensure_clear(&[from, to])?;

        let fee = self.fees.transfer_fee(amount)?;
        let net = amount
            .checked_sub(fee)
            .ok_or(LedgerError::ArithmeticOverflow)?;

        self.debit(from, amount)?;
        self.credit(to, net)?;
        if !fee.is_zero() {
            if let Some(faucet) = self.fees.fee_faucet {
                self.credit(faucet, fee)?;
            }
        }
        Ok(fee)
    }

    fn account_mut(&mut self, address: Address) -> &mut AccountState {
        self.accounts.entry(address).or_default()
    }

    fn set_allowance(&mut self, owner: Address, spender: Address, amount: U256) {
        self.account_mut(owner).allowances.insert(spender, amount);
    }

    fn debit(&mut self, address: Address, amount: U256) -> Result<(), LedgerError> {
        let account = self.account_mut(address);
        account.balance = account
            .balance
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance)?;
        Ok(())
    }

    // Credits cannot overflow while sum(balances) == total_supply holds;
    // the checked add keeps the fail-closed contract regardless.
    fn credit(&mut self, address: Address, amount: U256) -> Result<(), LedgerError> {
        let account = self.account_mut(address);
        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
