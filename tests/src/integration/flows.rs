//! # Governance & Ledger Lifecycle Flows
//!
//! The direct-call surface: role appointments and their gates, issuance
//! delegation, compliance actions and the fee engine, exercised the way an
//! operator would drive a deployment.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use ferrum_ledger::{LedgerError, Role};
    use ferrum_types::U256;

    #[test]
    fn test_ownership_hand_over_and_back() {
        init_tracing();
        let mut ledger = funded_ledger();
        let new_owner = [0x21; 20];

        ledger.set_owner(ctx(OWNER), new_owner).unwrap();
        assert!(ledger.has_role(Role::Owner, &new_owner));
        assert!(!ledger.has_role(Role::Owner, &OWNER));

        // The outgoing owner lost its powers with the role.
        assert_eq!(
            ledger.set_owner(ctx(OWNER), BOB),
            Err(LedgerError::Unauthorized)
        );

        ledger.set_owner(ctx(new_owner), OWNER).unwrap();
        assert!(ledger.has_role(Role::Owner, &OWNER));
        assert!(!ledger.has_role(Role::Owner, &new_owner));
    }

    #[test]
    fn test_administrator_replacement_moves_the_singleton() {
        let mut ledger = funded_ledger();
        let new_admin = [0x22; 20];

        ledger.set_administrator(ctx(OWNER), new_admin).unwrap();

        assert!(ledger.has_role(Role::Administrator, &new_admin));
        assert!(!ledger.has_role(Role::Administrator, &ADMIN));
        assert_eq!(ledger.pause(ctx(ADMIN)), Err(LedgerError::Unauthorized));
        assert!(ledger.pause(ctx(new_admin)).is_ok());
    }

    #[test]
    fn test_master_issuer_replacement_keeps_delegated_allowances() {
        let mut ledger = funded_ledger();
        let new_master = [0x23; 20];
        ledger
            .add_minter(ctx(MASTER), MINTER, amt(1_000_000))
            .unwrap();

        ledger.set_master_issuer(ctx(OWNER), new_master).unwrap();

        // The outgoing master cannot mint any more.
        assert_eq!(
            ledger.mint(ctx(MASTER), ALICE, amt(1000)),
            Err(LedgerError::Unauthorized)
        );
        // The new master can, uncapped.
        ledger.mint(ctx(new_master), BOB, amt(1000)).unwrap();
        // Already-delegated issuer allowances survive the hand-over.
        assert_eq!(ledger.get_minter_allowance(&MINTER), amt(1_000_000));
        ledger.mint(ctx(MINTER), ALICE, amt(500)).unwrap();
        assert_eq!(ledger.get_minter_allowance(&MINTER), amt(999_500));
    }

    #[test]
    fn test_controller_grant_revoke_round_trip() {
        let mut ledger = funded_ledger();

        ledger
            .grant_role(ctx(OWNER), Role::Controller, CONTROLLER_1)
            .unwrap();
        assert!(ledger.has_role(Role::Controller, &CONTROLLER_1));

        ledger
            .revoke_role(ctx(OWNER), Role::Controller, CONTROLLER_1)
            .unwrap();
        assert!(!ledger.has_role(Role::Controller, &CONTROLLER_1));
        assert_eq!(
            ledger.safety_switch(ctx(CONTROLLER_1)),
            Err(LedgerError::Unauthorized)
        );
    }

    #[test]
    fn test_role_gate_matrix() {
        let mut ledger = funded_ledger();

        // Owner-only entry points reject everyone else.
        for intruder in [ADMIN, MASTER, BOB] {
            assert_eq!(
                ledger.set_owner(ctx(intruder), BOB),
                Err(LedgerError::Unauthorized)
            );
            assert_eq!(
                ledger.set_administrator(ctx(intruder), BOB),
                Err(LedgerError::Unauthorized)
            );
            assert_eq!(
                ledger.set_master_issuer(ctx(intruder), BOB),
                Err(LedgerError::Unauthorized)
            );
            assert_eq!(
                ledger.grant_role(ctx(intruder), Role::Controller, BOB),
                Err(LedgerError::Unauthorized)
            );
        }

        // Administrator-only entry points reject the owner too.
        for intruder in [OWNER, MASTER, BOB] {
            assert_eq!(
                ledger.blacklist(ctx(intruder), BOB),
                Err(LedgerError::Unauthorized)
            );
            assert_eq!(
                ledger.unblacklist(ctx(intruder), BOB),
                Err(LedgerError::Unauthorized)
            );
            assert_eq!(ledger.pause(ctx(intruder)), Err(LedgerError::Unauthorized));
            assert_eq!(ledger.unpause(ctx(intruder)), Err(LedgerError::Unauthorized));
            assert_eq!(
                ledger.force_transfer(ctx(intruder), BOB, ALICE, amt(1)),
                Err(LedgerError::Unauthorized)
            );
            assert_eq!(
                ledger.set_fee_faucet(ctx(intruder), FAUCET),
                Err(LedgerError::Unauthorized)
            );
            assert_eq!(
                ledger.set_tx_fee_rate(ctx(intruder), amt(1000)),
                Err(LedgerError::Unauthorized)
            );
            assert_eq!(
                ledger.set_gasless_basefee(ctx(intruder), amt(10)),
                Err(LedgerError::Unauthorized)
            );
            assert_eq!(
                ledger.set_trusted_forwarder(ctx(intruder), RELAY_CONTRACT),
                Err(LedgerError::Unauthorized)
            );
        }

        // Issuance entry points reject owner and administrator alike.
        for intruder in [OWNER, ADMIN, BOB] {
            assert_eq!(
                ledger.mint(ctx(intruder), BOB, amt(1)),
                Err(LedgerError::Unauthorized)
            );
            assert_eq!(
                ledger.burn(ctx(intruder), amt(1)),
                Err(LedgerError::Unauthorized)
            );
            assert_eq!(
                ledger.add_minter(ctx(intruder), BOB, amt(1)),
                Err(LedgerError::Unauthorized)
            );
            assert_eq!(
                ledger.remove_minter(ctx(intruder), MINTER),
                Err(LedgerError::Unauthorized)
            );
            assert_eq!(
                ledger.update_minting_allowance(ctx(intruder), MINTER, amt(1)),
                Err(LedgerError::Unauthorized)
            );
        }
    }

    #[test]
    fn test_metadata_views() {
        let ledger = funded_ledger();
        assert_eq!(ledger.name(), "Ferrum");
        assert_eq!(ledger.symbol(), "FRM");
        assert_eq!(ledger.decimals(), 6);
        assert_eq!(ledger.contract_address(), LEDGER_CONTRACT);
    }

    #[test]
    fn test_fee_configuration_flow() {
        let mut ledger = funded_ledger();

        ledger.set_fee_faucet(ctx(ADMIN), FAUCET).unwrap();
        ledger.set_tx_fee_rate(ctx(ADMIN), amt(1000)).unwrap();
        assert_eq!(ledger.get_tx_fee_rate(), amt(1000));

        ledger.transfer(ctx(BOB), ALICE, amt(100)).unwrap();
        assert_eq!(ledger.balance_of(&ALICE), amt(1100));
        assert_eq!(ledger.balance_of(&FAUCET), amt(10));
        assert_eq!(ledger.balance_of(&BOB), amt(890));
    }

    #[test]
    fn test_transfers_without_fee_config_move_full_amounts() {
        let mut ledger = funded_ledger();

        ledger.transfer(ctx(ALICE), BOB, amt(500)).unwrap();

        assert_eq!(ledger.balance_of(&BOB), amt(1500));
        assert_eq!(ledger.balance_of(&ALICE), amt(500));
    }

    #[test]
    fn test_safety_switch_full_cycle() {
        let mut ledger = funded_ledger();
        ledger
            .grant_role(ctx(OWNER), Role::Controller, CONTROLLER_1)
            .unwrap();
        ledger
            .grant_role(ctx(OWNER), Role::Controller, CONTROLLER_2)
            .unwrap();

        ledger.safety_switch(ctx(CONTROLLER_1)).unwrap();
        let (operating, locked_by) = ledger.is_operating();
        assert!(!operating);
        assert_eq!(locked_by, Some(CONTROLLER_1));

        assert_eq!(
            ledger.mint(ctx(MASTER), BOB, amt(1000)),
            Err(LedgerError::OperationsSuspended)
        );
        assert_eq!(
            ledger.safety_switch(ctx(CONTROLLER_2)),
            Err(LedgerError::NotAuthorizedToResume)
        );

        ledger.safety_switch(ctx(CONTROLLER_1)).unwrap();
        assert_eq!(ledger.is_operating(), (true, None));
        ledger.mint(ctx(MASTER), BOB, amt(1000)).unwrap();
        assert_eq!(ledger.balance_of(&BOB), amt(2000));
    }

    #[test]
    fn test_owner_releases_any_lock() {
        let mut ledger = funded_ledger();
        ledger
            .grant_role(ctx(OWNER), Role::Controller, CONTROLLER_1)
            .unwrap();

        ledger.safety_switch(ctx(CONTROLLER_1)).unwrap();
        ledger.safety_switch(ctx(OWNER)).unwrap();

        assert_eq!(ledger.is_operating(), (true, None));
    }

    #[test]
    fn test_blacklist_flow_with_remediation() {
        let mut ledger = funded_ledger();

        ledger.blacklist(ctx(ADMIN), BOB).unwrap();
        assert!(ledger.is_blacklisted(&BOB));
        assert_eq!(
            ledger.transfer(ctx(BOB), ALICE, amt(50)),
            Err(LedgerError::Blacklisted(BOB))
        );

        // Administrative remediation moves the stuck funds regardless.
        ledger
            .force_transfer(ctx(ADMIN), BOB, ALICE, amt(50))
            .unwrap();
        assert_eq!(ledger.balance_of(&ALICE), amt(1050));

        ledger.unblacklist(ctx(ADMIN), BOB).unwrap();
        assert!(!ledger.is_blacklisted(&BOB));
        ledger.transfer(ctx(BOB), ALICE, amt(50)).unwrap();
        assert_eq!(ledger.balance_of(&ALICE), amt(1100));
    }

    #[test]
    fn test_pause_flow() {
        let mut ledger = funded_ledger();

        ledger.pause(ctx(ADMIN)).unwrap();
        assert!(ledger.paused());
        assert_eq!(
            ledger.transfer(ctx(BOB), ALICE, amt(50)),
            Err(LedgerError::Paused)
        );

        ledger.unpause(ctx(ADMIN)).unwrap();
        assert!(!ledger.paused());
        ledger.transfer(ctx(BOB), ALICE, amt(50)).unwrap();
        assert_eq!(ledger.balance_of(&ALICE), amt(1050));
    }

    #[test]
    fn test_minter_delegation_lifecycle() {
        let mut ledger = funded_ledger();

        ledger
            .add_minter(ctx(MASTER), MINTER, amt(1_000_000))
            .unwrap();
        assert!(ledger.has_role(Role::Issuer, &MINTER));
        assert_eq!(ledger.get_minter_allowance(&MINTER), amt(1_000_000));

        ledger
            .update_minting_allowance(ctx(MASTER), MINTER, amt(2_000_000))
            .unwrap();
        assert_eq!(ledger.get_minter_allowance(&MINTER), amt(2_000_000));

        ledger.remove_minter(ctx(MASTER), MINTER).unwrap();
        assert!(!ledger.has_role(Role::Issuer, &MINTER));
        assert_eq!(ledger.get_minter_allowance(&MINTER), U256::zero());
    }

    #[test]
    fn test_issuer_mint_and_burn_bookkeeping() {
        let mut ledger = funded_ledger();
        ledger
            .add_minter(ctx(MASTER), MINTER, amt(1_000_000))
            .unwrap();

        let supply = ledger.total_supply();
        ledger.mint(ctx(MINTER), BOB, amt(1000)).unwrap();
        assert_eq!(ledger.balance_of(&BOB), amt(2000));
        assert_eq!(ledger.get_minter_allowance(&MINTER), amt(999_000));
        assert_eq!(ledger.total_supply(), supply + amt(1000));

        assert_eq!(
            ledger.mint(ctx(MINTER), BOB, amt(2_000_000)),
            Err(LedgerError::AllowanceExceeded)
        );

        ledger.mint(ctx(MINTER), MINTER, amt(1000)).unwrap();
        let supply = ledger.total_supply();
        ledger.burn(ctx(MINTER), amt(1000)).unwrap();
        assert_eq!(ledger.balance_of(&MINTER), U256::zero());
        assert_eq!(ledger.total_supply(), supply - amt(1000));
        assert_eq!(ledger.get_minter_allowance(&MINTER), amt(999_000));
    }

    #[test]
    fn test_burn_beyond_balance_fails() {
        let mut ledger = funded_ledger();
        ledger
            .add_minter(ctx(MASTER), MINTER, amt(1_000_000))
            .unwrap();
        ledger.mint(ctx(MINTER), MINTER, amt(1000)).unwrap();

        assert_eq!(
            ledger.burn(ctx(MINTER), amt(2_000_000)),
            Err(LedgerError::InsufficientBalance)
        );
    }
}
