//! # Ledger Invariants
//!
//! Properties that must survive arbitrary operation interleavings: supply
//! conservation, failure atomicity, strict nonce growth and exact fee
//! arithmetic.

#[cfg(test)]
mod tests {
    use crate::fixtures::*;
    use ferrum_ledger::{Ledger, LedgerError};
    use ferrum_types::{Address, U256};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const PARTIES: [Address; 5] = [ALICE, BOB, MINTER, FAUCET, OPERATOR];

    fn balance_sum(ledger: &Ledger) -> U256 {
        PARTIES.iter().fold(U256::zero(), |acc, address| {
            acc + ledger.balance_of(address)
        })
    }

    #[test]
    fn test_supply_equals_balance_sum_across_random_interleavings() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        let mut ledger = funded_ledger();
        ledger.set_fee_faucet(ctx(ADMIN), FAUCET).unwrap();
        ledger.set_tx_fee_rate(ctx(ADMIN), amt(250)).unwrap();
        ledger
            .add_minter(ctx(MASTER), MINTER, amt(10_000_000))
            .unwrap();

        for _ in 0..500 {
            let from = PARTIES[rng.gen_range(0..PARTIES.len())];
            let to = PARTIES[rng.gen_range(0..PARTIES.len())];
            let amount = amt(rng.gen_range(0..400));

            // Failures are part of the schedule; only the invariant matters.
            let _ = match rng.gen_range(0..4) {
                0 => ledger.transfer(ctx(from), to, amount),
                1 => ledger.mint(ctx(MINTER), to, amount),
                2 => ledger.burn(ctx(MINTER), amount),
                _ => ledger.force_transfer(ctx(ADMIN), from, to, amount),
            };

            assert_eq!(
                balance_sum(&ledger),
                ledger.total_supply(),
                "sum of balances diverged from total supply"
            );
        }
    }

    #[test]
    fn test_failed_operations_leave_no_trace() {
        let mut ledger = funded_ledger();
        ledger.set_fee_faucet(ctx(ADMIN), FAUCET).unwrap();
        ledger.set_tx_fee_rate(ctx(ADMIN), amt(1000)).unwrap();
        ledger
            .add_minter(ctx(MASTER), MINTER, amt(1000))
            .unwrap();

        let before = ledger.clone();

        assert_eq!(
            ledger.transfer(ctx(ALICE), BOB, amt(1_000_000)),
            Err(LedgerError::InsufficientBalance)
        );
        assert_eq!(
            ledger.mint(ctx(MINTER), BOB, amt(2000)),
            Err(LedgerError::AllowanceExceeded)
        );
        assert_eq!(
            ledger.transfer_from(ctx(BOB), ALICE, BOB, amt(1)),
            Err(LedgerError::AllowanceExceeded)
        );
        assert_eq!(
            ledger.force_transfer(ctx(ADMIN), BOB, ALICE, amt(1_000_000)),
            Err(LedgerError::InsufficientBalance)
        );
        assert_eq!(
            ledger.set_owner(ctx(OWNER), OWNER),
            Err(LedgerError::InvalidRoleTransition)
        );

        assert_eq!(before, ledger, "a failed call mutated state");
    }

    #[test]
    fn test_fee_split_is_exact_across_rates() {
        for (rate, expected_fee) in [
            (0u64, 0u64),
            (1, 0),      // 0.01% of 100 truncates to zero
            (250, 2),    // 2.5%
            (1000, 10),  // 10%
            (10_000, 100), // 100%
        ] {
            let mut ledger = funded_ledger();
            ledger.set_fee_faucet(ctx(ADMIN), FAUCET).unwrap();
            ledger.set_tx_fee_rate(ctx(ADMIN), amt(rate)).unwrap();

            ledger.transfer(ctx(BOB), ALICE, amt(100)).unwrap();

            assert_eq!(ledger.balance_of(&BOB), amt(900), "rate {rate}");
            assert_eq!(
                ledger.balance_of(&ALICE),
                amt(1000 + 100 - expected_fee),
                "rate {rate}"
            );
            assert_eq!(ledger.balance_of(&FAUCET), amt(expected_fee), "rate {rate}");
            assert_eq!(ledger.total_supply(), amt(2000), "rate {rate}");
        }
    }

    #[test]
    fn test_rate_above_ratio_fails_closed() {
        let mut ledger = funded_ledger();
        ledger.set_fee_faucet(ctx(ADMIN), FAUCET).unwrap();
        // 100.01%: the net credit would underflow; the transfer must fail
        // closed rather than wrap.
        ledger.set_tx_fee_rate(ctx(ADMIN), amt(10_001)).unwrap();

        assert_eq!(
            ledger.transfer(ctx(BOB), ALICE, amt(100)),
            Err(LedgerError::ArithmeticOverflow)
        );
        assert_eq!(ledger.balance_of(&BOB), amt(1000));
        assert_eq!(ledger.total_supply(), amt(2000));
    }

    #[test]
    fn test_balances_never_go_negative() {
        let mut ledger = funded_ledger();

        assert_eq!(
            ledger.transfer(ctx(ALICE), BOB, amt(1001)),
            Err(LedgerError::InsufficientBalance)
        );
        // An account that never held funds cannot send a single unit.
        let pauper = [0x77; 20];
        assert_eq!(
            ledger.transfer(ctx(pauper), BOB, amt(1)),
            Err(LedgerError::InsufficientBalance)
        );
        assert_eq!(ledger.balance_of(&pauper), U256::zero());
    }

    #[test]
    fn test_accounts_appear_implicitly_and_persist() {
        let mut ledger = funded_ledger();
        let newcomer = [0x88; 20];

        assert_eq!(ledger.balance_of(&newcomer), U256::zero());
        ledger.transfer(ctx(ALICE), newcomer, amt(5)).unwrap();
        assert_eq!(ledger.balance_of(&newcomer), amt(5));

        ledger.transfer(ctx(newcomer), ALICE, amt(5)).unwrap();
        // Drained, but still an account with history.
        assert_eq!(ledger.balance_of(&newcomer), U256::zero());
    }
}
