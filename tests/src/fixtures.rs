//! # Test Fixtures
//!
//! Shared world builders: a funded ledger with its full role cast, plus a
//! trusted forwarder wired to it.

use ferrum_forwarder::Forwarder;
use ferrum_ledger::{Ledger, LedgerConfig};
use ferrum_types::{Address, CallContext, U256};

pub const OWNER: Address = [0x01; 20];
pub const ADMIN: Address = [0x02; 20];
pub const MASTER: Address = [0x03; 20];
pub const MINTER: Address = [0x04; 20];
pub const FAUCET: Address = [0x05; 20];
pub const CONTROLLER_1: Address = [0xC1; 20];
pub const CONTROLLER_2: Address = [0xC2; 20];
pub const ALICE: Address = [0x0A; 20];
pub const BOB: Address = [0x0B; 20];
pub const OPERATOR: Address = [0xEE; 20];

pub const LEDGER_CONTRACT: Address = [0x11; 20];
pub const RELAY_CONTRACT: Address = [0xF0; 20];

pub const CHAIN_ID: u64 = 31337;
pub const NOW: u64 = 1_700_000_000;

/// Install the test-run subscriber once; later calls are no-ops. Run with
/// `RUST_LOG=ferrum=debug` to watch the structured events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A call admitted "now".
pub fn ctx(caller: Address) -> CallContext {
    CallContext::new(caller, NOW)
}

pub fn amt(value: u64) -> U256 {
    U256::from(value)
}

/// The standard ledger configuration used across the suite.
pub fn config() -> LedgerConfig {
    LedgerConfig::new("Ferrum", "FRM", 6, CHAIN_ID, LEDGER_CONTRACT)
}

/// A fresh ledger with only the owner set.
pub fn bare_ledger() -> Ledger {
    Ledger::new(config(), OWNER).expect("owner is non-zero")
}

/// Ledger with the full role cast appointed and 1000 units minted to each
/// of alice and bob.
pub fn funded_ledger() -> Ledger {
    let mut ledger = bare_ledger();
    ledger.set_administrator(ctx(OWNER), ADMIN).unwrap();
    ledger.set_master_issuer(ctx(OWNER), MASTER).unwrap();
    ledger.mint(ctx(MASTER), ALICE, amt(1000)).unwrap();
    ledger.mint(ctx(MASTER), BOB, amt(1000)).unwrap();
    ledger
}

/// A funded ledger plus a forwarder it trusts.
pub fn forwarded_world() -> (Ledger, Forwarder) {
    let mut ledger = funded_ledger();
    let forwarder = Forwarder::new("FerrumForwarder", CHAIN_ID, RELAY_CONTRACT, LEDGER_CONTRACT);
    ledger
        .set_trusted_forwarder(ctx(ADMIN), RELAY_CONTRACT)
        .unwrap();
    (ledger, forwarder)
}
