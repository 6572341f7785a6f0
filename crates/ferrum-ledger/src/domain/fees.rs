//! # Fee Engine
//!
//! Percentage transfer fees in parts-per-10000, deducted from the
//! recipient's credit (the sender is always debited the gross amount), plus
//! the flat gasless base fee paid to forward operators. Mint, burn and
//! forced transfers are fee-exempt.

use super::errors::LedgerError;
use ferrum_types::{Address, U256};
use serde::{Deserialize, Serialize};

/// Fee rates are expressed in parts per 10_000 (basis points).
pub const FEE_RATIO: u64 = 10_000;

/// Transfer-fee and gasless-fee configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeConfig {
    /// Recipient of percentage transfer fees. Unset means fees are off.
    pub fee_faucet: Option<Address>,
    /// Transfer fee rate over `FEE_RATIO`.
    pub tx_fee_rate: U256,
    /// Flat fee debited from a forwarded sender and credited to the
    /// forward operator. Zero means gasless forwarding is uncompensated.
    pub gasless_basefee: U256,
}

impl FeeConfig {
    /// Fee for a transfer of `amount`: `amount * rate / 10_000`, zero when
    /// no faucet is configured or the rate is zero. Fails closed if the
    /// product overflows.
    pub fn transfer_fee(&self, amount: U256) -> Result<U256, LedgerError> {
        if self.fee_faucet.is_none() || self.tx_fee_rate.is_zero() {
            return Ok(U256::zero());
        }
        let scaled = amount
            .checked_mul(self.tx_fee_rate)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        Ok(scaled / U256::from(FEE_RATIO))
    }
}
