//! # Ledger Errors
//!
//! The failure taxonomy of every ledger entry point. All failures are
//! synchronous and abort the call before any state change survives;
//! retry is the caller's responsibility at the next admitted call.

use ferrum_authorization::AuthorizationError;
use ferrum_types::{hex_address, Address};
use thiserror::Error;

/// Errors returned by ledger entry points.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// The caller does not hold the role the entry point requires.
    #[error("caller is not authorized for this entry point")]
    Unauthorized,

    /// Debit exceeds the account balance.
    #[error("insufficient balance")]
    InsufficientBalance,

    /// Spend or mint beyond the granted allowance.
    #[error("allowance exceeded")]
    AllowanceExceeded,

    /// A party to the operation is blacklisted.
    #[error("account {} is blacklisted", hex_address(.0))]
    Blacklisted(Address),

    /// The ledger is paused; balance-mutating entry points are halted.
    #[error("ledger is paused")]
    Paused,

    /// The safety switch is off; mint and burn are suspended.
    #[error("operations are suspended by the safety switch")]
    OperationsSuspended,

    /// Only the locking controller or the owner may re-enable operations.
    #[error("caller is not authorized to resume operations")]
    NotAuthorizedToResume,

    /// The detached signature failed validation.
    #[error("invalid signature: {0}")]
    InvalidSignature(#[from] AuthorizationError),

    /// The authorization deadline has passed.
    #[error("authorization expired")]
    Expired,

    /// The request nonce does not equal the stored account nonce
    /// (replayed or out-of-order request).
    #[error("nonce mismatch")]
    NonceMismatch,

    /// The calling relay is not a trusted forwarder of this ledger.
    #[error("forwarding not trusted")]
    ForwardingNotTrusted,

    /// Re-assigning a singleton role to its current holder, moving a role
    /// to the zero address, or operating on a role the target does not hold.
    #[error("invalid role transition")]
    InvalidRoleTransition,

    /// Checked arithmetic failed closed instead of wrapping.
    #[error("arithmetic overflow")]
    ArithmeticOverflow,
}
