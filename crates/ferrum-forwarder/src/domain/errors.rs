//! # Forwarder Errors
//!
//! Failures of the relay path. Anything the ledger rejects downstream is
//! carried through transparently; the relay's own failures cover the
//! trust, schema and replay checks that happen before the ledger is ever
//! invoked.

use ferrum_authorization::AuthorizationError;
use ferrum_ledger::LedgerError;
use thiserror::Error;

/// Errors returned by the forward relay.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ForwarderError {
    /// The target ledger does not recognize this forwarder.
    #[error("forwarding not trusted")]
    ForwardingNotTrusted,

    /// The relayed calldata encodes anything other than a plain transfer.
    #[error("forwarded call not allowed")]
    ForwardedCallNotAllowed,

    /// The submitted domain separator is not the relay's registered domain.
    #[error("unregistered domain separator")]
    UnregisteredDomain,

    /// The submitted type hash is not the registered forward-request type.
    #[error("unregistered request type")]
    UnregisteredRequestType,

    /// The request nonce does not equal the relay-local nonce for the
    /// signer (replayed or out-of-order request).
    #[error("nonce mismatch")]
    NonceMismatch,

    /// The detached signature failed validation or was not produced by
    /// `request.from`.
    #[error("invalid signature: {0}")]
    InvalidSignature(#[from] AuthorizationError),

    /// The ledger rejected the relayed call.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
