//! Contract-side error taxonomy.
//!
//! Everything here surfaces at the point of detection, before any network
//! interaction and with no partial mutation of handle state. The only
//! variant that can follow a remote round trip is [`ContractError::Ledger`].

use alloy_primitives::{Address, B256};
use torque_provider::LedgerError;

/// Errors from ABI resolution, encoding, decoding and handle misuse.
#[derive(Debug, thiserror::Error)]
pub enum ContractError {
    /// Encode/decode failure: argument type mismatch or malformed data.
    /// Always a caller bug; never retried.
    #[error(transparent)]
    Encode(#[from] alloy_dyn_abi::Error),

    /// Wrong number of arguments for an entry, caught before encoding.
    #[error("`{name}` expects {expected} argument(s), got {got}")]
    Arity {
        /// Entry the arguments were meant for.
        name: String,
        /// Declared parameter count.
        expected: usize,
        /// Supplied argument count.
        got: usize,
    },

    /// A human-readable signature string that did not parse.
    #[error("could not parse signature `{signature}`: {reason}")]
    SignatureParse {
        /// The offending signature string.
        signature: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// No function with this name and arity in the ABI.
    #[error("no function `{name}` taking {arity} argument(s)")]
    UnknownFunction {
        /// Requested function name.
        name: String,
        /// Requested arity.
        arity: usize,
    },

    /// Several functions share this name and arity; resolution refuses to
    /// pick one silently.
    #[error("{count} overloads of `{name}` take {arity} argument(s)")]
    AmbiguousFunction {
        /// Requested function name.
        name: String,
        /// Requested arity.
        arity: usize,
        /// How many entries matched.
        count: usize,
    },

    /// No event with this name in the ABI.
    #[error("no event `{name}` in the ABI")]
    UnknownEvent {
        /// Requested event name.
        name: String,
    },

    /// Several events share this name.
    #[error("{count} events named `{name}`; decode with an explicit entry")]
    AmbiguousEvent {
        /// Requested event name.
        name: String,
        /// How many entries share it.
        count: usize,
    },

    /// No ABI event matches the log's signature topic.
    #[error("no ABI event matches log selector {selector:?}")]
    UnknownEventSelector {
        /// The log's first topic, if it had one.
        selector: Option<B256>,
    },

    /// The log does not carry the signature topic of the entry it was
    /// decoded against.
    #[error("log does not match event `{event}`: expected selector {expected}, got {got:?}")]
    SignatureMismatch {
        /// Name of the entry the caller supplied.
        event: String,
        /// The entry's signature hash.
        expected: B256,
        /// The log's first topic, if any.
        got: Option<B256>,
    },

    /// Deployment requested on a handle that carries no creation bytecode.
    #[error("contract handle has no creation bytecode")]
    MissingBytecode,

    /// Call or send requested before the handle was bound to an address.
    #[error("contract handle is not bound to an address")]
    Unbound,

    /// Second bind with a different address; the bound address is
    /// write-once for the lifetime of a handle.
    #[error("contract handle already bound to {bound}, refusing rebind to {requested}")]
    AlreadyBound {
        /// The address the handle is bound to.
        bound: Address,
        /// The address the caller tried to bind instead.
        requested: Address,
    },

    /// Malformed compiler artifact.
    #[error("invalid contract artifact: {0}")]
    Artifact(#[from] serde_json::Error),

    /// Failure from the injected ledger during a read-only call round trip.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
