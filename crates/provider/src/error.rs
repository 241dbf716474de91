//! Ledger and polling errors.

use torque_primitives::TxId;

/// Error surfaced by a [`Ledger`](crate::Ledger) implementation.
///
/// Note that an included-but-reverted transaction is not an error: it comes
/// back as a [`Receipt`](torque_primitives::Receipt) with `reverted` set.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// The node could not be reached or answered malformed data.
    #[error("transport error: {0}")]
    Transport(String),

    /// The node refused the request (e.g. an empty or unsignable
    /// transaction).
    #[error("rejected by ledger: {0}")]
    Rejected(String),
}

/// Error returned by [`OutcomePoller::await_outcome`](crate::OutcomePoller::await_outcome).
#[derive(Debug, thiserror::Error)]
pub enum PollError {
    /// A polling attempt itself failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// The retry budget ran out with no receipt observed. Recoverable by
    /// polling again: the transaction may still be included later.
    #[error("no receipt for transaction {tx_id} after {attempts} attempts")]
    Timeout {
        /// The transaction that was being awaited.
        tx_id: TxId,
        /// How many queries were made before giving up.
        attempts: u32,
    },
}

impl PollError {
    /// Whether this is the distinguished timeout condition.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
