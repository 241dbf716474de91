//! The injected ledger-query capability.

use crate::LedgerError;
use alloy_primitives::{Address, Bytes};
use async_trait::async_trait;
use torque_primitives::{Receipt, TransactionRequest, TxId};

/// The three operations the harness needs from a chain.
///
/// Implementations wrap whatever transport exists — a node RPC client, an
/// in-process simulator, a scripted mock — and fold wallet/signing behind
/// [`submit`](Self::submit). Every method is a single remote round trip and
/// a cooperative suspension point; the harness itself never spawns tasks.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Signs and submits the clauses as one transaction, returning its id.
    ///
    /// Once accepted the transaction is irrevocable; only the waiting for
    /// its outcome can be bounded.
    async fn submit(&self, tx: &TransactionRequest) -> Result<TxId, LedgerError>;

    /// Queries the receipt for `id`. `Ok(None)` means "not observable yet",
    /// not failure; the [`OutcomePoller`](crate::OutcomePoller) retries it.
    async fn receipt(&self, id: TxId) -> Result<Option<Receipt>, LedgerError>;

    /// Simulates a read-only call against current chain state and returns
    /// the raw encoded result. No transaction is created.
    async fn call(&self, to: Address, data: &[u8]) -> Result<Bytes, LedgerError>;
}
