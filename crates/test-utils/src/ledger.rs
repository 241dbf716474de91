//! A scripted, recording, in-process ledger.

use alloy_primitives::{Address, Bytes, keccak256};
use async_trait::async_trait;
use std::{
    collections::{HashMap, VecDeque},
    sync::{Mutex, MutexGuard},
};
use torque_primitives::{Receipt, TransactionRequest, TxId};
use torque_provider::{Ledger, LedgerError};

/// In-process [`Ledger`] for tests.
///
/// Receipts and call results are scripted up front; every interaction is
/// recorded for later assertion. Transaction ids are deterministic —
/// `keccak256` of the submission counter — so a test can script the receipt
/// for a transaction before submitting it (see [`Self::next_tx_id`]).
///
/// A receipt can be scripted to stay absent for the first `n` queries,
/// which is how tests drive the outcome poller's retry and timeout paths.
#[derive(Debug, Default)]
pub struct MockLedger {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    submitted: Vec<TransactionRequest>,
    receipts: HashMap<TxId, ScriptedReceipt>,
    receipt_queries: u32,
    calls: Vec<(Address, Bytes)>,
    call_results: VecDeque<Bytes>,
}

#[derive(Debug)]
struct ScriptedReceipt {
    absent_for: u32,
    receipt: Receipt,
}

impl MockLedger {
    /// Fresh ledger with nothing scripted.
    pub fn new() -> Self {
        Self::default()
    }

    /// The id [`Ledger::submit`] assigns to submission number `index`
    /// (zero-based).
    pub fn tx_id(index: u64) -> TxId {
        keccak256(index.to_be_bytes())
    }

    /// The id the next submission will be assigned.
    pub fn next_tx_id(&self) -> TxId {
        Self::tx_id(self.lock().submitted.len() as u64)
    }

    /// Scripts the receipt for `id`, observable from the first query on.
    pub fn script_receipt(&self, id: TxId, receipt: Receipt) {
        self.script_receipt_after(id, 0, receipt);
    }

    /// Scripts the receipt for `id`, absent for the first `absent_for`
    /// queries and observable afterwards.
    pub fn script_receipt_after(&self, id: TxId, absent_for: u32, receipt: Receipt) {
        self.lock().receipts.insert(id, ScriptedReceipt { absent_for, receipt });
    }

    /// Queues the result for the next read-only call.
    pub fn push_call_result(&self, data: Bytes) {
        self.lock().call_results.push_back(data);
    }

    /// Every transaction request submitted so far, in order.
    pub fn submitted(&self) -> Vec<TransactionRequest> {
        self.lock().submitted.clone()
    }

    /// Every read-only call made so far, in order.
    pub fn calls(&self) -> Vec<(Address, Bytes)> {
        self.lock().calls.clone()
    }

    /// How many receipt queries have been made.
    pub fn receipt_queries(&self) -> u32 {
        self.lock().receipt_queries
    }

    /// Total remote interactions of any kind. Useful for asserting that an
    /// operation failed before touching the network.
    pub fn interactions(&self) -> usize {
        let inner = self.lock();
        inner.submitted.len() + inner.receipt_queries as usize + inner.calls.len()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("mock ledger lock poisoned")
    }
}

#[async_trait]
impl Ledger for MockLedger {
    async fn submit(&self, tx: &TransactionRequest) -> Result<TxId, LedgerError> {
        if tx.is_empty() {
            return Err(LedgerError::Rejected("transaction has no clauses".to_string()));
        }
        let mut inner = self.lock();
        let id = Self::tx_id(inner.submitted.len() as u64);
        inner.submitted.push(tx.clone());
        Ok(id)
    }

    async fn receipt(&self, id: TxId) -> Result<Option<Receipt>, LedgerError> {
        let mut inner = self.lock();
        inner.receipt_queries += 1;
        match inner.receipts.get_mut(&id) {
            Some(scripted) if scripted.absent_for > 0 => {
                scripted.absent_for -= 1;
                Ok(None)
            }
            Some(scripted) => Ok(Some(scripted.receipt.clone())),
            None => Ok(None),
        }
    }

    async fn call(&self, to: Address, data: &[u8]) -> Result<Bytes, LedgerError> {
        let mut inner = self.lock();
        inner.calls.push((to, Bytes::copy_from_slice(data)));
        inner
            .call_results
            .pop_front()
            .ok_or_else(|| LedgerError::Transport("no scripted call result left".to_string()))
    }
}
