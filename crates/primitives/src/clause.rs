//! Clauses and transaction requests.

use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

/// One atomic sub-operation of a transaction.
///
/// A clause either calls (or plainly pays) an existing account, or deploys
/// a new contract when `to` is `None`. Clauses are immutable value objects;
/// within a transaction they execute strictly in array order under a single
/// sender.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clause {
    /// Recipient account, or `None` for a contract deployment.
    pub to: Option<Address>,
    /// Amount of the chain's base token transferred by this clause.
    pub value: U256,
    /// Encoded payload: calldata for a call, creation code for a deployment,
    /// empty for a bare transfer.
    pub data: Bytes,
}

impl Clause {
    /// Clause calling `to` with the given calldata.
    pub fn call(to: Address, value: U256, data: Bytes) -> Self {
        Self { to: Some(to), value, data }
    }

    /// Deployment clause carrying creation code.
    pub fn deploy(value: U256, data: Bytes) -> Self {
        Self { to: None, value, data }
    }

    /// Bare value-movement clause with no payload.
    pub fn transfer(to: Address, value: U256) -> Self {
        Self { to: Some(to), value, data: Bytes::new() }
    }

    /// Whether this clause deploys a contract.
    pub fn is_deploy(&self) -> bool {
        self.to.is_none()
    }
}

/// An ordered, non-empty sequence of clauses submitted as one transaction.
///
/// Order is execution order. Sender identity and signing are supplied by
/// the wallet at submission time; they are not part of the request the
/// harness builds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    /// Clauses in execution order. Must be non-empty at submission time.
    pub clauses: Vec<Clause>,
}

impl TransactionRequest {
    /// Empty request; push clauses with [`Self::with_clause`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Request consisting of a single clause.
    pub fn single(clause: Clause) -> Self {
        Self { clauses: vec![clause] }
    }

    /// Appends a clause, preserving order.
    pub fn with_clause(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    /// Number of clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Whether the request carries no clauses yet.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}
