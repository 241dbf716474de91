//! Torque is a contract-interaction test harness for multi-clause chains.
//!
//! Test code builds clauses through a [`Contract`] handle, groups them into
//! a [`TransactionRequest`], hands the request to whatever implements
//! [`Ledger`], resolves the outcome with the [`OutcomePoller`], and decodes
//! each clause's logs back into named values — positionally: output `i` of
//! a receipt is clause `i` of the submitted transaction.
//!
//! The pieces live in their own crates and are re-exported here; pull in
//! [`prelude`] for the usual working set.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub use torque_contract as contract;
pub use torque_primitives as primitives;
pub use torque_provider as provider;

pub use torque_contract::{
    AbiIndex, Contract, ContractArtifact, ContractError, DecodedEvent, codec, events,
};
pub use torque_primitives::{
    Clause, Event, Output, Receipt, TransactionRequest, Transfer, TxId,
};
pub use torque_provider::{
    BLOCK_INTERVAL, DEFAULT_POLL_ATTEMPTS, Ledger, LedgerError, OutcomePoller, PollError,
    PollerConfig,
};

/// The types most tests touch, including the alloy value and primitive
/// types harness APIs speak in.
pub mod prelude {
    pub use super::{
        Clause, Contract, ContractError, DecodedEvent, Event, Ledger, LedgerError,
        OutcomePoller, Output, PollError, PollerConfig, Receipt, TransactionRequest, Transfer,
        TxId,
    };
    pub use alloy_dyn_abi::DynSolValue;
    pub use alloy_primitives::{Address, B256, Bytes, U256};
}
