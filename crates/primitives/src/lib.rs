//! # torque-primitives
//!
//! Leaf data model for the Torque harness: clauses, transaction requests
//! and receipts, with their wire (JSON) representations.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod clause;
pub use clause::{Clause, TransactionRequest};

mod receipt;
pub use receipt::{Event, Output, Receipt, Transfer, TxId};
