//! # torque-provider
//!
//! The harness's boundary to the chain: the [`Ledger`] capability trait and
//! the [`OutcomePoller`] that resolves submitted transaction ids into
//! finalized receipts.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[macro_use]
extern crate tracing;

mod error;
pub use error::{LedgerError, PollError};

mod ledger;
pub use ledger::Ledger;

mod poller;
pub use poller::{BLOCK_INTERVAL, DEFAULT_POLL_ATTEMPTS, OutcomePoller, PollerConfig};
