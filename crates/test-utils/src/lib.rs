//! # torque-test-utils
//!
//! Test infrastructure for the Torque harness: a deterministic, scripted
//! [`MockLedger`], contract fixtures, and raw-log synthesis. Nothing here
//! executes contracts — receipts and call results are scripted by the test,
//! so suites exercise the harness, not contract semantics.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod ledger;
pub use ledger::MockLedger;

mod fixtures;
pub use fixtures::{
    COUNTER_ARTIFACT, ReceiptBuilder, counter, deploy_output, encode_event, encode_return,
    event_output, uint,
};

/// Initializes tracing for tests, honoring `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
