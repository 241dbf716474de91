//! Outcome polling against a ledger that answers "not yet".

use std::time::Duration;
use torque::prelude::*;
use torque_test_utils::{MockLedger, ReceiptBuilder, counter, uint};

fn poller(attempts: u32) -> OutcomePoller {
    OutcomePoller::new(attempts, Duration::from_millis(5))
}

async fn submit_set(ledger: &MockLedger) -> eyre::Result<TxId> {
    let contract = counter();
    contract.at(Address::repeat_byte(8))?;
    let tx = TransactionRequest::single(contract.send_clause("set", U256::ZERO, &[uint(9)])?);
    Ok(ledger.submit(&tx).await?)
}

#[tokio::test]
async fn receipt_appearing_late_is_still_found() -> eyre::Result<()> {
    let ledger = MockLedger::new();
    let tx_id = submit_set(&ledger).await?;
    ledger.script_receipt_after(tx_id, 2, ReceiptBuilder::new().output(Output::default()).build());

    let receipt = poller(5).await_outcome(&ledger, tx_id).await?;
    assert!(!receipt.reverted);
    assert_eq!(ledger.receipt_queries(), 3);
    Ok(())
}

#[tokio::test]
async fn exhausted_budget_is_a_typed_timeout_and_retryable() -> eyre::Result<()> {
    let ledger = MockLedger::new();
    let tx_id = submit_set(&ledger).await?;

    let err = poller(4).await_outcome(&ledger, tx_id).await.unwrap_err();
    match err {
        PollError::Timeout { tx_id: id, attempts } => {
            assert_eq!(id, tx_id);
            assert_eq!(attempts, 4);
        }
        other => panic!("expected timeout, got {other}"),
    }
    assert_eq!(ledger.receipt_queries(), 4);

    // the transaction was merely slow, not lost: a later poll succeeds
    ledger.script_receipt(tx_id, ReceiptBuilder::new().output(Output::default()).build());
    let receipt = poller(1).await_outcome(&ledger, tx_id).await?;
    assert_eq!(receipt.outputs.len(), 1);
    Ok(())
}
