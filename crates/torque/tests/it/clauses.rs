//! Multi-clause transactions: per-clause outputs, positional event
//! decoding, and failures that must never reach the network.

use std::time::Duration;
use torque::prelude::*;
use torque_test_utils::{
    MockLedger, ReceiptBuilder, counter, encode_event, encode_return, event_output, uint,
};

fn bound_counter(address: Address) -> Contract {
    let contract = counter();
    contract.at(address).expect("fresh handle binds");
    contract
}

#[tokio::test]
async fn outputs_correspond_to_clauses_by_position() -> eyre::Result<()> {
    torque_test_utils::init_tracing();
    let ledger = MockLedger::new();
    let address = Address::repeat_byte(0x5e);
    let contract = bound_counter(address);

    let tx = TransactionRequest::new()
        .with_clause(contract.send_clause("set", U256::ZERO, &[uint(200)])?)
        .with_clause(contract.send_clause("set", U256::ZERO, &[uint(300)])?);
    let tx_id = ledger.submit(&tx).await?;

    let entry = contract.index().event("SetA")?.clone();
    ledger.script_receipt(
        tx_id,
        ReceiptBuilder::new()
            .output(event_output(vec![encode_event(&entry, address, &[uint(200)])]))
            .output(event_output(vec![encode_event(&entry, address, &[uint(300)])]))
            .build(),
    );

    let receipt =
        OutcomePoller::new(2, Duration::from_millis(5)).await_outcome(&ledger, tx_id).await?;
    assert_eq!(receipt.outputs.len(), tx.len());

    for (i, expected) in [200u64, 300].into_iter().enumerate() {
        let output = receipt.output(i).expect("one output per clause");
        let decoded = contract.decode_event(&output.events[0])?;
        assert_eq!(decoded.name, "SetA");
        similar_asserts::assert_eq!(
            decoded.params,
            vec![("val".to_string(), uint(expected))]
        );
    }

    // the second write is what a later read observes
    ledger.push_call_result(encode_return(&[uint(300)]));
    assert_eq!(contract.call(&ledger, "a", &[]).await?, vec![uint(300)]);
    Ok(())
}

#[tokio::test]
async fn unknown_function_fails_with_no_network_interaction() {
    let ledger = MockLedger::new();
    let contract = bound_counter(Address::repeat_byte(3));

    let err = contract.send_clause("nonexistent", U256::ZERO, &[uint(1)]).unwrap_err();
    assert!(matches!(err, ContractError::UnknownFunction { .. }));
    assert_eq!(ledger.interactions(), 0);
}

#[tokio::test]
async fn reverted_transactions_come_back_as_data() -> eyre::Result<()> {
    let ledger = MockLedger::new();
    let contract = bound_counter(Address::repeat_byte(4));

    let tx = TransactionRequest::single(contract.send_clause(
        "set",
        U256::ZERO,
        &[uint(7)],
    )?);
    let tx_id = ledger.submit(&tx).await?;
    ledger.script_receipt(tx_id, ReceiptBuilder::new().reverted().output(Output::default()).build());

    let receipt =
        OutcomePoller::new(1, Duration::from_millis(5)).await_outcome(&ledger, tx_id).await?;
    assert!(receipt.reverted);
    assert_eq!(receipt.outputs.len(), 1);
    Ok(())
}

#[tokio::test]
async fn transfers_and_calls_mix_in_one_transaction() -> eyre::Result<()> {
    let ledger = MockLedger::new();
    let address = Address::repeat_byte(0x5e);
    let contract = bound_counter(address);
    let friend = Address::repeat_byte(0x99);

    let tx = TransactionRequest::new()
        .with_clause(Clause::transfer(friend, U256::from(1_000)))
        .with_clause(contract.send_clause("set", U256::ZERO, &[uint(1)])?);
    let tx_id = ledger.submit(&tx).await?;

    let submitted = ledger.submitted();
    assert_eq!(submitted[0].clauses[0].to, Some(friend));
    assert!(submitted[0].clauses[0].data.is_empty());
    assert_eq!(submitted[0].clauses[1].to, Some(address));

    ledger.script_receipt(
        tx_id,
        ReceiptBuilder::new().output(Output::default()).output(Output::default()).build(),
    );
    let receipt =
        OutcomePoller::new(1, Duration::from_millis(5)).await_outcome(&ledger, tx_id).await?;
    assert_eq!(receipt.outputs.len(), 2);
    Ok(())
}
