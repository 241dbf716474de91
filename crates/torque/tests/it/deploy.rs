//! Deployment: build the clause, submit, bind the created address, read
//! state back.

use std::time::Duration;
use torque::prelude::*;
use torque_test_utils::{MockLedger, ReceiptBuilder, counter, deploy_output, encode_return, uint};

fn poller() -> OutcomePoller {
    OutcomePoller::new(3, Duration::from_millis(5))
}

#[tokio::test]
async fn deploy_bind_and_read_back() -> eyre::Result<()> {
    torque_test_utils::init_tracing();
    let ledger = MockLedger::new();
    let contract = counter();

    let deploy = contract.deploy_clause(U256::ZERO, &[uint(100)])?;
    assert!(deploy.is_deploy());
    // constructor argument rides at the tail of the creation code
    assert!(deploy.data.ends_with(&U256::from(100).to_be_bytes::<32>()));

    let tx_id = ledger.submit(&TransactionRequest::single(deploy)).await?;
    let created = Address::repeat_byte(0xc0);
    ledger.script_receipt(
        tx_id,
        ReceiptBuilder::new().gas_used(53_000).output(deploy_output(created)).build(),
    );

    let receipt = poller().await_outcome(&ledger, tx_id).await?;
    assert!(!receipt.reverted);
    assert_eq!(receipt.outputs.len(), 1);

    let address = receipt.outputs[0].contract_address.expect("deployment output");
    contract.at(address)?;
    assert_eq!(contract.address(), Some(created));

    ledger.push_call_result(encode_return(&[uint(100)]));
    let got = contract.call(&ledger, "a", &[]).await?;
    assert_eq!(got, vec![uint(100)]);

    // the round trip hit the bound address, selector first
    let calls = ledger.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, created);
    let func = contract.index().function("a", 0)?;
    assert_eq!(&calls[0].1[..4], func.selector().as_slice());
    Ok(())
}

#[tokio::test]
async fn rebinding_a_bound_handle_is_refused() -> eyre::Result<()> {
    let contract = counter();
    let first = Address::repeat_byte(1);
    let second = Address::repeat_byte(2);

    contract.at(first)?;
    contract.at(first)?;
    let err = contract.at(second).unwrap_err();
    assert!(matches!(err, ContractError::AlreadyBound { .. }));
    assert_eq!(contract.address(), Some(first));
    Ok(())
}

#[tokio::test]
async fn deploying_without_bytecode_never_reaches_the_ledger() {
    let ledger = MockLedger::new();
    let contract = Contract::new(counter().abi().clone());

    let err = contract.deploy_clause(U256::ZERO, &[uint(1)]).unwrap_err();
    assert!(matches!(err, ContractError::MissingBytecode));
    assert_eq!(ledger.interactions(), 0);
}
