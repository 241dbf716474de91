//! Contract fixtures, receipt builders and raw-log synthesis.

use alloy_dyn_abi::DynSolValue;
use alloy_json_abi::Event as AbiEvent;
use alloy_primitives::{Address, B256, Bytes, U256, keccak256};
use torque_contract::Contract;
use torque_primitives::{Event, Output, Receipt};

/// Artifact for the counter contract the integration suite drives:
/// a constructor argument lands in `a`, `set` overwrites it and emits
/// `SetA(val)`.
pub const COUNTER_ARTIFACT: &str = r#"{
    "abi": [
        {"type":"constructor","inputs":[{"name":"a_","type":"uint256"}],"stateMutability":"nonpayable"},
        {"type":"function","name":"a","inputs":[],"outputs":[{"name":"","type":"uint256"}],"stateMutability":"view"},
        {"type":"function","name":"set","inputs":[{"name":"val","type":"uint256"}],"outputs":[],"stateMutability":"nonpayable"},
        {"type":"event","name":"SetA","inputs":[{"name":"val","type":"uint256","indexed":false}],"anonymous":false}
    ],
    "bytecode": "0x608060405234801561001057600080fd5b5060405161012c38038061012c83398101604081905261002f91610037565b600055610050565b60006020828403121561004957600080fd5b5051919050565b60cd8061005f6000396000f3"
}"#;

/// Handle over [`COUNTER_ARTIFACT`].
pub fn counter() -> Contract {
    Contract::from_artifact(COUNTER_ARTIFACT).expect("counter artifact parses")
}

/// Shorthand for a `uint256` argument.
pub fn uint(value: u64) -> DynSolValue {
    DynSolValue::Uint(U256::from(value), 256)
}

/// Encodes values as function return data, for scripting
/// [`MockLedger`](crate::MockLedger) call results.
pub fn encode_return(values: &[DynSolValue]) -> Bytes {
    DynSolValue::Tuple(values.to_vec()).abi_encode().into()
}

/// Synthesizes the raw log a contract at `address` would emit for `entry`
/// with the given values (declaration order, indexed and non-indexed
/// together).
///
/// Indexed dynamic values (strings, byte strings) become hashed topics, as
/// on chain; other indexed values must fit a single word.
///
/// # Panics
///
/// Panics if the value count does not match the entry. Fixture code; a
/// mismatch is a broken test, not a runtime condition.
pub fn encode_event(entry: &AbiEvent, address: Address, values: &[DynSolValue]) -> Event {
    assert_eq!(
        values.len(),
        entry.inputs.len(),
        "event `{}` declares {} parameter(s)",
        entry.name,
        entry.inputs.len(),
    );
    let mut topics = Vec::new();
    if !entry.anonymous {
        topics.push(entry.selector());
    }
    let mut body = Vec::new();
    for (input, value) in entry.inputs.iter().zip(values) {
        if input.indexed {
            topics.push(indexed_topic(value));
        } else {
            body.push(value.clone());
        }
    }
    let data = DynSolValue::Tuple(body).abi_encode();
    Event { address, topics, data: data.into() }
}

fn indexed_topic(value: &DynSolValue) -> B256 {
    match value {
        DynSolValue::String(s) => keccak256(s.as_bytes()),
        DynSolValue::Bytes(b) => keccak256(b),
        other => {
            let word = other.abi_encode();
            assert_eq!(word.len(), 32, "indexed value must encode to one word");
            B256::from_slice(&word)
        }
    }
}

/// Builder for receipts whose outputs line up with the submitted clauses.
#[derive(Clone, Debug, Default)]
pub struct ReceiptBuilder {
    reverted: bool,
    gas_used: u64,
    outputs: Vec<Output>,
}

impl ReceiptBuilder {
    /// Empty, successful receipt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the transaction as reverted.
    pub fn reverted(mut self) -> Self {
        self.reverted = true;
        self
    }

    /// Records consumed gas.
    pub fn gas_used(mut self, gas: u64) -> Self {
        self.gas_used = gas;
        self
    }

    /// Appends the output for the next clause.
    pub fn output(mut self, output: Output) -> Self {
        self.outputs.push(output);
        self
    }

    /// Finishes the receipt.
    pub fn build(self) -> Receipt {
        Receipt { reverted: self.reverted, gas_used: self.gas_used, outputs: self.outputs }
    }
}

/// Output of a deployment clause that created `address`.
pub fn deploy_output(address: Address) -> Output {
    Output { contract_address: Some(address), ..Default::default() }
}

/// Output of a call clause that emitted the given logs.
pub fn event_output(events: Vec<Event>) -> Output {
    Output { events, ..Default::default() }
}
