//! Transaction identifiers, receipts and raw logs.

use alloy_primitives::{Address, B256, Bytes, LogData, U256};
use serde::{Deserialize, Serialize};

/// Identifier of a submitted transaction.
///
/// Fixed-length and opaque; assigned at submission time independently of
/// sender or sequence number, so it names the same transaction across chain
/// reorganizations.
pub type TxId = B256;

/// Finalized execution record of one transaction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Whether execution reverted. Inclusion and success are orthogonal:
    /// a reverted receipt is still a final, queryable outcome.
    pub reverted: bool,
    /// Total gas consumed by the transaction.
    #[serde(default)]
    pub gas_used: u64,
    /// Per-clause outputs; `outputs[i]` corresponds to clause `i` of the
    /// submitted transaction, and `outputs.len()` equals the clause count.
    pub outputs: Vec<Output>,
}

impl Receipt {
    /// Output of clause `i`, if the transaction had that many clauses.
    pub fn output(&self, i: usize) -> Option<&Output> {
        self.outputs.get(i)
    }
}

/// Outcome of a single clause.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    /// Address of the contract created by this clause; set only for
    /// deployment clauses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_address: Option<Address>,
    /// Logs emitted by this clause, in emission order.
    #[serde(default)]
    pub events: Vec<Event>,
    /// Base-token movements performed by this clause, in order.
    #[serde(default)]
    pub transfers: Vec<Transfer>,
}

/// A raw, undecoded log entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Contract that emitted the log.
    pub address: Address,
    /// Topic segments; `topics[0]` is the event signature hash for
    /// non-anonymous events.
    pub topics: Vec<B256>,
    /// Non-indexed data segment.
    pub data: Bytes,
}

impl Event {
    /// Signature hash of the event, when present.
    pub fn selector(&self) -> Option<B256> {
        self.topics.first().copied()
    }

    /// View of this log as an ABI-decodable [`LogData`].
    pub fn log_data(&self) -> LogData {
        LogData::new_unchecked(self.topics.clone(), self.data.clone())
    }
}

/// A base-token transfer recorded in a clause output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    /// Paying account.
    pub sender: Address,
    /// Receiving account.
    pub recipient: Address,
    /// Amount moved.
    pub amount: U256,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receipt_wire_round_trip() {
        let json = r#"{
            "reverted": false,
            "gasUsed": 53000,
            "outputs": [
                {
                    "contractAddress": "0x5fe85a1bf86d091269fa402e679e082beea0e2e1",
                    "events": [
                        {
                            "address": "0x5fe85a1bf86d091269fa402e679e082beea0e2e1",
                            "topics": [
                                "0x0000000000000000000000000000000000000000000000000000000000000001"
                            ],
                            "data": "0x02"
                        }
                    ],
                    "transfers": []
                },
                { "events": [], "transfers": [] }
            ]
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert!(!receipt.reverted);
        assert_eq!(receipt.gas_used, 53000);
        assert_eq!(receipt.outputs.len(), 2);
        assert!(receipt.outputs[0].contract_address.is_some());
        assert!(receipt.outputs[1].contract_address.is_none());
        assert_eq!(receipt.outputs[0].events[0].topics.len(), 1);

        let back: Receipt = serde_json::from_str(&serde_json::to_string(&receipt).unwrap()).unwrap();
        assert_eq!(back, receipt);
    }

    #[test]
    fn event_selector_is_first_topic() {
        let topic = B256::with_last_byte(9);
        let event =
            Event { address: Address::ZERO, topics: vec![topic], data: Bytes::new() };
        assert_eq!(event.selector(), Some(topic));
        assert_eq!(event.log_data().topics(), &[topic]);

        let bare = Event { address: Address::ZERO, topics: vec![], data: Bytes::new() };
        assert_eq!(bare.selector(), None);
    }
}
