//! Decoding raw logs against ABI event entries.

use crate::ContractError;
use alloy_dyn_abi::{DynSolValue, EventExt};
use alloy_json_abi::Event as AbiEvent;
use torque_primitives::Event;

/// A log decoded against its ABI entry: the event name plus its parameters
/// in declaration order, indexed and non-indexed merged back together.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedEvent {
    /// Name of the ABI entry the log matched.
    pub name: String,
    /// `(parameter name, value)` pairs in declaration order. Parameters the
    /// ABI leaves unnamed appear as `param{i}`.
    pub params: Vec<(String, DynSolValue)>,
}

impl DecodedEvent {
    /// Looks up a parameter value by name.
    pub fn param(&self, name: &str) -> Option<&DynSolValue> {
        self.params.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }
}

/// Decodes `raw` against the given event entry.
///
/// For non-anonymous events the log's first topic must be the entry's
/// signature hash; a pairing that does not hold fails with
/// [`ContractError::SignatureMismatch`] rather than decoding garbage.
pub fn decode_event(entry: &AbiEvent, raw: &Event) -> Result<DecodedEvent, ContractError> {
    if !entry.anonymous && raw.selector() != Some(entry.selector()) {
        return Err(ContractError::SignatureMismatch {
            event: entry.name.clone(),
            expected: entry.selector(),
            got: raw.selector(),
        });
    }
    let decoded = entry.decode_log(&raw.log_data())?;
    trace!(event = %entry.name, params = entry.inputs.len(), "log decoded");
    Ok(DecodedEvent { name: entry.name.clone(), params: reconstruct_params(entry, decoded) })
}

/// Merges decoded indexed and body values back into declaration order,
/// naming unnamed parameters `param{i}`.
fn reconstruct_params(
    entry: &AbiEvent,
    decoded: alloy_dyn_abi::DecodedEvent,
) -> Vec<(String, DynSolValue)> {
    let mut indexed = decoded.indexed.into_iter();
    let mut body = decoded.body.into_iter();
    let mut params = Vec::with_capacity(entry.inputs.len());
    for (i, input) in entry.inputs.iter().enumerate() {
        let value = if input.indexed { indexed.next() } else { body.next() };
        // A successful decode yields exactly as many values as the entry
        // declares; a shorter log would already have failed above.
        let Some(value) = value else { break };
        let name =
            if input.name.is_empty() { format!("param{i}") } else { input.name.clone() };
        params.push((name, value));
    }
    params
}
