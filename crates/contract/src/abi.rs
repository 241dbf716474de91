//! Lookup tables over a contract ABI.
//!
//! Built once when a handle is created; resolving a function or event is a
//! map lookup with explicit not-found and ambiguous branches, never a scan
//! of the raw descriptor.

use crate::ContractError;
use alloy_json_abi::{Event, Function, JsonAbi};
use alloy_primitives::B256;
use std::collections::BTreeMap;

/// Pre-computed resolution tables for one ABI descriptor.
#[derive(Clone, Debug, Default)]
pub struct AbiIndex {
    /// Functions keyed by name, then arity. Overloads with distinct
    /// arities resolve uniquely; same name and arity stays ambiguous.
    functions: BTreeMap<String, BTreeMap<usize, Vec<Function>>>,
    /// Events keyed by name.
    events: BTreeMap<String, Vec<Event>>,
    /// Non-anonymous events keyed by signature hash; anonymous events have
    /// no selector and only decode against an explicit entry.
    events_by_selector: BTreeMap<B256, Event>,
}

impl AbiIndex {
    /// Builds the tables from an ABI descriptor.
    pub fn new(abi: &JsonAbi) -> Self {
        let mut index = Self::default();
        for func in abi.functions() {
            index
                .functions
                .entry(func.name.clone())
                .or_default()
                .entry(func.inputs.len())
                .or_default()
                .push(func.clone());
        }
        for event in abi.events() {
            if !event.anonymous {
                index.events_by_selector.insert(event.selector(), event.clone());
            }
            index.events.entry(event.name.clone()).or_default().push(event.clone());
        }
        index
    }

    /// Resolves a function by name and exact arity.
    pub fn function(&self, name: &str, arity: usize) -> Result<&Function, ContractError> {
        let candidates = self
            .functions
            .get(name)
            .and_then(|by_arity| by_arity.get(&arity))
            .map(Vec::as_slice)
            .unwrap_or_default();
        match candidates {
            [] => Err(ContractError::UnknownFunction { name: name.to_string(), arity }),
            [func] => Ok(func),
            _ => Err(ContractError::AmbiguousFunction {
                name: name.to_string(),
                arity,
                count: candidates.len(),
            }),
        }
    }

    /// Resolves an event by name.
    pub fn event(&self, name: &str) -> Result<&Event, ContractError> {
        match self.events.get(name).map(Vec::as_slice).unwrap_or_default() {
            [] => Err(ContractError::UnknownEvent { name: name.to_string() }),
            [event] => Ok(event),
            candidates => Err(ContractError::AmbiguousEvent {
                name: name.to_string(),
                count: candidates.len(),
            }),
        }
    }

    /// Resolves a non-anonymous event by its signature hash.
    pub fn event_by_selector(&self, selector: B256) -> Option<&Event> {
        self.events_by_selector.get(&selector)
    }
}
