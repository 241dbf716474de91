//! The contract handle: one logical contract-under-test.

use crate::{AbiIndex, ContractError, DecodedEvent, codec, events};
use alloy_dyn_abi::DynSolValue;
use alloy_json_abi::JsonAbi;
use alloy_primitives::{Address, Bytes, U256};
use serde::Deserialize;
use std::sync::{Arc, OnceLock};
use torque_primitives::{Clause, Event};
use torque_provider::Ledger;

/// Compiler output for one contract: ABI plus optional creation bytecode.
///
/// Produced by the external toolchain; consumed here as an opaque artifact.
#[derive(Clone, Debug, Deserialize)]
pub struct ContractArtifact {
    /// The ABI descriptor.
    pub abi: JsonAbi,
    /// Creation bytecode, when the artifact was compiled for deployment.
    #[serde(default)]
    pub bytecode: Option<Bytes>,
}

/// Handle for driving one contract from test code.
///
/// Binds an ABI descriptor, optional creation bytecode and an optional
/// deployed address. The handle builds clauses ([`Self::deploy_clause`],
/// [`Self::send_clause`]) for the caller to submit, and performs read-only
/// [`Self::call`] round trips against an injected [`Ledger`].
///
/// The bound address is write-once: it is set at most once, either up front
/// ([`Self::deployed`]) or after a deployment's outcome supplies it
/// ([`Self::at`]). Binding a different address afterwards is refused;
/// a re-bound contract is a new handle, not a mutation of this one.
#[derive(Clone, Debug)]
pub struct Contract {
    abi: Arc<JsonAbi>,
    index: AbiIndex,
    bytecode: Option<Bytes>,
    address: OnceLock<Address>,
}

impl Contract {
    /// Handle over an ABI descriptor alone.
    pub fn new(abi: JsonAbi) -> Self {
        let index = AbiIndex::new(&abi);
        Self { abi: Arc::new(abi), index, bytecode: None, address: OnceLock::new() }
    }

    /// Attaches creation bytecode, enabling [`Self::deploy_clause`].
    pub fn with_bytecode(mut self, bytecode: Bytes) -> Self {
        self.bytecode = Some(bytecode);
        self
    }

    /// Handle for a contract that already exists at `address`.
    pub fn deployed(abi: JsonAbi, address: Address) -> Self {
        let index = AbiIndex::new(&abi);
        Self { abi: Arc::new(abi), index, bytecode: None, address: OnceLock::from(address) }
    }

    /// Handle built from a compiler artifact (JSON with `abi` and,
    /// optionally, `bytecode`).
    pub fn from_artifact(json: &str) -> Result<Self, ContractError> {
        let ContractArtifact { abi, bytecode } = serde_json::from_str(json)?;
        let contract = Self::new(abi);
        Ok(match bytecode {
            Some(code) => contract.with_bytecode(code),
            None => contract,
        })
    }

    /// The ABI descriptor.
    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    /// The resolution tables over the ABI.
    pub fn index(&self) -> &AbiIndex {
        &self.index
    }

    /// Creation bytecode, if attached.
    pub fn bytecode(&self) -> Option<&Bytes> {
        self.bytecode.as_ref()
    }

    /// The bound address, if any.
    pub fn address(&self) -> Option<Address> {
        self.address.get().copied()
    }

    /// Binds the handle to its deployed address.
    ///
    /// Idempotent for the same address; binding a different one fails with
    /// [`ContractError::AlreadyBound`] and leaves the handle untouched.
    pub fn at(&self, address: Address) -> Result<(), ContractError> {
        let bound = *self.address.get_or_init(|| address);
        if bound == address {
            trace!(%address, "contract bound");
            Ok(())
        } else {
            Err(ContractError::AlreadyBound { bound, requested: address })
        }
    }

    /// Builds a deployment clause: creation bytecode plus encoded
    /// constructor arguments, targeting no account.
    ///
    /// Requires bytecode on the handle; does not mutate handle state — the
    /// address is bound only once the deployment's receipt reports it.
    pub fn deploy_clause(
        &self,
        value: U256,
        args: &[DynSolValue],
    ) -> Result<Clause, ContractError> {
        let bytecode = self.bytecode.as_ref().ok_or(ContractError::MissingBytecode)?;
        let data = codec::encode_deploy_data(self.abi.constructor.as_ref(), bytecode, args)?;
        trace!(args = args.len(), data = data.len(), "deploy clause built");
        Ok(Clause::deploy(value, data))
    }

    /// Builds a call clause for a state-mutating function.
    ///
    /// Requires a bound address; the function is resolved by name and exact
    /// arity before anything touches the network.
    pub fn send_clause(
        &self,
        name: &str,
        value: U256,
        args: &[DynSolValue],
    ) -> Result<Clause, ContractError> {
        let address = self.require_address()?;
        let func = self.index.function(name, args.len())?;
        let data = codec::encode_function_call(func, args)?;
        trace!(%address, function = %func.signature(), "send clause built");
        Ok(Clause::call(address, value, data))
    }

    /// Read-only round trip: encodes the call, simulates it on current
    /// chain state through the ledger, and decodes the return value.
    ///
    /// No transaction is created. This is a suspension point — the one
    /// handle operation that talks to the network.
    pub async fn call<L: Ledger + ?Sized>(
        &self,
        ledger: &L,
        name: &str,
        args: &[DynSolValue],
    ) -> Result<Vec<DynSolValue>, ContractError> {
        let address = self.require_address()?;
        let func = self.index.function(name, args.len())?;
        let data = codec::encode_function_call(func, args)?;
        trace!(%address, function = %func.signature(), "read-only call");
        let ret = ledger.call(address, &data).await?;
        codec::decode_output(func, &ret)
    }

    /// Decodes a raw log emitted by this contract, resolving the event
    /// entry by the log's signature topic.
    pub fn decode_event(&self, raw: &Event) -> Result<DecodedEvent, ContractError> {
        let entry = raw
            .selector()
            .and_then(|selector| self.index.event_by_selector(selector))
            .ok_or(ContractError::UnknownEventSelector { selector: raw.selector() })?;
        events::decode_event(entry, raw)
    }

    fn require_address(&self) -> Result<Address, ContractError> {
        self.address().ok_or(ContractError::Unbound)
    }
}
