//! ABI codec adapter: pure transforms between typed values and encoded
//! bytes. No state, no I/O; identical inputs always yield byte-identical
//! output.

use crate::ContractError;
use alloy_dyn_abi::{DynSolType, DynSolValue, FunctionExt, JsonAbiExt};
use alloy_json_abi::{Constructor, Event, Function};
use alloy_primitives::Bytes;

/// Encodes a function call: 4-byte selector followed by the ABI-encoded
/// arguments.
///
/// Arity is checked up front; a type mismatch surfaces from the encoder
/// itself. Values wider than native integers travel as `U256`/`I256`, so
/// nothing is truncated.
pub fn encode_function_call(
    func: &Function,
    args: &[DynSolValue],
) -> Result<Bytes, ContractError> {
    check_arity(&func.name, func.inputs.len(), args.len())?;
    Ok(func.abi_encode_input(args)?.into())
}

/// Encodes a deployment payload: creation bytecode with the ABI-encoded
/// constructor arguments appended.
///
/// An ABI without a constructor entry declares the implicit no-argument
/// constructor; passing arguments to it is an arity error.
pub fn encode_deploy_data(
    constructor: Option<&Constructor>,
    bytecode: &[u8],
    args: &[DynSolValue],
) -> Result<Bytes, ContractError> {
    let mut data = bytecode.to_vec();
    match constructor {
        Some(ctor) => {
            check_arity("constructor", ctor.inputs.len(), args.len())?;
            data.extend(ctor.abi_encode_input(args)?);
        }
        None => check_arity("constructor", 0, args.len())?,
    }
    Ok(data.into())
}

/// Decodes a function's return data into its declared output values.
pub fn decode_output(func: &Function, data: &[u8]) -> Result<Vec<DynSolValue>, ContractError> {
    Ok(func.abi_decode_output(data)?)
}

/// Parses a human-readable function signature, e.g.
/// `function set(uint256 val)` or `set(uint256)(bool)`.
pub fn parse_function(sig: &str) -> Result<Function, ContractError> {
    Function::parse(sig).map_err(|e| ContractError::SignatureParse {
        signature: sig.to_string(),
        reason: e.to_string(),
    })
}

/// Parses a human-readable event signature, e.g.
/// `event SetA(uint256 val)`.
pub fn parse_event(sig: &str) -> Result<Event, ContractError> {
    Event::parse(sig).map_err(|e| ContractError::SignatureParse {
        signature: sig.to_string(),
        reason: e.to_string(),
    })
}

/// Coerces a string argument to a value of the given Solidity type, for
/// fixture-building and scaffolding.
pub fn coerce_value(ty: &str, arg: &str) -> Result<DynSolValue, ContractError> {
    let ty = DynSolType::parse(ty)?;
    Ok(ty.coerce_str(arg)?)
}

fn check_arity(name: &str, expected: usize, got: usize) -> Result<(), ContractError> {
    if expected == got {
        Ok(())
    } else {
        Err(ContractError::Arity { name: name.to_string(), expected, got })
    }
}
