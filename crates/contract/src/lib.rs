//! # torque-contract
//!
//! The contract-facing half of the Torque harness: an ABI codec adapter, a
//! clause-building [`Contract`] handle with write-once address binding, and
//! an event decoder that maps raw logs back to named, typed values.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[macro_use]
extern crate tracing;

mod abi;
pub use abi::AbiIndex;

pub mod codec;

mod contract;
pub use contract::{Contract, ContractArtifact};

mod error;
pub use error::ContractError;

pub mod events;
pub use events::DecodedEvent;
