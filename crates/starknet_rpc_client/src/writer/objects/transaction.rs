//! The objects the node accepts inside transaction-submission calls.
//!
//! Each object has a serialization format that the node accepts through its JSON-RPC
//! `starknet_add*Transaction` methods.

#[cfg(test)]
#[path = "transaction_test.rs"]
mod transaction_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::compression_utils::{encode_program, Program, ProgramEncodingError};
use crate::objects::EntryPointSelector;

/// The type of a contract entry point. This enum serializes/deserializes into a constant
/// string.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub enum EntryPointType {
    #[serde(rename = "CONSTRUCTOR")]
    Constructor,
    #[serde(rename = "EXTERNAL")]
    #[default]
    External,
    #[serde(rename = "L1_HANDLER")]
    L1Handler,
}

/// An entry point of a contract.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Eq, PartialEq)]
pub struct EntryPoint {
    pub selector: EntryPointSelector,
    pub offset: String,
}

/// A contract definition as the node accepts it in declare and deploy transactions.
#[derive(Debug, Clone, Deserialize, Serialize, Eq, PartialEq)]
pub struct ContractDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub abi: Option<serde_json::Value>,
    pub program: Program,
    pub entry_points_by_type: HashMap<EntryPointType, Vec<EntryPoint>>,
}

impl ContractDefinition {
    /// Returns a copy of this definition whose program is encoded and ready for submission.
    /// `self` is left untouched; an already encoded program is carried over unchanged.
    pub fn encode_program(&self) -> Result<Self, ProgramEncodingError> {
        Ok(ContractDefinition {
            abi: self.abi.clone(),
            program: Program::Encoded(encode_program(&self.program)?),
            entry_points_by_type: self.entry_points_by_type.clone(),
        })
    }
}
