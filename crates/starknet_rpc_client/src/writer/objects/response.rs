//! The responses the node returns for transaction-submission calls.

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;

use serde::{Deserialize, Serialize};

use crate::objects::{ClassHash, ContractAddress, TransactionHash};

/// The response of adding a declare transaction to the node.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Eq, PartialEq)]
pub struct DeclareResponse {
    pub transaction_hash: TransactionHash,
    pub class_hash: ClassHash,
}

/// The response of adding a deploy transaction to the node.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Eq, PartialEq)]
pub struct DeployResponse {
    pub transaction_hash: TransactionHash,
    pub contract_address: ContractAddress,
}

/// The response of adding an invoke transaction to the node.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Eq, PartialEq)]
pub struct InvokeResponse {
    pub transaction_hash: TransactionHash,
}
