//! The objects the node returns for transaction status and receipt queries.

#[cfg(test)]
#[path = "transaction_test.rs"]
mod transaction_test;

use serde::{Deserialize, Serialize};

use crate::objects::{BlockHash, TransactionHash};

/// The status of a transaction, as reported by the node.
///
/// The declaration order matches the progress of a transaction through the ledger, so the
/// derived ordering can be used for progress comparisons: a transaction starts as
/// [`NotReceived`], advances through [`Received`] and [`Pending`] and is finalized as
/// [`AcceptedOnL2`] and then [`AcceptedOnL1`]. [`Rejected`] is terminal and outside the
/// progress order; check it with [`is_rejected`] before comparing.
///
/// [`NotReceived`]: TransactionStatus::NotReceived
/// [`Received`]: TransactionStatus::Received
/// [`Pending`]: TransactionStatus::Pending
/// [`AcceptedOnL2`]: TransactionStatus::AcceptedOnL2
/// [`AcceptedOnL1`]: TransactionStatus::AcceptedOnL1
/// [`Rejected`]: TransactionStatus::Rejected
/// [`is_rejected`]: TransactionStatus::is_rejected
#[derive(
    Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Deserialize, Serialize, PartialOrd, Ord,
)]
pub enum TransactionStatus {
    /// The node does not know the transaction, or does not know it yet.
    #[serde(rename = "NOT_RECEIVED")]
    #[default]
    NotReceived,
    /// The transaction was received by the node.
    #[serde(rename = "RECEIVED")]
    Received,
    /// The transaction passed the validation and entered the pending block.
    #[serde(rename = "PENDING")]
    Pending,
    /// The transaction passed the validation and entered an actual created block.
    #[serde(rename = "ACCEPTED_ON_L2")]
    AcceptedOnL2,
    /// The transaction was accepted on-chain.
    #[serde(rename = "ACCEPTED_ON_L1")]
    AcceptedOnL1,
    /// The transaction failed validation and was not applied.
    #[serde(rename = "REJECTED")]
    Rejected,
}

impl TransactionStatus {
    /// Whether the node terminally rejected the transaction. A rejected transaction makes no
    /// further progress.
    pub fn is_rejected(&self) -> bool {
        matches!(self, TransactionStatus::Rejected)
    }
}

/// The reason the node rejected a transaction.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Eq, PartialEq)]
pub struct TransactionFailureReason {
    pub code: String,
    pub error_message: String,
}

/// Node-reported metadata about a transaction's execution outcome.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Eq, PartialEq)]
pub struct TransactionReceipt {
    pub transaction_hash: TransactionHash,
    #[serde(default)]
    pub status: TransactionStatus,
    /// Set once the transaction entered a created block.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub block_hash: Option<BlockHash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub block_number: Option<u64>,
    /// Set for rejected transactions.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub transaction_failure_reason: Option<TransactionFailureReason>,
}
