//! A bounded, fixed-interval polling loop over transaction status queries.

#[cfg(test)]
#[path = "polling_test.rs"]
mod polling_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::objects::TransactionHash;
use crate::reader::objects::transaction::{TransactionReceipt, TransactionStatus};
use crate::reader::StarknetReader;
use crate::ClientError;

/// A configuration for the transaction status polling loop.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PollConfig {
    /// The waiting time between two polling attempts, in seconds. The interval is fixed per
    /// poll; callers that need backoff or jitter should wrap the poll externally.
    pub poll_interval_seconds: u64,
    /// The maximum number of polling attempts.
    pub max_attempts: usize,
}

/// The outcome of a poll that reached the target status.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PollReport {
    /// The number of attempts used, counted from 1. Never exceeds the configured maximum.
    pub attempts: usize,
    /// The receipt observed on the last attempt.
    pub receipt: TransactionReceipt,
}

/// Errors that may be returned from the polling loop.
#[derive(thiserror::Error, Debug)]
pub enum PollError {
    /// The polling parameters cannot make progress. Returned before any network activity.
    #[error(
        "Polling requires an interval and an attempt budget of at least 1; got an interval \
         of {poll_interval_seconds}s and {max_attempts} attempts."
    )]
    InvalidConfig { poll_interval_seconds: u64, max_attempts: usize },
    /// The node terminally rejected the transaction. Carries the rejecting receipt.
    #[error("Transaction {} was rejected on attempt {attempts}.", .receipt.transaction_hash)]
    Rejected { attempts: usize, receipt: Box<TransactionReceipt> },
    /// The attempt budget was exhausted before the transaction reached the target status.
    /// Carries the last receipt seen, if any attempt got one.
    #[error(
        "Transaction {transaction_hash} did not reach {target:?} within {attempts} attempts."
    )]
    Exhausted {
        transaction_hash: TransactionHash,
        target: TransactionStatus,
        attempts: usize,
        last_receipt: Option<Box<TransactionReceipt>>,
    },
    /// The status query of the final attempt failed.
    #[error(transparent)]
    ClientError(#[from] ClientError),
}

/// Repeatedly queries the status of the transaction with hash `transaction_hash` until it
/// reaches `target`, the node rejects it, or the attempt budget is exhausted.
///
/// Each attempt issues a single status query; a failed query consumes its attempt without an
/// inner retry and is only surfaced if it happens on the final attempt. The returned future
/// is cancel safe: dropping it (through `select!` or [`tokio::time::timeout`]) aborts
/// promptly, both during the query and during the inter-attempt sleep.
pub async fn poll_transaction<R: StarknetReader + Sync>(
    reader: &R,
    transaction_hash: &TransactionHash,
    target: TransactionStatus,
    config: &PollConfig,
) -> Result<PollReport, PollError> {
    if config.max_attempts == 0 || config.poll_interval_seconds == 0 {
        return Err(PollError::InvalidConfig {
            poll_interval_seconds: config.poll_interval_seconds,
            max_attempts: config.max_attempts,
        });
    }

    let interval = Duration::from_secs(config.poll_interval_seconds);
    let mut last_receipt = None;
    for attempt in 1..=config.max_attempts {
        match reader.transaction_receipt(transaction_hash).await {
            Ok(receipt) => {
                if receipt.status == target {
                    return Ok(PollReport { attempts: attempt, receipt });
                }
                if receipt.status.is_rejected() {
                    return Err(PollError::Rejected {
                        attempts: attempt,
                        receipt: Box::new(receipt),
                    });
                }
                debug!(
                    "Transaction {} is {:?}, waiting for {:?} (attempt {}/{}).",
                    transaction_hash, receipt.status, target, attempt, config.max_attempts
                );
                last_receipt = Some(Box::new(receipt));
            }
            Err(err) if attempt < config.max_attempts => {
                // A transient query failure costs one attempt, not an infinite retry.
                debug!(
                    "Status query for transaction {} failed: {:?} (attempt {}/{}).",
                    transaction_hash, err, attempt, config.max_attempts
                );
            }
            Err(err) => return Err(PollError::ClientError(err)),
        }
        if attempt < config.max_attempts {
            tokio::time::sleep(interval).await;
        }
    }

    Err(PollError::Exhausted {
        transaction_hash: transaction_hash.clone(),
        target,
        attempts: config.max_attempts,
        last_receipt,
    })
}
