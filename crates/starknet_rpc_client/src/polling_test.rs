use assert_matches::assert_matches;
use mockall::Sequence;
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use tokio::time::{timeout, Duration};

use crate::objects::TransactionHash;
use crate::reader::objects::transaction::{TransactionReceipt, TransactionStatus};
use crate::reader::MockStarknetReader;
use crate::transport::TransportClientError;
use crate::{poll_transaction, ClientError, PollConfig, PollError};

fn tx_hash() -> TransactionHash {
    "0x40fe2fb1fa4d0e7580cdbce6a2e0d3c65b5f0e3f375cd9a934c3d4bb7df94c9".into()
}

fn receipt_with_status(status: TransactionStatus) -> TransactionReceipt {
    TransactionReceipt { transaction_hash: tx_hash(), status, ..Default::default() }
}

fn config() -> PollConfig {
    PollConfig { poll_interval_seconds: 1, max_attempts: 5 }
}

// Returns a reader that answers one status query per entry of `statuses`, in order, and
// panics on any further query.
fn reader_with_statuses(statuses: Vec<TransactionStatus>) -> MockStarknetReader {
    let mut reader = MockStarknetReader::new();
    let mut sequence = Sequence::new();
    for status in statuses {
        reader
            .expect_transaction_receipt()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(move |_| Ok(receipt_with_status(status)));
    }
    reader
}

fn transport_error() -> ClientError {
    ClientError::TransportError(TransportClientError::BadResponseStatus {
        code: StatusCode::SERVICE_UNAVAILABLE,
        message: "Service Unavailable".to_string(),
    })
}

#[tokio::test(start_paused = true)]
async fn poll_returns_on_reaching_the_target_status() {
    let reader = reader_with_statuses(vec![
        TransactionStatus::Received,
        TransactionStatus::Pending,
        TransactionStatus::AcceptedOnL2,
    ]);
    let report = poll_transaction(&reader, &tx_hash(), TransactionStatus::AcceptedOnL2, &config())
        .await
        .unwrap();
    assert_eq!(report.attempts, 3);
    assert_eq!(report.receipt.status, TransactionStatus::AcceptedOnL2);
}

#[tokio::test(start_paused = true)]
async fn poll_exhausts_its_attempt_budget() {
    let mut reader = MockStarknetReader::new();
    reader
        .expect_transaction_receipt()
        .times(5)
        .returning(|_| Ok(receipt_with_status(TransactionStatus::Pending)));
    let result =
        poll_transaction(&reader, &tx_hash(), TransactionStatus::AcceptedOnL2, &config()).await;
    assert_matches!(
        result,
        Err(PollError::Exhausted { attempts: 5, last_receipt: Some(receipt), .. }) => {
            assert_eq!(receipt.status, TransactionStatus::Pending);
        }
    );
}

#[tokio::test(start_paused = true)]
async fn poll_stops_on_rejection_without_consuming_the_budget() {
    let reader = reader_with_statuses(vec![
        TransactionStatus::Received,
        TransactionStatus::Rejected,
    ]);
    let result =
        poll_transaction(&reader, &tx_hash(), TransactionStatus::AcceptedOnL2, &config()).await;
    assert_matches!(result, Err(PollError::Rejected { attempts: 2, receipt }) => {
        assert_eq!(receipt.status, TransactionStatus::Rejected);
    });
}

#[tokio::test]
async fn poll_rejects_a_zero_attempt_budget_before_any_query() {
    // Any query would fail the mock; none is expected.
    let reader = MockStarknetReader::new();
    let config = PollConfig { poll_interval_seconds: 1, max_attempts: 0 };
    let result =
        poll_transaction(&reader, &tx_hash(), TransactionStatus::AcceptedOnL2, &config).await;
    assert_matches!(result, Err(PollError::InvalidConfig { max_attempts: 0, .. }));
}

#[tokio::test]
async fn poll_rejects_a_zero_interval_before_any_query() {
    let reader = MockStarknetReader::new();
    let config = PollConfig { poll_interval_seconds: 0, max_attempts: 5 };
    let result =
        poll_transaction(&reader, &tx_hash(), TransactionStatus::AcceptedOnL2, &config).await;
    assert_matches!(result, Err(PollError::InvalidConfig { poll_interval_seconds: 0, .. }));
}

#[tokio::test(start_paused = true)]
async fn poll_counts_a_failed_query_as_one_attempt() {
    let mut reader = MockStarknetReader::new();
    let mut sequence = Sequence::new();
    reader
        .expect_transaction_receipt()
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|_| Err(transport_error()));
    reader
        .expect_transaction_receipt()
        .times(1)
        .in_sequence(&mut sequence)
        .returning(|_| Ok(receipt_with_status(TransactionStatus::AcceptedOnL2)));
    let report = poll_transaction(&reader, &tx_hash(), TransactionStatus::AcceptedOnL2, &config())
        .await
        .unwrap();
    assert_eq!(report.attempts, 2);
}

#[tokio::test(start_paused = true)]
async fn poll_surfaces_a_failure_on_the_final_attempt() {
    let mut reader = MockStarknetReader::new();
    reader.expect_transaction_receipt().times(1).returning(|_| Err(transport_error()));
    let config = PollConfig { poll_interval_seconds: 1, max_attempts: 1 };
    let result =
        poll_transaction(&reader, &tx_hash(), TransactionStatus::AcceptedOnL2, &config).await;
    assert_matches!(result, Err(PollError::ClientError(ClientError::TransportError(_))));
}

#[tokio::test(start_paused = true)]
async fn poll_aborts_promptly_when_cancelled_mid_sleep() {
    let mut reader = MockStarknetReader::new();
    reader
        .expect_transaction_receipt()
        .times(1)
        .returning(|_| Ok(receipt_with_status(TransactionStatus::Pending)));
    let config = PollConfig { poll_interval_seconds: 3600, max_attempts: 5 };
    // The first inter-attempt sleep is an hour long; the cancellation must win long before
    // it elapses and no second query may be issued.
    let result = timeout(
        Duration::from_secs(5),
        poll_transaction(&reader, &tx_hash(), TransactionStatus::AcceptedOnL2, &config),
    )
    .await;
    assert!(result.is_err());
}
