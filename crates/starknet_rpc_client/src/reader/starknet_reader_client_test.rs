use mockito::{mock, Matcher};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_utils::read_json_file;

use crate::objects::{FunctionCall, TransactionHash};
use crate::reader::objects::transaction::TransactionReceipt;
use crate::reader::{StarknetReader, StarknetReaderClient};
use crate::transport::HttpJsonRpcTransport;

fn reader_client() -> StarknetReaderClient<HttpJsonRpcTransport> {
    StarknetReaderClient::new(HttpJsonRpcTransport::new(&mockito::server_url(), None).unwrap())
}

#[tokio::test]
async fn get_transaction_receipt() {
    let receipt_json = read_json_file("reader/transaction_receipt.json");
    let tx_hash_json = receipt_json["transaction_hash"].clone();
    let mock_receipt = mock("POST", "/")
        .match_body(Matcher::Json(json!({
            "jsonrpc": "2.0",
            "id": "0",
            "method": "starknet_getTransactionReceipt",
            "params": [tx_hash_json],
        })))
        .with_status(200)
        .with_body(json!({ "jsonrpc": "2.0", "id": "0", "result": receipt_json }).to_string())
        .create();
    let tx_hash: TransactionHash =
        serde_json::from_value(receipt_json["transaction_hash"].clone()).unwrap();
    let receipt = reader_client().transaction_receipt(&tx_hash).await.unwrap();
    let expected_receipt = serde_json::from_value::<TransactionReceipt>(receipt_json).unwrap();
    assert_eq!(receipt, expected_receipt);
    mock_receipt.assert();
}

#[tokio::test]
async fn get_transaction() {
    let transaction_json = json!({
        "transaction_hash": "0x7ab2a5b",
        "type": "INVOKE_FUNCTION",
        "calldata": ["0x1"],
    });
    let mock_transaction = mock("POST", "/")
        .match_body(Matcher::Json(json!({
            "jsonrpc": "2.0",
            "id": "0",
            "method": "starknet_getTransactionByHash",
            "params": ["0x7ab2a5b"],
        })))
        .with_status(200)
        .with_body(
            json!({ "jsonrpc": "2.0", "id": "0", "result": transaction_json }).to_string(),
        )
        .create();
    let transaction = reader_client().transaction(&"0x7ab2a5b".into()).await.unwrap();
    assert_eq!(transaction, transaction_json);
    mock_transaction.assert();
}

#[tokio::test]
async fn call_contract() {
    let function_call =
        serde_json::from_value::<FunctionCall>(read_json_file("writer/function_call.json"))
            .unwrap();
    let function_call_json = serde_json::to_value(&function_call).unwrap();
    let mock_call = mock("POST", "/")
        .match_body(Matcher::Json(json!({
            "jsonrpc": "2.0",
            "id": "0",
            "method": "starknet_call",
            "params": [function_call_json, "latest"],
        })))
        .with_status(200)
        .with_body(json!({ "jsonrpc": "2.0", "id": "0", "result": ["0x2a"] }).to_string())
        .create();
    let result = reader_client().call_contract(&function_call, "latest").await.unwrap();
    assert_eq!(result, vec!["0x2a".to_string()]);
    mock_call.assert();
}
