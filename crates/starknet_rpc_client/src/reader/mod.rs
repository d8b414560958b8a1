//! This module contains clients that can read data from [`Starknet`].
//!
//! [`Starknet`]: https://starknet.io/

pub mod objects;

#[cfg(test)]
#[path = "starknet_reader_client_test.rs"]
mod starknet_reader_client_test;

use async_trait::async_trait;
#[cfg(any(feature = "testing", test))]
use mockall::automock;
use serde_json::json;

use crate::objects::{FunctionCall, TransactionHash};
use crate::reader::objects::transaction::TransactionReceipt;
use crate::{ClientError, ClientResult, JsonRpcTransport, StarknetRpcClient};

const GET_TRANSACTION_RECEIPT_METHOD: &str = "starknet_getTransactionReceipt";
const GET_TRANSACTION_BY_HASH_METHOD: &str = "starknet_getTransactionByHash";
const CALL_METHOD: &str = "starknet_call";

/// A trait describing an object that can communicate with [`Starknet`] and read data from
/// it.
///
/// [`Starknet`]: https://starknet.io/
#[cfg_attr(any(test, feature = "testing"), automock)]
#[async_trait]
pub trait StarknetReader {
    /// Returns the receipt of the transaction with hash `transaction_hash`, including its
    /// current status. This is the query the polling loop issues on every tick.
    async fn transaction_receipt(
        &self,
        transaction_hash: &TransactionHash,
    ) -> ClientResult<TransactionReceipt>;

    /// Returns the full data of the transaction with hash `transaction_hash`, in the node's
    /// own representation.
    async fn transaction(
        &self,
        transaction_hash: &TransactionHash,
    ) -> ClientResult<serde_json::Value>;

    /// Calls `function_call` against the state of the block with tag `block_id` without
    /// creating a transaction, returning the raw felt strings of the result.
    async fn call_contract(
        &self,
        function_call: &FunctionCall,
        block_id: &str,
    ) -> ClientResult<Vec<String>>;
}

/// A [`StarknetReader`] over a JSON-RPC transport.
pub struct StarknetReaderClient<T: JsonRpcTransport> {
    client: StarknetRpcClient<T>,
}

impl<T: JsonRpcTransport> StarknetReaderClient<T> {
    pub fn new(transport: T) -> Self {
        StarknetReaderClient { client: StarknetRpcClient::new(transport) }
    }
}

#[async_trait]
impl<T: JsonRpcTransport> StarknetReader for StarknetReaderClient<T> {
    async fn transaction_receipt(
        &self,
        transaction_hash: &TransactionHash,
    ) -> ClientResult<TransactionReceipt> {
        self.client.call(GET_TRANSACTION_RECEIPT_METHOD, vec![json!(transaction_hash)]).await
    }

    async fn transaction(
        &self,
        transaction_hash: &TransactionHash,
    ) -> ClientResult<serde_json::Value> {
        self.client.call(GET_TRANSACTION_BY_HASH_METHOD, vec![json!(transaction_hash)]).await
    }

    async fn call_contract(
        &self,
        function_call: &FunctionCall,
        block_id: &str,
    ) -> ClientResult<Vec<String>> {
        let function_call =
            serde_json::to_value(function_call).map_err(ClientError::SerializationError)?;
        self.client.call(CALL_METHOD, vec![function_call, json!(block_id)]).await
    }
}
