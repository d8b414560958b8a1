//! Client implementation for the write path of a [`Starknet`] node's JSON-RPC interface.
//!
//! The client submits transactions (declare a class, deploy a contract, invoke a function),
//! polls for transaction finality and fetches transaction and receipt data. Account
//! management and transaction signing are out of scope; signatures are passed through as
//! opaque strings.
//!
//! [`Starknet`]: https://starknet.io/

pub mod compression_utils;
pub mod objects;
pub mod polling;
pub mod reader;
pub mod transport;
pub mod writer;


use serde::de::DeserializeOwned;
use serde_json::Value;

pub use crate::compression_utils::{encode_program, Program, ProgramEncodingError};
pub use crate::polling::{poll_transaction, PollConfig, PollError, PollReport};
pub use crate::transport::{
    ClientCreationError, HttpJsonRpcTransport, JsonRpcError, JsonRpcTransport,
    TransportClientError,
};

/// A [`Result`] in which the error is a [`ClientError`].
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that may be returned by the client.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    // The variants of ProgramEncodingError are duplicated here so that callers of the
    // submission operations won't need to know about it.
    /// A client error representing a payload that could not be serialized. Local and
    /// non-retryable.
    #[error(transparent)]
    SerializationError(serde_json::Error),
    /// A client error representing a program compression failure. Local and non-retryable.
    #[error("Failed to compress the program: {0}")]
    CompressionError(std::io::Error),
    /// A client error representing a network-level failure. The call never reached the node
    /// or its response never arrived; the caller may retry.
    #[error(transparent)]
    TransportError(TransportClientError),
    /// A client error representing an error object returned by the node. The node received
    /// and rejected the call; retrying will not help.
    #[error("Method {method:?} failed with {error}.")]
    JsonRpcError { method: &'static str, error: JsonRpcError },
    /// A client error representing a result whose shape did not match the expected output
    /// type. Indicates a client/node version mismatch; retrying will not help.
    #[error("Failed to decode the result of method {method:?}: {error}.")]
    DecodeError { method: &'static str, error: serde_json::Error },
}

impl ClientError {
    /// Whether the failure is a network-level one that the caller may retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::TransportError(_))
    }
}

impl From<ProgramEncodingError> for ClientError {
    fn from(error: ProgramEncodingError) -> Self {
        match error {
            ProgramEncodingError::SerializationError(err) => ClientError::SerializationError(err),
            ProgramEncodingError::CompressionError(err) => ClientError::CompressionError(err),
        }
    }
}

/// A generic dispatcher of JSON-RPC calls to a single node.
///
/// Given a method name and positional parameters, performs one remote call through the
/// transport and decodes the result into the requested type. Performs no retries and no
/// logging; every failure is classified and returned to the caller. Retry policy belongs to
/// callers (notably [`poll_transaction`] for status queries).
pub struct StarknetRpcClient<T: JsonRpcTransport> {
    transport: T,
}

impl<T: JsonRpcTransport> StarknetRpcClient<T> {
    pub fn new(transport: T) -> Self {
        StarknetRpcClient { transport }
    }

    /// Calls `method` with the given positional `params` and decodes the result into `R`.
    ///
    /// The parameters are sent in the given order; the protocol is positional, not named.
    pub async fn call<R: DeserializeOwned>(
        &self,
        method: &'static str,
        params: Vec<Value>,
    ) -> ClientResult<R> {
        let raw_result =
            self.transport.send(method, params).await.map_err(|err| match err {
                TransportClientError::JsonRpcError(error) => {
                    ClientError::JsonRpcError { method, error }
                }
                other => ClientError::TransportError(other),
            })?;
        serde_json::from_value(raw_result)
            .map_err(|error| ClientError::DecodeError { method, error })
    }
}
