//! The transport collaborator: delivery of single JSON-RPC requests to a node.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::collections::HashMap;

use async_trait::async_trait;
#[cfg(any(feature = "testing", test))]
use mockall::automock;
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

const JSON_RPC_VERSION: &str = "2.0";

/// A JSON-RPC error object returned by the node.
#[derive(thiserror::Error, Debug, Clone, Deserialize, Serialize, Eq, PartialEq)]
#[error("JSON-RPC error code {code}: {message}")]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub data: Option<Value>,
}

/// Errors that might be encountered while creating a transport.
#[derive(thiserror::Error, Debug)]
pub enum ClientCreationError {
    #[error(transparent)]
    BadUrl(#[from] url::ParseError),
    #[error(transparent)]
    BuildError(#[from] reqwest::Error),
    #[error(transparent)]
    HttpHeaderError(#[from] http::Error),
}

/// Errors that a transport may return for a single request.
///
/// [`JsonRpcError`] is the only variant in which the node received the request and answered;
/// all other variants are network-level failures.
#[derive(thiserror::Error, Debug)]
pub enum TransportClientError {
    /// A transport error representing http request errors.
    #[error(transparent)]
    RequestError(#[from] reqwest::Error),
    /// A transport error representing bad status http responses.
    #[error("Bad response status code: {:?} message: {:?}.", code, message)]
    BadResponseStatus { code: StatusCode, message: String },
    /// A transport error representing an unparsable response envelope.
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    /// A transport error wrapping the error object returned by the node.
    #[error(transparent)]
    JsonRpcError(#[from] JsonRpcError),
}

/// A collaborator that can deliver a single JSON-RPC request to a node.
///
/// Implementations must be safe for concurrent use and must preserve the order of `params`;
/// the protocol is positional, not named. Implementations must distinguish network-level
/// failures from a decoded node-level error object (see [`TransportClientError`]).
#[cfg_attr(any(test, feature = "testing"), automock)]
#[async_trait]
pub trait JsonRpcTransport: Send + Sync {
    /// Sends `method` with positional `params` and returns the raw result value.
    async fn send(&self, method: &str, params: Vec<Value>)
    -> Result<Value, TransportClientError>;
}

#[derive(Debug, Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    id: &'static str,
    method: &'a str,
    params: &'a [Value],
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    result: Option<Value>,
    error: Option<JsonRpcError>,
}

/// A [`JsonRpcTransport`] that posts requests to a node over http.
pub struct HttpJsonRpcTransport {
    url: Url,
    http_headers: HeaderMap,
    internal_client: Client,
}

impl HttpJsonRpcTransport {
    /// Creates a new transport for the node at `url_str`, sending `http_headers` with every
    /// request.
    pub fn new(
        url_str: &str,
        http_headers: Option<HashMap<String, String>>,
    ) -> Result<Self, ClientCreationError> {
        let header_map = match http_headers {
            Some(inner) => (&inner).try_into()?,
            None => HeaderMap::new(),
        };
        Ok(HttpJsonRpcTransport {
            url: Url::parse(url_str)?,
            http_headers: header_map,
            internal_client: Client::builder().build()?,
        })
    }
}

#[async_trait]
impl JsonRpcTransport for HttpJsonRpcTransport {
    async fn send(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<Value, TransportClientError> {
        let request =
            JsonRpcRequest { jsonrpc: JSON_RPC_VERSION, id: "0", method, params: &params };
        let res = self
            .internal_client
            .post(self.url.clone())
            .headers(self.http_headers.clone())
            .json(&request)
            .send()
            .await;
        let (code, message) = match res {
            Ok(response) => (response.status(), response.text().await?),
            Err(err) => {
                let msg = err.to_string();
                (err.status().ok_or(err)?, msg)
            }
        };
        if code != StatusCode::OK {
            return Err(TransportClientError::BadResponseStatus { code, message });
        }
        let response: JsonRpcResponse = serde_json::from_str(&message)?;
        match (response.result, response.error) {
            (_, Some(error)) => Err(TransportClientError::JsonRpcError(error)),
            (Some(result), None) => Ok(result),
            (None, None) => Err(TransportClientError::SerdeError(serde::de::Error::custom(
                "JSON-RPC response carries neither a result nor an error",
            ))),
        }
    }
}
