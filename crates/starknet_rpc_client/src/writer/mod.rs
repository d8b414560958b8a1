//! This module contains clients that can request changes to [`Starknet`].
//!
//! [`Starknet`]: https://starknet.io/

pub mod objects;


use async_trait::async_trait;
#[cfg(any(feature = "testing", test))]
use mockall::automock;
use serde_json::json;

use crate::objects::FunctionCall;
use crate::writer::objects::response::{DeclareResponse, DeployResponse, InvokeResponse};
use crate::writer::objects::transaction::ContractDefinition;
use crate::{ClientError, ClientResult, JsonRpcTransport, StarknetRpcClient};

const ADD_DECLARE_TRANSACTION_METHOD: &str = "starknet_addDeclareTransaction";
const ADD_DEPLOY_TRANSACTION_METHOD: &str = "starknet_addDeployTransaction";
const ADD_INVOKE_TRANSACTION_METHOD: &str = "starknet_addInvokeTransaction";

/// A trait describing an object that can communicate with [`Starknet`] and make changes to
/// it.
///
/// [`Starknet`]: https://starknet.io/
#[cfg_attr(any(test, feature = "testing"), automock)]
#[async_trait]
pub trait StarknetWriter {
    /// Declares a new contract class on [`Starknet`].
    ///
    /// The program of `contract_definition` is encoded before dispatch if it is not already
    /// encoded; `contract_definition` itself is left untouched.
    ///
    /// [`Starknet`]: https://starknet.io/
    async fn add_declare_transaction(
        &self,
        contract_definition: &ContractDefinition,
        version: &str,
    ) -> ClientResult<DeclareResponse>;

    /// Declares a class and instantiates the associated contract in one transaction.
    ///
    /// This is a legacy path: it remains the only way to deploy an account contract without
    /// being charged for it. Prefer [`add_declare_transaction`] followed by
    /// [`add_invoke_transaction`] where available.
    ///
    /// [`add_declare_transaction`]: StarknetWriter::add_declare_transaction
    /// [`add_invoke_transaction`]: StarknetWriter::add_invoke_transaction
    async fn add_deploy_transaction(
        &self,
        contract_address_salt: &str,
        constructor_calldata: &[String],
        contract_definition: &ContractDefinition,
    ) -> ClientResult<DeployResponse>;

    /// Invokes a function of a deployed contract on [`Starknet`].
    ///
    /// [`Starknet`]: https://starknet.io/
    async fn add_invoke_transaction(
        &self,
        function_call: &FunctionCall,
        signature: &[String],
        max_fee: &str,
        version: &str,
    ) -> ClientResult<InvokeResponse>;
}

/// A [`StarknetWriter`] over a JSON-RPC transport.
pub struct StarknetWriterClient<T: JsonRpcTransport> {
    client: StarknetRpcClient<T>,
}

impl<T: JsonRpcTransport> StarknetWriterClient<T> {
    pub fn new(transport: T) -> Self {
        StarknetWriterClient { client: StarknetRpcClient::new(transport) }
    }
}

#[async_trait]
impl<T: JsonRpcTransport> StarknetWriter for StarknetWriterClient<T> {
    async fn add_declare_transaction(
        &self,
        contract_definition: &ContractDefinition,
        version: &str,
    ) -> ClientResult<DeclareResponse> {
        let contract_definition = contract_definition.encode_program()?;
        self.client
            .call(
                ADD_DECLARE_TRANSACTION_METHOD,
                vec![to_param(&contract_definition)?, json!(version)],
            )
            .await
    }

    async fn add_deploy_transaction(
        &self,
        contract_address_salt: &str,
        constructor_calldata: &[String],
        contract_definition: &ContractDefinition,
    ) -> ClientResult<DeployResponse> {
        let contract_definition = contract_definition.encode_program()?;
        self.client
            .call(
                ADD_DEPLOY_TRANSACTION_METHOD,
                vec![
                    json!(contract_address_salt),
                    json!(constructor_calldata),
                    to_param(&contract_definition)?,
                ],
            )
            .await
    }

    async fn add_invoke_transaction(
        &self,
        function_call: &FunctionCall,
        signature: &[String],
        max_fee: &str,
        version: &str,
    ) -> ClientResult<InvokeResponse> {
        self.client
            .call(
                ADD_INVOKE_TRANSACTION_METHOD,
                vec![to_param(function_call)?, json!(signature), json!(max_fee), json!(version)],
            )
            .await
    }
}

fn to_param<P: serde::Serialize>(param: &P) -> Result<serde_json::Value, ClientError> {
    serde_json::to_value(param).map_err(ClientError::SerializationError)
}
