use std::sync::Arc;

use alloy::{
    consensus::{SignableTransaction, TxEnvelope, TxLegacy},
    eips::{eip2718::Encodable2718, BlockId, BlockNumberOrTag},
    network::{Ethereum, TxSignerSync},
    primitives::{Bytes, TxKind},
    providers::{Provider, RootProvider},
    rpc::client::ClientBuilder,
    transports::{http::reqwest::Url, layers::RetryBackoffLayer},
};
use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use crate::{
    gas::GasPrice,
    network::ChainId,
    provider::{ChainClient, ChainClientError},
    shared::common_types::EvmAddress,
    transaction::types::{TransactionHash, TransactionNonce, UnsignedTransfer},
    wallet::{Credential, WalletError},
};

pub type FeegateProvider = RootProvider<Ethereum>;

#[derive(Error, Debug)]
pub enum RetryClientError {
    #[error("http provider cant be created for {0}: {1}")]
    HttpProviderCantBeCreated(String, String),
}

fn parse_rpc_url(rpc_url: &str) -> Result<Url, RetryClientError> {
    Url::parse(rpc_url).map_err(|e| {
        RetryClientError::HttpProviderCantBeCreated(rpc_url.to_string(), e.to_string())
    })
}

/// Builds an HTTP provider that backs off when the node rate-limits us.
///
/// Only used for reads. A replayed `eth_sendRawTransaction` can come back as
/// "already known" for a transaction the node did accept.
pub fn create_retry_client(rpc_url: &str) -> Result<Arc<FeegateProvider>, RetryClientError> {
    let retry_layer = RetryBackoffLayer::new(10, 500, 660);
    let client = ClientBuilder::default().layer(retry_layer).http(parse_rpc_url(rpc_url)?);

    Ok(Arc::new(RootProvider::new(client)))
}

/// Builds an HTTP provider that sends every request exactly once.
pub fn create_client(rpc_url: &str) -> Result<Arc<FeegateProvider>, RetryClientError> {
    let client = ClientBuilder::default().http(parse_rpc_url(rpc_url)?);

    Ok(Arc::new(RootProvider::new(client)))
}

#[derive(Clone)]
pub struct EvmProvider {
    rpc_client: Arc<FeegateProvider>,
    submit_client: Arc<FeegateProvider>,
    pub provider_url: String,
}

impl EvmProvider {
    /// Creates the provider without touching the network; use
    /// [`ChainClient::is_connected`] to check reachability.
    pub fn new(provider_url: &str) -> Result<Self, RetryClientError> {
        Ok(EvmProvider {
            rpc_client: create_retry_client(provider_url)?,
            submit_client: create_client(provider_url)?,
            provider_url: provider_url.to_string(),
        })
    }
}

#[async_trait]
impl ChainClient for EvmProvider {
    async fn is_connected(&self) -> bool {
        match self.rpc_client.get_block_number().await {
            Ok(_) => true,
            Err(e) => {
                warn!("Node at {} is not reachable: {}", self.provider_url, e);
                false
            }
        }
    }

    async fn chain_id(&self) -> Result<ChainId, ChainClientError> {
        Ok(ChainId::new(self.rpc_client.get_chain_id().await?))
    }

    async fn current_fee_price(&self) -> Result<GasPrice, ChainClientError> {
        Ok(GasPrice::new(self.rpc_client.get_gas_price().await?))
    }

    fn derive_address(&self, credential: &Credential) -> Result<EvmAddress, ChainClientError> {
        Ok(credential.address()?)
    }

    fn validate_address(&self, address: &str) -> Result<EvmAddress, ChainClientError> {
        EvmAddress::parse_strict(address)
            .map_err(|e| ChainClientError::InvalidAddress(e.to_string()))
    }

    async fn next_sequence_number(
        &self,
        address: &EvmAddress,
    ) -> Result<TransactionNonce, ChainClientError> {
        let nonce = self
            .rpc_client
            .get_transaction_count(address.into_address())
            .block_id(BlockId::Number(BlockNumberOrTag::Pending))
            .await?;

        Ok(TransactionNonce::new(nonce))
    }

    async fn sign_and_submit(
        &self,
        credential: &Credential,
        transfer: UnsignedTransfer,
    ) -> Result<TransactionHash, ChainClientError> {
        let signer = credential.signer()?;

        let mut transaction = TxLegacy {
            chain_id: Some(transfer.chain_id.u64()),
            nonce: transfer.nonce.into_inner(),
            gas_price: transfer.gas_price.into_u128(),
            gas_limit: transfer.gas_limit.into_inner(),
            to: TxKind::Call(transfer.to.into_address()),
            value: transfer.value,
            input: Bytes::new(),
        };

        let signature =
            signer.sign_transaction_sync(&mut transaction).map_err(WalletError::from)?;

        let tx_envelope = TxEnvelope::Legacy(transaction.into_signed(signature));
        let tx_bytes = tx_envelope.encoded_2718();

        let pending = self.submit_client.send_raw_transaction(&tx_bytes).await?;

        Ok(TransactionHash::from_alloy_hash(pending.tx_hash()))
    }
}
