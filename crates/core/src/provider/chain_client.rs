use alloy::transports::{RpcError, TransportErrorKind};
use async_trait::async_trait;
use thiserror::Error;

use crate::{
    gas::GasPrice,
    network::ChainId,
    shared::common_types::EvmAddress,
    transaction::types::{TransactionHash, TransactionNonce, UnsignedTransfer},
    wallet::{Credential, WalletError},
};

#[derive(Error, Debug)]
pub enum ChainClientError {
    #[error("Provider error: {0}")]
    ProviderError(#[from] RpcError<TransportErrorKind>),

    #[error("Wallet error: {0}")]
    WalletError(#[from] WalletError),

    #[error("Invalid recipient address: {0}")]
    InvalidAddress(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Everything the batch needs from a blockchain node and its signing library.
///
/// Calls are awaited one at a time by the scheduler; implementations never see two
/// requests in flight.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Whether the node answers at all.
    async fn is_connected(&self) -> bool;

    async fn chain_id(&self) -> Result<ChainId, ChainClientError>;

    /// Current legacy gas price in wei.
    async fn current_fee_price(&self) -> Result<GasPrice, ChainClientError>;

    fn derive_address(&self, credential: &Credential) -> Result<EvmAddress, ChainClientError>;

    fn validate_address(&self, address: &str) -> Result<EvmAddress, ChainClientError>;

    /// Next nonce for the account, counting transactions still in the mempool.
    async fn next_sequence_number(
        &self,
        address: &EvmAddress,
    ) -> Result<TransactionNonce, ChainClientError>;

    async fn sign_and_submit(
        &self,
        credential: &Credential,
        transfer: UnsignedTransfer,
    ) -> Result<TransactionHash, ChainClientError>;
}
