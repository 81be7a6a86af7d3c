mod chain_client;
pub use chain_client::{ChainClient, ChainClientError};

mod evm_provider;
pub use evm_provider::{
    create_client, create_retry_client, EvmProvider, FeegateProvider, RetryClientError,
};

#[cfg(test)]
pub(crate) mod mock_chain_client;
