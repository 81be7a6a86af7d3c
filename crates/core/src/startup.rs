use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::{
    batch::{CycleScheduler, RunSummary, SchedulerError},
    config::BatchConfig,
    input::BatchInputs,
    network::ChainId,
    provider::{ChainClient, ChainClientError, EvmProvider, RetryClientError},
};

#[derive(Error, Debug)]
pub enum StartError {
    #[error("{0}")]
    Provider(#[from] RetryClientError),

    #[error("Can not connect to the node at {0}. Check the endpoint or your internet connection.")]
    NodeUnreachable(String),

    #[error("Node at {endpoint} is on chain {node} but the config expects chain {configured}")]
    ChainIdMismatch { endpoint: String, configured: ChainId, node: ChainId },

    #[error("Could not query the node: {0}")]
    ChainClient(#[from] ChainClientError),

    #[error("{0}")]
    Scheduler(#[from] SchedulerError),
}

/// Fails unless the node answers and reports the configured chain id.
pub async fn check_connection(
    client: &dyn ChainClient,
    config: &BatchConfig,
) -> Result<(), StartError> {
    if !client.is_connected().await {
        return Err(StartError::NodeUnreachable(config.endpoint.clone()));
    }

    let node_chain_id = client.chain_id().await?;
    if node_chain_id != config.chain_id {
        return Err(StartError::ChainIdMismatch {
            endpoint: config.endpoint.clone(),
            configured: config.chain_id,
            node: node_chain_id,
        });
    }

    info!("Connected to {} (chain {})", config.endpoint, node_chain_id);
    Ok(())
}

/// Creates the alloy-backed client for `config.endpoint` and checks it is usable.
pub async fn connect(config: &BatchConfig) -> Result<Arc<dyn ChainClient>, StartError> {
    let client: Arc<dyn ChainClient> = Arc::new(EvmProvider::new(&config.endpoint)?);
    check_connection(client.as_ref(), config).await?;
    Ok(client)
}

/// Runs a whole batch against an already constructed client.
///
/// `inputs` must already be loaded: input problems are reported before this point so
/// they never cost a network round trip.
pub async fn run_batch(
    config: BatchConfig,
    inputs: &BatchInputs,
    client: Arc<dyn ChainClient>,
) -> Result<RunSummary, StartError> {
    check_connection(client.as_ref(), &config).await?;

    info!(
        "Loaded {} private keys and {} destination addresses, {} pairs per cycle",
        inputs.credentials().len(),
        inputs.destinations().len(),
        inputs.pairing_len()
    );
    if inputs.unpaired_len() > 0 {
        warn!(
            "{} entries on the longer list have no partner and will not be processed",
            inputs.unpaired_len()
        );
    }

    let scheduler = CycleScheduler::new(config, client);
    Ok(scheduler.run(inputs).await?)
}

/// Connects to the configured node and runs the batch.
pub async fn start(config: BatchConfig, inputs: &BatchInputs) -> Result<RunSummary, StartError> {
    let client: Arc<dyn ChainClient> = Arc::new(EvmProvider::new(&config.endpoint)?);
    run_batch(config, inputs, client).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        provider::mock_chain_client::{
            MockChainClient, ALICE_KEY, BOB_KEY, CAROL_ADDRESS, DAVE_ADDRESS,
        },
        wallet::Credential,
    };

    fn inputs() -> BatchInputs {
        BatchInputs::new(
            vec![Credential::new(ALICE_KEY), Credential::new(BOB_KEY)],
            vec![CAROL_ADDRESS.to_string(), DAVE_ADDRESS.to_string()],
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_unreachable_node_fails_before_any_cycle() {
        let client = Arc::new(MockChainClient::with_gwei_price(3).disconnected());

        let result = run_batch(BatchConfig::default(), &inputs(), client.clone()).await;

        assert!(matches!(result, Err(StartError::NodeUnreachable(_))));
        assert_eq!(client.fee_price_calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_chain_id_mismatch_fails_before_any_cycle() {
        let client = Arc::new(MockChainClient::with_gwei_price(3).on_chain(11155111));

        let result = run_batch(BatchConfig::default(), &inputs(), client.clone()).await;

        match result {
            Err(StartError::ChainIdMismatch { configured, node, .. }) => {
                assert_eq!(configured, ChainId::new(1));
                assert_eq!(node, ChainId::new(11155111));
            }
            other => panic!("expected chain id mismatch, got {:?}", other),
        }
        assert_eq!(client.fee_price_calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_batch_completes_all_cycles() {
        let client = Arc::new(MockChainClient::with_gwei_price(3));
        let config = BatchConfig { cycle_count: 2, ..BatchConfig::default() };

        let summary = run_batch(config, &inputs(), client.clone()).await.unwrap();

        assert_eq!(summary.cycles_run, 2);
        assert_eq!(summary.transfers_sent, 4);
        assert_eq!(client.submissions().len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fee_query_failure_surfaces_as_start_error() {
        let client = Arc::new(MockChainClient::with_gwei_price(3).failing_fee_price());

        let result = run_batch(BatchConfig::default(), &inputs(), client).await;

        assert!(matches!(result, Err(StartError::Scheduler(_))));
    }
}
