use std::sync::Arc;

use thiserror::Error;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::{
    batch::{pair_inputs, TransferPair},
    config::BatchConfig,
    gas::{FeeGate, GateDecision},
    input::BatchInputs,
    provider::{ChainClient, ChainClientError},
    transaction::TransferExecutor,
};

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Gas price query failed in cycle {cycle}: {source}")]
    FeeQueryFailed {
        cycle: u32,
        #[source]
        source: ChainClientError,
    },
}

/// What a finished run did. Only counted, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub cycles_run: u32,
    pub cycles_skipped: u32,
    pub cycle_waits: u32,
    pub transfers_sent: u32,
    pub transfers_failed: u32,
}

/// Runs the fixed number of gas-gated cycles over the loaded pairs.
pub struct CycleScheduler {
    config: BatchConfig,
    client: Arc<dyn ChainClient>,
    fee_gate: FeeGate,
    executor: TransferExecutor,
}

impl CycleScheduler {
    pub fn new(config: BatchConfig, client: Arc<dyn ChainClient>) -> Self {
        let fee_gate = FeeGate::new(client.clone(), config.fee_threshold);
        let executor = TransferExecutor::new(client.clone(), &config);

        CycleScheduler { config, client, fee_gate, executor }
    }

    /// Runs every cycle in order and returns the tally.
    ///
    /// A cycle whose gas price is at or above the threshold is skipped but still
    /// counted. A failed gas price query stops the whole run with an error.
    pub async fn run(&self, inputs: &BatchInputs) -> Result<RunSummary, SchedulerError> {
        let pairs = pair_inputs(inputs);
        let cycle_count = self.config.cycle_count;
        let mut summary = RunSummary::default();

        for cycle_index in 0..cycle_count {
            let cycle = cycle_index + 1;
            info!("=== Cycle {}/{} ===", cycle, cycle_count);

            let reading = self
                .fee_gate
                .evaluate()
                .await
                .map_err(|source| SchedulerError::FeeQueryFailed { cycle, source })?;
            info!("Current gas price: {}", reading.price);

            match reading.decision {
                GateDecision::Proceed => {
                    info!(
                        "Gas price is below {}. Sending transactions...",
                        reading.threshold
                    );
                    for pair in &pairs {
                        self.run_pair(pair, &mut summary).await;
                    }
                }
                GateDecision::Skip => {
                    info!("Gas price >= {}. Skipping transactions.", reading.threshold);
                    summary.cycles_skipped += 1;
                }
            }
            summary.cycles_run += 1;

            if cycle < cycle_count {
                info!(
                    "Finished cycle {}. Waiting {}s before the next cycle...",
                    cycle,
                    self.config.cycle_delay.as_secs()
                );
                sleep(self.config.cycle_delay).await;
                summary.cycle_waits += 1;
            }
        }

        info!("All cycles complete!");
        Ok(summary)
    }

    async fn run_pair(&self, pair: &TransferPair<'_>, summary: &mut RunSummary) {
        let source = match self.client.derive_address(pair.credential) {
            Ok(address) => address.hex(),
            Err(e) => {
                warn!("  Could not derive the wallet address for pair {}: {}", pair.index + 1, e);
                "<invalid private key>".to_string()
            }
        };
        info!("  {}. Wallet {} -> {}", pair.index + 1, source, pair.destination);

        for outcome in self.executor.send_to_pair(pair.credential, pair.destination).await {
            if outcome.is_sent() {
                summary.transfers_sent += 1;
            } else {
                summary.transfers_failed += 1;
            }
        }
    }
}
