use std::time::Duration;

use crate::{
    gas::{GasLimit, GasPrice},
    network::ChainId,
    transaction::AmountRange,
};

pub const DEFAULT_ENDPOINT: &str = "https://ethereum-rpc.publicnode.com";

/// Immutable settings for one batch run, fixed before the first cycle starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    pub endpoint: String,
    pub chain_id: ChainId,
    pub cycle_count: u32,
    pub cycle_delay: Duration,
    pub transfers_per_pair: u32,
    pub transfer_delay: Duration,
    /// Sends only happen while the gas price is strictly below this.
    pub fee_threshold: GasPrice,
    pub amount_range: AmountRange,
    pub gas_limit: GasLimit,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            chain_id: ChainId::default(),
            cycle_count: 5,
            cycle_delay: Duration::from_secs(60),
            transfers_per_pair: 1,
            transfer_delay: Duration::from_secs(20),
            fee_threshold: GasPrice::new(5_000_000_000),
            amount_range: AmountRange::default(),
            gas_limit: GasLimit::NATIVE_TRANSFER,
        }
    }
}
