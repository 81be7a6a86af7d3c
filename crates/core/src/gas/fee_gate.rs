use std::sync::Arc;

use crate::{
    gas::GasPrice,
    provider::{ChainClient, ChainClientError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Proceed,
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeReading {
    pub price: GasPrice,
    pub threshold: GasPrice,
    pub decision: GateDecision,
}

/// Strictly below: a reading equal to the threshold does not proceed.
pub fn is_below_threshold(price: GasPrice, threshold: GasPrice) -> bool {
    price < threshold
}

/// Decides, once per cycle, whether the network is cheap enough to send.
pub struct FeeGate {
    client: Arc<dyn ChainClient>,
    threshold: GasPrice,
}

impl FeeGate {
    pub fn new(client: Arc<dyn ChainClient>, threshold: GasPrice) -> Self {
        FeeGate { client, threshold }
    }

    /// Fetches a fresh gas price and compares it to the threshold.
    ///
    /// A failed query is returned as an error, never as a decision, so transfers
    /// cannot fire on an unknown price.
    pub async fn evaluate(&self) -> Result<FeeReading, ChainClientError> {
        let price = self.client.current_fee_price().await?;

        let decision = if is_below_threshold(price, self.threshold) {
            GateDecision::Proceed
        } else {
            GateDecision::Skip
        };

        Ok(FeeReading { price, threshold: self.threshold, decision })
    }
}
