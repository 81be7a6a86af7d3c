use std::{sync::Arc, time::Duration};

use tokio::time::sleep;

use crate::{
    config::BatchConfig,
    feegate_error, feegate_info,
    gas::GasLimit,
    network::ChainId,
    provider::{ChainClient, ChainClientError},
    shared::utils::format_eth,
    transaction::{
        types::{TransactionHash, TransferOutcome, TransferRequest, UnsignedTransfer},
        AmountRange,
    },
    wallet::Credential,
};

/// Sends native-currency transfers for one source/destination pair at a time.
pub struct TransferExecutor {
    client: Arc<dyn ChainClient>,
    amount_range: AmountRange,
    transfers_per_pair: u32,
    transfer_delay: Duration,
    gas_limit: GasLimit,
    chain_id: ChainId,
}

impl TransferExecutor {
    pub fn new(client: Arc<dyn ChainClient>, config: &BatchConfig) -> Self {
        TransferExecutor {
            client,
            amount_range: config.amount_range,
            transfers_per_pair: config.transfers_per_pair,
            transfer_delay: config.transfer_delay,
            gas_limit: config.gas_limit,
            chain_id: config.chain_id,
        }
    }

    /// Validates, prices, signs and submits a single transfer.
    ///
    /// The nonce and gas price are fetched fresh for every call, so consecutive
    /// transfers from the same wallet pick up the nonce of the one before.
    ///
    /// # Returns
    /// * `Ok(TransactionHash)` - Hash of the submitted transaction
    /// * `Err(ChainClientError)` - The first failure; nothing was submitted
    pub async fn send_transfer(
        &self,
        request: &TransferRequest<'_>,
    ) -> Result<TransactionHash, ChainClientError> {
        let to = self.client.validate_address(request.destination)?;
        let from = self.client.derive_address(request.credential)?;

        let nonce = self.client.next_sequence_number(&from).await?;
        let gas_price = self.client.current_fee_price().await?;

        let transfer = UnsignedTransfer {
            to,
            value: request.amount,
            nonce,
            gas_price,
            gas_limit: self.gas_limit,
            chain_id: self.chain_id,
        };

        self.client.sign_and_submit(request.credential, transfer).await
    }

    /// Runs the configured number of transfers for one pair, each with its own random
    /// amount, and returns one outcome per attempt. Failures are logged and recorded,
    /// never returned as errors.
    pub async fn send_to_pair(
        &self,
        credential: &Credential,
        destination: &str,
    ) -> Vec<TransferOutcome> {
        let mut outcomes = Vec::new();

        for transfer_index in 0..self.transfers_per_pair {
            let amount = self.amount_range.sample(&mut rand::thread_rng());
            feegate_info!(
                "    [{}/{}] Sending {} ETH ...",
                transfer_index + 1,
                self.transfers_per_pair,
                format_eth(amount)
            );

            let request = TransferRequest::new(credential, destination, amount);
            let outcome = match self.send_transfer(&request).await {
                Ok(hash) => {
                    feegate_info!("    Transaction sent! TX HASH: {}", hash);
                    TransferOutcome::Sent { hash, amount }
                }
                Err(e) => {
                    feegate_error!("    Failed to send transaction: {}", e);
                    TransferOutcome::Failed { reason: e.to_string(), amount }
                }
            };
            outcomes.push(outcome);

            if transfer_index + 1 < self.transfers_per_pair {
                feegate_info!("    Waiting {}s...", self.transfer_delay.as_secs());
                sleep(self.transfer_delay).await;
            }
        }

        outcomes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::mock_chain_client::{
        MockChainClient, ALICE_KEY, BOB_KEY, CAROL_ADDRESS, DAVE_ADDRESS,
    };
    use alloy::primitives::U256;
    use tokio::time::Instant;

    fn executor(client: Arc<MockChainClient>, transfers_per_pair: u32) -> TransferExecutor {
        let config = BatchConfig { transfers_per_pair, ..BatchConfig::default() };
        TransferExecutor::new(client, &config)
    }

    #[tokio::test]
    async fn test_send_transfer_builds_priced_transfer() {
        let client = Arc::new(MockChainClient::with_gwei_price(3));
        let executor = executor(client.clone(), 1);
        let credential = Credential::new(ALICE_KEY);

        let request = TransferRequest::new(&credential, CAROL_ADDRESS, U256::from(42u64));
        executor.send_transfer(&request).await.unwrap();

        let submissions = client.submissions();
        assert_eq!(submissions.len(), 1);
        let transfer = &submissions[0].transfer;
        assert_eq!(transfer.to.hex(), CAROL_ADDRESS);
        assert_eq!(transfer.value, U256::from(42u64));
        assert_eq!(transfer.gas_price.into_u128(), 3_000_000_000);
        assert_eq!(transfer.gas_limit, GasLimit::NATIVE_TRANSFER);
        assert_eq!(transfer.chain_id, ChainId::new(1));
        assert_eq!(submissions[0].from.hex(), "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    }

    #[tokio::test]
    async fn test_send_transfer_rejects_malformed_destination() {
        let client = Arc::new(MockChainClient::with_gwei_price(3));
        let executor = executor(client.clone(), 1);
        let credential = Credential::new(ALICE_KEY);

        let request = TransferRequest::new(&credential, "0xnot-an-address", U256::from(1u64));
        let result = executor.send_transfer(&request).await;

        assert!(matches!(result, Err(ChainClientError::InvalidAddress(_))));
        assert!(client.submissions().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_to_pair_draws_independent_amounts_and_waits_between() {
        let client = Arc::new(MockChainClient::with_gwei_price(3));
        let executor = executor(client.clone(), 3);
        let credential = Credential::new(BOB_KEY);

        let started = Instant::now();
        let outcomes = executor.send_to_pair(&credential, DAVE_ADDRESS).await;
        let elapsed = started.elapsed();

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes.iter().all(TransferOutcome::is_sent));

        let range = AmountRange::default();
        for outcome in &outcomes {
            assert!(outcome.amount() >= range.min() && outcome.amount() <= range.max());
        }

        // two waits for three transfers, none after the last
        assert!(elapsed >= Duration::from_secs(40));
        assert!(elapsed < Duration::from_secs(41));

        let nonces: Vec<u64> =
            client.submissions().iter().map(|s| s.transfer.nonce.into_inner()).collect();
        assert_eq!(nonces, vec![0, 1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_to_pair_keeps_going_after_failure() {
        let client = Arc::new(MockChainClient::with_gwei_price(3).rejecting_sender(ALICE_KEY));
        let executor = executor(client.clone(), 2);
        let credential = Credential::new(ALICE_KEY);

        let outcomes = executor.send_to_pair(&credential, CAROL_ADDRESS).await;

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| matches!(o, TransferOutcome::Failed { .. })));
    }
}
