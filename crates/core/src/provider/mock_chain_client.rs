use std::{
    collections::{HashMap, HashSet},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use alloy::primitives::{keccak256, U256};
use async_trait::async_trait;

use crate::{
    gas::GasPrice,
    network::ChainId,
    provider::{ChainClient, ChainClientError},
    shared::common_types::EvmAddress,
    transaction::types::{TransactionHash, TransactionNonce, UnsignedTransfer},
    wallet::Credential,
};

pub const ALICE_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const BOB_KEY: &str = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";
pub const CAROL_ADDRESS: &str = "0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC";
pub const DAVE_ADDRESS: &str = "0x90F79bf6EB2c4f870365E785982E1f101E93b906";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub from: EvmAddress,
    pub transfer: UnsignedTransfer,
}

/// In-memory node that records every submission instead of broadcasting it.
pub struct MockChainClient {
    connected: bool,
    chain_id: ChainId,
    fee_price: Option<GasPrice>,
    rejected_senders: HashSet<EvmAddress>,
    nonces: Mutex<HashMap<EvmAddress, u64>>,
    submissions: Mutex<Vec<Submission>>,
    fee_price_calls: AtomicUsize,
}

impl MockChainClient {
    pub fn with_gwei_price(gwei: u128) -> Self {
        MockChainClient {
            connected: true,
            chain_id: ChainId::default(),
            fee_price: Some(GasPrice::new(gwei * 1_000_000_000)),
            rejected_senders: HashSet::new(),
            nonces: Mutex::new(HashMap::new()),
            submissions: Mutex::new(Vec::new()),
            fee_price_calls: AtomicUsize::new(0),
        }
    }

    pub fn disconnected(mut self) -> Self {
        self.connected = false;
        self
    }

    pub fn on_chain(mut self, chain_id: u64) -> Self {
        self.chain_id = ChainId::new(chain_id);
        self
    }

    pub fn failing_fee_price(mut self) -> Self {
        self.fee_price = None;
        self
    }

    pub fn rejecting_sender(mut self, credential: &str) -> Self {
        let address = Credential::new(credential).address().unwrap();
        self.rejected_senders.insert(address);
        self
    }

    pub fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn fee_price_calls(&self) -> usize {
        self.fee_price_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChainClient for MockChainClient {
    async fn is_connected(&self) -> bool {
        self.connected
    }

    async fn chain_id(&self) -> Result<ChainId, ChainClientError> {
        Ok(self.chain_id)
    }

    async fn current_fee_price(&self) -> Result<GasPrice, ChainClientError> {
        self.fee_price_calls.fetch_add(1, Ordering::SeqCst);
        self.fee_price
            .ok_or_else(|| ChainClientError::InternalError("eth_gasPrice timed out".to_string()))
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
        let nonces = self.nonces.lock().unwrap();
        Ok(TransactionNonce::new(nonces.get(address).copied().unwrap_or_default()))
    }

    async fn sign_and_submit(
        &self,
        credential: &Credential,
        transfer: UnsignedTransfer,
    ) -> Result<TransactionHash, ChainClientError> {
        let from = self.derive_address(credential)?;
        if self.rejected_senders.contains(&from) {
            return Err(ChainClientError::InternalError(
                "insufficient funds for gas * price + value".to_string(),
            ));
        }

        *self.nonces.lock().unwrap().entry(from).or_default() += 1;

        let mut submissions = self.submissions.lock().unwrap();
        let hash = keccak256(U256::from(submissions.len()).to_be_bytes::<32>());
        submissions.push(Submission { from, transfer });

        Ok(TransactionHash::from_alloy_hash(&hash))
    }
}
