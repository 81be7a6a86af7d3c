use alloy::primitives::U256;

use crate::{
    gas::{GasLimit, GasPrice},
    network::ChainId,
    shared::common_types::EvmAddress,
    transaction::types::{TransactionHash, TransactionNonce},
    wallet::Credential,
};

/// One native-currency send, built fresh for every attempt and dropped after it.
#[derive(Debug, Clone, Copy)]
pub struct TransferRequest<'a> {
    pub credential: &'a Credential,
    pub destination: &'a str,
    /// Amount in wei.
    pub amount: U256,
}

impl<'a> TransferRequest<'a> {
    pub fn new(credential: &'a Credential, destination: &'a str, amount: U256) -> Self {
        TransferRequest { credential, destination, amount }
    }
}

/// A fully priced legacy transfer waiting to be signed by the source credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsignedTransfer {
    pub to: EvmAddress,
    pub value: U256,
    pub nonce: TransactionNonce,
    pub gas_price: GasPrice,
    pub gas_limit: GasLimit,
    pub chain_id: ChainId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    Sent { hash: TransactionHash, amount: U256 },
    Failed { reason: String, amount: U256 },
}

impl TransferOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, TransferOutcome::Sent { .. })
    }

    pub fn amount(&self) -> U256 {
        match self {
            TransferOutcome::Sent { amount, .. } | TransferOutcome::Failed { amount, .. } => *amount,
        }
    }
}
