use std::fmt::Display;

use alloy::primitives::TxHash;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TransactionHash(TxHash);

impl TransactionHash {
    pub fn from_alloy_hash(hash: &TxHash) -> Self {
        Self(*hash)
    }
}

impl Display for TransactionHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
