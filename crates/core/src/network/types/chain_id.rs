use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// EIP-155 chain id signed into every transfer and checked against the node at startup.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ChainId(u64);

impl Default for ChainId {
    fn default() -> Self {
        ChainId(1)
    }
}

impl ChainId {
    pub fn new(id: u64) -> Self {
        ChainId(id)
    }

    pub fn u64(&self) -> u64 {
        self.0
    }
}

impl Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
