use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GasLimit(u64);

impl GasLimit {
    /// Gas consumed by a plain value transfer to an externally owned account.
    pub const NATIVE_TRANSFER: GasLimit = GasLimit(21_000);

    pub fn new(gas_limit: u64) -> Self {
        GasLimit(gas_limit)
    }

    pub fn into_inner(self) -> u64 {
        self.0
    }
}

impl Default for GasLimit {
    fn default() -> Self {
        GasLimit::NATIVE_TRANSFER
    }
}

impl Display for GasLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
