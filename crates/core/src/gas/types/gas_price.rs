use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::shared::utils::format_gwei;

/// A gas price in wei.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GasPrice(u128);

impl GasPrice {
    pub fn new(gas_price: u128) -> Self {
        GasPrice(gas_price)
    }

    pub fn into_u128(self) -> u128 {
        self.0
    }

    /// The price in gwei, two decimals.
    pub fn gwei(&self) -> String {
        format_gwei(self.0)
    }
}

impl Display for GasPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Gwei", self.gwei())
    }
}
