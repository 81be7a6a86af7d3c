use alloy::primitives::U256;
use rand::Rng;
use thiserror::Error;

use crate::shared::utils::format_eth;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AmountRangeError {
    #[error("min send amount {min} ETH is greater than max send amount {max} ETH")]
    MinAboveMax { min: String, max: String },

    #[error("max send amount must be greater than zero")]
    Zero,
}

/// Inclusive `[min, max]` bounds for a single send, in wei.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountRange {
    min_wei: u128,
    max_wei: u128,
}

impl AmountRange {
    pub fn new(min_wei: u128, max_wei: u128) -> Result<Self, AmountRangeError> {
        if min_wei > max_wei {
            return Err(AmountRangeError::MinAboveMax {
                min: format_eth(U256::from(min_wei)),
                max: format_eth(U256::from(max_wei)),
            });
        }
        if max_wei == 0 {
            return Err(AmountRangeError::Zero);
        }

        Ok(AmountRange { min_wei, max_wei })
    }

    pub fn min(&self) -> U256 {
        U256::from(self.min_wei)
    }

    pub fn max(&self) -> U256 {
        U256::from(self.max_wei)
    }

    /// Draws one amount uniformly from the inclusive range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> U256 {
        U256::from(rng.gen_range(self.min_wei..=self.max_wei))
    }
}

impl Default for AmountRange {
    fn default() -> Self {
        // 0.0001 ETH to 0.0005 ETH
        AmountRange { min_wei: 100_000_000_000_000, max_wei: 500_000_000_000_000 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn test_samples_stay_in_bounds() {
        let range = AmountRange::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..10_000 {
            let amount = range.sample(&mut rng);
            assert!(amount >= range.min() && amount <= range.max());
        }
    }

    #[test]
    fn test_samples_vary_between_draws() {
        let range = AmountRange::default();
        let mut rng = StdRng::seed_from_u64(42);

        let draws: HashSet<U256> = (0..100).map(|_| range.sample(&mut rng)).collect();
        assert!(draws.len() > 90);
    }

    #[test]
    fn test_degenerate_range_is_exact() {
        let range = AmountRange::new(1_000, 1_000).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(range.sample(&mut rng), U256::from(1_000u64));
    }

    #[test]
    fn test_rejects_inverted_or_zero() {
        assert!(matches!(AmountRange::new(10, 5), Err(AmountRangeError::MinAboveMax { .. })));
        assert_eq!(AmountRange::new(0, 0), Err(AmountRangeError::Zero));
    }
}
