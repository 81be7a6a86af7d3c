use std::fmt::Display;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TransactionNonce(u64);

impl TransactionNonce {
    pub fn new(nonce: u64) -> Self {
        TransactionNonce(nonce)
    }

    pub fn into_inner(self) -> u64 {
        self.0
    }
}

impl Display for TransactionNonce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
