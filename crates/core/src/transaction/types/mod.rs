mod transaction_hash;
pub use transaction_hash::TransactionHash;

mod transaction_nonce;
pub use transaction_nonce::TransactionNonce;

mod transfer;
pub use transfer::{TransferOutcome, TransferRequest, UnsignedTransfer};
