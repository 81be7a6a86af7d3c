mod credential;
pub use credential::Credential;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalletError {
    #[error("{0}")]
    PrivateKeyError(String),

    #[error("Signing failed: {0}")]
    SignerError(#[from] alloy::signers::Error),
}
