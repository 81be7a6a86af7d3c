use std::fmt::{Debug, Formatter};

use alloy::signers::local::PrivateKeySigner;

use crate::{shared::common_types::EvmAddress, wallet::WalletError};

/// A secret that authorizes spending from one source account.
///
/// The secret never shows up in `Debug` output so it can't leak through logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Credential(secret.into())
    }

    /// Builds a local signer from the hex private key, with or without `0x` prefix.
    pub fn signer(&self) -> Result<PrivateKeySigner, WalletError> {
        self.0
            .parse::<PrivateKeySigner>()
            .map_err(|e| WalletError::PrivateKeyError(format!("Invalid private key: {}", e)))
    }

    /// The public address this credential spends from.
    pub fn address(&self) -> Result<EvmAddress, WalletError> {
        Ok(EvmAddress::new(self.signer()?.address()))
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl From<String> for Credential {
    fn from(secret: String) -> Self {
        Credential(secret)
    }
}
