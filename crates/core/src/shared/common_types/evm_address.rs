use std::{error::Error, fmt::Display, str::FromStr};

use alloy::primitives::Address;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EvmAddress(Address);

impl EvmAddress {
    /// Returns the EIP-55 checksummed representation of the address.
    pub fn hex(&self) -> String {
        self.0.to_checksum(None)
    }

    pub fn new(address: Address) -> Self {
        EvmAddress(address)
    }

    pub fn into_address(self) -> Address {
        self.0
    }

    /// Parses a recipient address the way wallets validate user input.
    ///
    /// Accepts 40 hex characters with an optional `0x` prefix. Single-case input
    /// (all lowercase or all uppercase) is taken as-is; mixed-case input must carry a
    /// valid EIP-55 checksum, so a single mistyped letter is caught before any funds move.
    ///
    /// # Arguments
    /// * `value` - The address string, already trimmed
    ///
    /// # Returns
    /// * `Ok(EvmAddress)` - The parsed address
    /// * `Err(ParseEvmAddressError)` - If the length, characters or checksum are wrong
    pub fn parse_strict(value: &str) -> Result<Self, ParseEvmAddressError> {
        let hex_part = value
            .strip_prefix("0x")
            .or_else(|| value.strip_prefix("0X"))
            .unwrap_or(value);

        if hex_part.len() != 40 || !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseEvmAddressError(format!(
                "{} is not a 20-byte hex string",
                value
            )));
        }

        let has_lower = hex_part.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = hex_part.chars().any(|c| c.is_ascii_uppercase());

        let prefixed = format!("0x{}", hex_part);
        if has_lower && has_upper {
            Address::parse_checksummed(&prefixed, None)
                .map(EvmAddress)
                .map_err(|e| ParseEvmAddressError(format!("{} has a bad checksum: {}", value, e)))
        } else {
            Address::from_str(&prefixed)
                .map(EvmAddress)
                .map_err(|e| ParseEvmAddressError(e.to_string()))
        }
    }
}

impl Display for EvmAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hex())
    }
}

#[derive(Debug)]
pub struct ParseEvmAddressError(String);

impl Display for ParseEvmAddressError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid EVM address: {}", self.0)
    }
}

impl Error for ParseEvmAddressError {}

impl FromStr for EvmAddress {
    type Err = ParseEvmAddressError;

    fn from_str(param: &str) -> Result<Self, Self::Err> {
        EvmAddress::parse_strict(param)
    }
}

impl From<EvmAddress> for Address {
    fn from(address: EvmAddress) -> Self {
        address.0
    }
}

impl From<Address> for EvmAddress {
    fn from(address: Address) -> Self {
        EvmAddress(address)
    }
}
