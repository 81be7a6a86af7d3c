use std::{
    env, fmt,
    fs::File,
    io::Read,
    path::{Path, PathBuf},
    time::Duration,
};

use alloy::{
    primitives::{
        utils::{parse_units, ParseUnits},
        U256,
    },
    transports::http::reqwest::Url,
};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use thiserror::Error;

use crate::{
    config::{BatchConfig, DEFAULT_ENDPOINT},
    feegate_error,
    gas::{GasLimit, GasPrice},
    network::ChainId,
    shared::utils::{format_units_trimmed, ETH_DECIMALS, GWEI_DECIMALS},
    transaction::{AmountRange, AmountRangeError},
};

pub const CONFIG_FILE_NAME: &str = "feegate.yaml";

static ENV_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder regex is valid"));

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CyclesConfig {
    #[serde(default = "default_cycle_count")]
    pub count: u32,
    #[serde(default = "default_cycle_delay_seconds")]
    pub delay_seconds: u64,
}

fn default_cycle_count() -> u32 {
    5
}

fn default_cycle_delay_seconds() -> u64 {
    60
}

impl Default for CyclesConfig {
    fn default() -> Self {
        CyclesConfig { count: default_cycle_count(), delay_seconds: default_cycle_delay_seconds() }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TransfersConfig {
    #[serde(default = "default_transfers_per_pair")]
    pub per_pair: u32,
    #[serde(default = "default_transfer_delay_seconds")]
    pub delay_seconds: u64,
    #[serde(
        default = "default_min_send_eth",
        deserialize_with = "deserialize_eth_amount",
        serialize_with = "serialize_eth_amount"
    )]
    pub min_send_eth: u128,
    #[serde(
        default = "default_max_send_eth",
        deserialize_with = "deserialize_eth_amount",
        serialize_with = "serialize_eth_amount"
    )]
    pub max_send_eth: u128,
    #[serde(default)]
    pub gas_limit: GasLimit,
}

fn default_transfers_per_pair() -> u32 {
    1
}

fn default_transfer_delay_seconds() -> u64 {
    20
}

fn default_min_send_eth() -> u128 {
    100_000_000_000_000
}

fn default_max_send_eth() -> u128 {
    500_000_000_000_000
}

impl Default for TransfersConfig {
    fn default() -> Self {
        TransfersConfig {
            per_pair: default_transfers_per_pair(),
            delay_seconds: default_transfer_delay_seconds(),
            min_send_eth: default_min_send_eth(),
            max_send_eth: default_max_send_eth(),
            gas_limit: GasLimit::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct InputsConfig {
    #[serde(default = "default_private_keys_path")]
    pub private_keys: PathBuf,
    #[serde(default = "default_to_addresses_path")]
    pub to_addresses: PathBuf,
}

fn default_private_keys_path() -> PathBuf {
    PathBuf::from("private_keys.txt")
}

fn default_to_addresses_path() -> PathBuf {
    PathBuf::from("to_addresses.txt")
}

impl Default for InputsConfig {
    fn default() -> Self {
        InputsConfig {
            private_keys: default_private_keys_path(),
            to_addresses: default_to_addresses_path(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SetupConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub chain_id: ChainId,
    #[serde(
        default = "default_fee_threshold_gwei",
        deserialize_with = "deserialize_gwei_amount",
        serialize_with = "serialize_gwei_amount"
    )]
    pub fee_threshold_gwei: u128,
    #[serde(default)]
    pub cycles: CyclesConfig,
    #[serde(default)]
    pub transfers: TransfersConfig,
    #[serde(default)]
    pub inputs: InputsConfig,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_fee_threshold_gwei() -> u128 {
    5_000_000_000
}

impl Default for SetupConfig {
    fn default() -> Self {
        SetupConfig {
            endpoint: default_endpoint(),
            chain_id: ChainId::default(),
            fee_threshold_gwei: default_fee_threshold_gwei(),
            cycles: CyclesConfig::default(),
            transfers: TransfersConfig::default(),
            inputs: InputsConfig::default(),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("endpoint {0} is not a valid url: {1}")]
    InvalidEndpoint(String, String),

    #[error("cycles.count must be at least 1")]
    NoCycles,

    #[error("transfers.per_pair must be at least 1")]
    NoTransfersPerPair,

    #[error("fee_threshold_gwei must be greater than zero")]
    ZeroFeeThreshold,

    #[error("transfers.gas_limit must be greater than zero")]
    ZeroGasLimit,

    #[error("{0}")]
    InvalidAmountRange(#[from] AmountRangeError),
}

impl SetupConfig {
    /// Validates the file values and turns them into the immutable run configuration.
    pub fn batch_config(&self) -> Result<BatchConfig, ConfigError> {
        Url::parse(&self.endpoint)
            .map_err(|e| ConfigError::InvalidEndpoint(self.endpoint.clone(), e.to_string()))?;

        if self.cycles.count == 0 {
            return Err(ConfigError::NoCycles);
        }
        if self.transfers.per_pair == 0 {
            return Err(ConfigError::NoTransfersPerPair);
        }
        if self.fee_threshold_gwei == 0 {
            return Err(ConfigError::ZeroFeeThreshold);
        }
        if self.transfers.gas_limit.into_inner() == 0 {
            return Err(ConfigError::ZeroGasLimit);
        }

        let amount_range =
            AmountRange::new(self.transfers.min_send_eth, self.transfers.max_send_eth)?;

        Ok(BatchConfig {
            endpoint: self.endpoint.clone(),
            chain_id: self.chain_id,
            cycle_count: self.cycles.count,
            cycle_delay: Duration::from_secs(self.cycles.delay_seconds),
            transfers_per_pair: self.transfers.per_pair,
            transfer_delay: Duration::from_secs(self.transfers.delay_seconds),
            fee_threshold: GasPrice::new(self.fee_threshold_gwei),
            amount_range,
            gas_limit: self.transfers.gas_limit,
        })
    }
}

/// Accepts a decimal amount written either as a YAML string (`"0.0001"`) or a bare
/// number (`0.0001`) and converts it to an exact integer of the smallest unit.
struct UnitsVisitor {
    decimals: u8,
}

impl UnitsVisitor {
    fn parse<E>(&self, value: &str) -> Result<u128, E>
    where
        E: de::Error,
    {
        let trimmed = value.trim();
        if trimmed.starts_with('-') {
            return Err(de::Error::invalid_value(de::Unexpected::Str(value), &"a positive amount"));
        }

        let parsed: U256 = parse_units(trimmed, self.decimals)
            .map(ParseUnits::into)
            .map_err(|e| de::Error::custom(format!("invalid amount {}: {}", value, e)))?;

        u128::try_from(parsed).map_err(|_| de::Error::custom(format!("amount {} is too large", value)))
    }
}

impl Visitor<'_> for UnitsVisitor {
    type Value = u128;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal amount as a string or number")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.parse(value)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.parse(&value.to_string())
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.parse(&value.to_string())
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        self.parse(&value.to_string())
    }
}

fn deserialize_eth_amount<'de, D>(deserializer: D) -> Result<u128, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(UnitsVisitor { decimals: ETH_DECIMALS })
}

fn serialize_eth_amount<S>(amount: &u128, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_units_trimmed(U256::from(*amount), ETH_DECIMALS))
}

fn deserialize_gwei_amount<'de, D>(deserializer: D) -> Result<u128, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(UnitsVisitor { decimals: GWEI_DECIMALS })
}

fn serialize_gwei_amount<S>(amount: &u128, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_units_trimmed(U256::from(*amount), GWEI_DECIMALS))
}

#[derive(Error, Debug)]
pub enum ReadYamlError {
    #[error("Can not find yaml at {0}")]
    CanNotFindYaml(String),

    #[error("Can not read yaml: {0}")]
    CanNotReadYaml(String),

    #[error("Setup config is invalid yaml and does not match the struct - {0}")]
    SetupConfigInvalidYaml(String),

    #[error("Environment variable {0} not found")]
    EnvironmentVariableNotFound(String),
}

/// Replaces every `${NAME}` with the value of the environment variable `NAME`.
fn substitute_env_variables(contents: &str) -> Result<String, ReadYamlError> {
    if let Some(missing) = ENV_PLACEHOLDER
        .captures_iter(contents)
        .map(|caps| caps[1].to_string())
        .find(|name| env::var(name).is_err())
    {
        feegate_error!("Environment variable {} not found", missing);
        return Err(ReadYamlError::EnvironmentVariableNotFound(missing));
    }

    let result = ENV_PLACEHOLDER
        .replace_all(contents, |caps: &Captures| env::var(&caps[1]).unwrap_or_default());
    Ok(result.into_owned())
}

pub fn parse(contents: &str, raw_yaml: bool) -> Result<SetupConfig, ReadYamlError> {
    let substituted_contents =
        if raw_yaml { contents.to_string() } else { substitute_env_variables(contents)? };

    serde_yaml::from_str(&substituted_contents)
        .map_err(|e| ReadYamlError::SetupConfigInvalidYaml(e.to_string()))
}

/// Reads and parses a feegate configuration file.
pub fn read(file_path: &Path, raw_yaml: bool) -> Result<SetupConfig, ReadYamlError> {
    let mut file = File::open(file_path)
        .map_err(|_| ReadYamlError::CanNotFindYaml(file_path.display().to_string()))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| ReadYamlError::CanNotReadYaml(e.to_string()))?;

    parse(&contents, raw_yaml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = parse("{}", true).unwrap();

        assert_eq!(config, SetupConfig::default());
        assert_eq!(config.batch_config().unwrap(), BatchConfig::default());
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
endpoint: http://localhost:8545
chain_id: 31337
fee_threshold_gwei: "2.5"
cycles:
  count: 3
  delay_seconds: 10
transfers:
  per_pair: 2
  delay_seconds: 1
  min_send_eth: 0.001
  max_send_eth: "0.002"
  gas_limit: 25000
inputs:
  private_keys: keys/hot.txt
  to_addresses: keys/cold.txt
"#;

        let batch = parse(yaml, true).unwrap().batch_config().unwrap();

        assert_eq!(batch.endpoint, "http://localhost:8545");
        assert_eq!(batch.chain_id, ChainId::new(31337));
        assert_eq!(batch.fee_threshold, GasPrice::new(2_500_000_000));
        assert_eq!(batch.cycle_count, 3);
        assert_eq!(batch.cycle_delay, Duration::from_secs(10));
        assert_eq!(batch.transfers_per_pair, 2);
        assert_eq!(batch.transfer_delay, Duration::from_secs(1));
        assert_eq!(batch.amount_range.min(), U256::from(1_000_000_000_000_000u64));
        assert_eq!(batch.amount_range.max(), U256::from(2_000_000_000_000_000u64));
        assert_eq!(batch.gas_limit, GasLimit::new(25_000));
    }

    #[test]
    fn test_integer_threshold() {
        let config = parse("fee_threshold_gwei: 5", true).unwrap();
        assert_eq!(config.fee_threshold_gwei, 5_000_000_000);

        let config = parse("fee_threshold_gwei: \" 0.25 \"", true).unwrap();
        assert_eq!(config.fee_threshold_gwei, 250_000_000);
    }

    #[test]
    fn test_rejects_malformed_threshold() {
        assert!(parse("fee_threshold_gwei: \"-1\"", true).is_err());
        assert!(parse("fee_threshold_gwei: five", true).is_err());
        assert!(parse("fee_threshold_gwei: \"\"", true).is_err());
    }

    #[test]
    fn test_rejects_negative_amount() {
        assert!(parse("transfers:\n  min_send_eth: \"-1\"", true).is_err());
    }

    #[test]
    fn test_validation_errors() {
        let mut config = SetupConfig::default();
        config.cycles.count = 0;
        assert_eq!(config.batch_config(), Err(ConfigError::NoCycles));

        let mut config = SetupConfig::default();
        config.transfers.per_pair = 0;
        assert_eq!(config.batch_config(), Err(ConfigError::NoTransfersPerPair));

        let mut config = SetupConfig::default();
        config.fee_threshold_gwei = 0;
        assert_eq!(config.batch_config(), Err(ConfigError::ZeroFeeThreshold));

        let mut config = SetupConfig::default();
        config.transfers.min_send_eth = config.transfers.max_send_eth + 1;
        assert!(matches!(config.batch_config(), Err(ConfigError::InvalidAmountRange(_))));

        let mut config = SetupConfig::default();
        config.endpoint = "not a url".to_string();
        assert!(matches!(config.batch_config(), Err(ConfigError::InvalidEndpoint(_, _))));
    }

    #[test]
    fn test_env_substitution() {
        env::set_var("FEEGATE_TEST_RPC_URL", "http://127.0.0.1:8545");

        let config = parse("endpoint: ${FEEGATE_TEST_RPC_URL}", false).unwrap();
        assert_eq!(config.endpoint, "http://127.0.0.1:8545");

        let raw = parse("endpoint: ${FEEGATE_TEST_RPC_URL}", true).unwrap();
        assert_eq!(raw.endpoint, "${FEEGATE_TEST_RPC_URL}");
    }

    #[test]
    fn test_missing_env_variable() {
        let result = parse("endpoint: ${FEEGATE_TEST_DOES_NOT_EXIST}", false);

        assert!(matches!(
            result,
            Err(ReadYamlError::EnvironmentVariableNotFound(name)) if name == "FEEGATE_TEST_DOES_NOT_EXIST"
        ));
    }

    #[test]
    fn test_serialized_defaults_read_back() {
        let yaml = serde_yaml::to_string(&SetupConfig::default()).unwrap();

        assert!(yaml.contains("0.0001"));
        assert_eq!(parse(&yaml, true).unwrap(), SetupConfig::default());
    }
}
