pub mod batch;
pub use batch::{CycleScheduler, RunSummary, SchedulerError};
mod config;
pub use config::{BatchConfig, DEFAULT_ENDPOINT};
mod environment;
pub use environment::load_env_from_project_path;
mod file;
pub use file::{write_file_if_missing, WriteFileError};
pub mod gas;
pub mod input;
pub use input::{load_batch_inputs, BatchInputs, LoadInputError};
mod logger;
pub use logger::{setup_info_logger, setup_logger};
pub mod network;
mod provider;
pub use provider::{
    create_client, create_retry_client, ChainClient, ChainClientError, EvmProvider, FeegateProvider,
    RetryClientError,
};
mod shared;
pub use shared::{common_types, utils};
mod startup;
pub use startup::{check_connection, connect, run_batch, start, StartError};
pub mod transaction;
mod wallet;
pub use wallet::{Credential, WalletError};
mod yaml;
pub use yaml::{
    parse, read, ConfigError, CyclesConfig, InputsConfig, ReadYamlError, SetupConfig,
    TransfersConfig, CONFIG_FILE_NAME,
};

pub use tracing::{error as feegate_error, info as feegate_info};
