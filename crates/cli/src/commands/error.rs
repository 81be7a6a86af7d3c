use thiserror::Error;

/// Errors that can occur when locating or reading the project
#[derive(Error, Debug)]
pub enum ProjectLocationError {
    #[error("Project configuration error: {0}")]
    ProjectConfig(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] feegate_core::ConfigError),
}

/// Errors that can occur during a batch run
#[derive(Error, Debug)]
pub enum RunError {
    #[error("{0}")]
    ProjectLocation(#[from] ProjectLocationError),

    #[error("{0}")]
    Inputs(#[from] feegate_core::LoadInputError),

    #[error("{0}")]
    Start(#[from] feegate_core::StartError),
}

/// Errors that can occur while reading the gas price
#[derive(Error, Debug)]
pub enum GasError {
    #[error("{0}")]
    ProjectLocation(#[from] ProjectLocationError),

    #[error("{0}")]
    Start(#[from] feegate_core::StartError),

    #[error("Could not read the gas price: {0}")]
    FeeQuery(#[from] feegate_core::ChainClientError),
}

/// Errors that can occur while checking the input files
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("{0}")]
    ProjectLocation(#[from] ProjectLocationError),

    #[error("{0}")]
    Inputs(#[from] feegate_core::LoadInputError),

    #[error("{invalid} invalid entries found in the input files")]
    InvalidEntries { invalid: usize },
}

/// Errors that can occur during project initialization
#[derive(Error, Debug)]
pub enum InitError {
    #[error("{0} already exists, refusing to overwrite it")]
    AlreadyInitialized(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Write(#[from] feegate_core::WriteFileError),
}
