use thiserror::Error;

use crate::commands::error::{CheckError, GasError, InitError, RunError};

/// Top-level CLI error that composes all command errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Run error: {0}")]
    Run(#[from] RunError),

    #[error("Gas error: {0}")]
    Gas(#[from] GasError),

    #[error("Check error: {0}")]
    Check(#[from] CheckError),

    #[error("Initialization error: {0}")]
    Init(#[from] InitError),

    #[error("Invalid path: {0}")]
    Path(String),
}

impl From<String> for CliError {
    fn from(err: String) -> Self {
        CliError::Path(err)
    }
}
