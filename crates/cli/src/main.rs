use std::{env, path::PathBuf, str::FromStr};

#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use clap::Parser;
use feegate_core::{load_env_from_project_path, setup_info_logger};

use crate::{
    cli_interface::{Cli, Commands},
    commands::{check, gas, init, run},
    console::print_error_message,
    error::CliError,
};

mod cli_interface;
mod commands;
mod console;
mod error;
mod project_location;

fn resolve_path(override_path: &Option<String>) -> Result<PathBuf, String> {
    let path = match override_path {
        Some(path) => {
            PathBuf::from_str(path).map_err(|_| format!("Invalid path provided: '{}'", path))?
        }
        None => env::current_dir().map_err(|_| "Failed to get current directory.".to_string())?,
    };

    path.canonicalize().map_err(|e| format!("Failed to resolve path '{}': {}", path.display(), e))
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    setup_info_logger();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => {
            let project_path = match path {
                Some(path) => PathBuf::from(path),
                None => env::current_dir().map_err(|e| e.to_string())?,
            };
            init::handle_init(&project_path).inspect_err(|e| print_error_message(&e.to_string()))?;
        }
        Commands::Run(args) => {
            let resolved_path = resolve_path(&args.path).inspect_err(|e| print_error_message(e))?;
            load_env_from_project_path(&resolved_path);
            run::handle_run(&resolved_path, args)
                .await
                .inspect_err(|e| print_error_message(&e.to_string()))?;
        }
        Commands::Gas { path } => {
            let resolved_path = resolve_path(path).inspect_err(|e| print_error_message(e))?;
            load_env_from_project_path(&resolved_path);
            gas::handle_gas(&resolved_path)
                .await
                .inspect_err(|e| print_error_message(&e.to_string()))?;
        }
        Commands::Check(args) => {
            let resolved_path = resolve_path(&args.path).inspect_err(|e| print_error_message(e))?;
            load_env_from_project_path(&resolved_path);
            check::handle_check(&resolved_path, args)
                .inspect_err(|e| print_error_message(&e.to_string()))?;
        }
    }

    Ok(())
}
