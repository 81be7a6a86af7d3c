use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Send small native-currency transfers while the network gas price is low")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a template feegate.yaml, private_keys.txt and to_addresses.txt
    Init {
        /// optional - The project directory, default will be where the command is run.
        #[clap(long, short)]
        path: Option<String>,
    },
    /// Run the gas-gated transfer cycles
    Run(InputArgs),
    /// Show the current gas price and whether a cycle would send right now
    Gas {
        #[clap(long, short)]
        path: Option<String>,
    },
    /// Validate the input files offline and print the wallet pairing
    Check(InputArgs),
}

#[derive(Args)]
pub struct InputArgs {
    /// optional - The project directory holding feegate.yaml, default will be where the command is run.
    #[clap(long, short)]
    pub path: Option<String>,

    /// optional - Overrides `inputs.private_keys` from feegate.yaml, relative to the current directory
    #[clap(long)]
    pub private_keys: Option<PathBuf>,

    /// optional - Overrides `inputs.to_addresses` from feegate.yaml, relative to the current directory
    #[clap(long)]
    pub to_addresses: Option<PathBuf>,
}
