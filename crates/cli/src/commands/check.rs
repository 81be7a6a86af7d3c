use std::path::Path;

use feegate_core::{
    BatchInputs, common_types::EvmAddress, load_batch_inputs, utils::format_gwei,
};

use crate::{
    cli_interface::InputArgs,
    commands::error::{CheckError, ProjectLocationError},
    console::{print_error_message, print_success_message, print_table, print_warn_message},
    project_location::ProjectLocation,
};

/// One row of the pairing table. `None` fields failed to parse.
#[derive(Debug, PartialEq, Eq)]
struct PairingRow {
    index: usize,
    source: Option<String>,
    destination: Option<String>,
}

impl PairingRow {
    fn is_valid(&self) -> bool {
        self.source.is_some() && self.destination.is_some()
    }
}

fn pairing_rows(inputs: &BatchInputs) -> Vec<PairingRow> {
    inputs
        .credentials()
        .iter()
        .zip(inputs.destinations())
        .enumerate()
        .map(|(index, (credential, destination))| PairingRow {
            index,
            source: credential.address().ok().map(|address| address.hex()),
            destination: EvmAddress::parse_strict(destination).ok().map(|address| address.hex()),
        })
        .collect()
}

pub fn handle_check(project_path: &Path, args: &InputArgs) -> Result<(), CheckError> {
    let project_location = ProjectLocation::new(project_path.to_path_buf());
    let setup_config = project_location.setup_config()?;
    let batch_config =
        setup_config.batch_config().map_err(ProjectLocationError::InvalidConfig)?;

    let (private_keys_path, to_addresses_path) = project_location.input_paths(&setup_config, args);
    let inputs = load_batch_inputs(&private_keys_path, &to_addresses_path)?;

    let rows = pairing_rows(&inputs);
    let invalid = rows.iter().filter(|row| !row.is_valid()).count();

    print_table(
        vec!["#", "From", "To"],
        rows.iter()
            .map(|row| {
                vec![
                    row.index.to_string(),
                    row.source.clone().unwrap_or_else(|| "<invalid private key>".to_string()),
                    row.destination.clone().unwrap_or_else(|| "<invalid address>".to_string()),
                ]
            })
            .collect(),
        Some(&format!(
            "{} pairs, {} cycles of {} transfers per pair, sending below {} Gwei",
            rows.len(),
            batch_config.cycle_count,
            batch_config.transfers_per_pair,
            format_gwei(batch_config.fee_threshold.into_u128())
        )),
        None,
    );

    if inputs.unpaired_len() > 0 {
        print_warn_message(&format!(
            "{} private keys and {} addresses loaded, {} entries will not be processed",
            inputs.credentials().len(),
            inputs.destinations().len(),
            inputs.unpaired_len()
        ));
    }

    if invalid > 0 {
        print_error_message(&format!("{} pairs have an invalid key or address", invalid));
        return Err(CheckError::InvalidEntries { invalid });
    }

    print_success_message("All pairs are valid");
    Ok(())
}
