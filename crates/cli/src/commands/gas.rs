use std::path::Path;

use feegate_core::{
    connect,
    gas::{FeeGate, GateDecision},
};

use crate::{
    commands::error::{GasError, ProjectLocationError},
    console::{print_success_message, print_table, print_warn_message},
    project_location::ProjectLocation,
};

pub async fn handle_gas(project_path: &Path) -> Result<(), GasError> {
    let project_location = ProjectLocation::new(project_path.to_path_buf());
    let batch_config = project_location
        .setup_config()?
        .batch_config()
        .map_err(ProjectLocationError::InvalidConfig)?;

    let client = connect(&batch_config).await?;
    let reading = FeeGate::new(client, batch_config.fee_threshold).evaluate().await?;

    print_table(
        vec!["Endpoint", "Chain", "Gas price", "Threshold"],
        vec![vec![
            batch_config.endpoint.clone(),
            batch_config.chain_id.to_string(),
            reading.price.to_string(),
            reading.threshold.to_string(),
        ]],
        None,
        None,
    );

    match reading.decision {
        GateDecision::Proceed => {
            print_success_message("Gas price is below the threshold, a cycle would send now")
        }
        GateDecision::Skip => {
            print_warn_message("Gas price is at or above the threshold, a cycle would skip now")
        }
    }

    Ok(())
}
