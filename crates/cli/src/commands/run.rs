use std::path::Path;

use feegate_core::{feegate_info, load_batch_inputs, start};

use crate::{
    cli_interface::InputArgs,
    commands::error::{ProjectLocationError, RunError},
    console::print_run_summary,
    project_location::ProjectLocation,
};

pub async fn handle_run(project_path: &Path, args: &InputArgs) -> Result<(), RunError> {
    feegate_info!("Loading from path {:?}", project_path);
    let project_location = ProjectLocation::new(project_path.to_path_buf());

    let setup_config = project_location.setup_config()?;
    let batch_config =
        setup_config.batch_config().map_err(ProjectLocationError::InvalidConfig)?;

    let (private_keys_path, to_addresses_path) = project_location.input_paths(&setup_config, args);
    let inputs = load_batch_inputs(&private_keys_path, &to_addresses_path)?;

    let summary = start(batch_config, &inputs).await?;
    print_run_summary(&summary);

    Ok(())
}
