use std::{
    env,
    path::{Path, PathBuf},
};

use feegate_core::{CONFIG_FILE_NAME, SetupConfig, read};

use crate::{cli_interface::InputArgs, commands::error::ProjectLocationError, console::print_warn_message};

#[derive(Debug, Clone)]
pub struct ProjectLocation {
    project_dir: PathBuf,
    invocation_dir: PathBuf,
}

impl ProjectLocation {
    pub fn new(project_dir: PathBuf) -> Self {
        let invocation_dir = env::current_dir().unwrap_or_else(|_| project_dir.clone());
        Self { project_dir, invocation_dir }
    }

    pub fn config_path(&self) -> PathBuf {
        self.project_dir.join(CONFIG_FILE_NAME)
    }

    /// Reads feegate.yaml, or falls back to the built-in defaults when the project has none.
    pub fn setup_config(&self) -> Result<SetupConfig, ProjectLocationError> {
        let config_path = self.config_path();
        if !config_path.exists() {
            print_warn_message(&format!(
                "No {} found in {}, using the default settings",
                CONFIG_FILE_NAME,
                self.project_dir.display()
            ));
            return Ok(SetupConfig::default());
        }

        read(&config_path, false).map_err(|e| {
            ProjectLocationError::ProjectConfig(format!("Failed to read config: {}", e))
        })
    }

    fn resolve_from(base: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() { path.to_path_buf() } else { base.join(path) }
    }

    /// The private key and destination files to load.
    ///
    /// Command line overrides are relative to the shell's cwd, paths from feegate.yaml
    /// to the project directory.
    pub fn input_paths(&self, setup_config: &SetupConfig, args: &InputArgs) -> (PathBuf, PathBuf) {
        let pick = |arg: &Option<PathBuf>, configured: &Path| match arg {
            Some(path) => Self::resolve_from(&self.invocation_dir, path),
            None => Self::resolve_from(&self.project_dir, configured),
        };

        (
            pick(&args.private_keys, &setup_config.inputs.private_keys),
            pick(&args.to_addresses, &setup_config.inputs.to_addresses),
        )
    }
}
