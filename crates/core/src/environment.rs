use std::path::Path;

use dotenvy::{dotenv, from_path};

/// Loads a `.env` file from the project directory, falling back to the current working
/// directory. Values already present in the process environment win.
pub fn load_env_from_project_path(project_path: &Path) {
    if from_path(project_path.join(".env")).is_err() {
        dotenv().ok();
    }
}
