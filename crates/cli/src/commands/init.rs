use std::{fs, path::Path};

use feegate_core::{CONFIG_FILE_NAME, SetupConfig, write_file_if_missing};

use crate::{commands::error::InitError, console::print_success_message};

const PRIVATE_KEYS_TEMPLATE: &str = r#"# One private key per line, hex with or without 0x.
# Line N sends to line N of to_addresses.txt. Blank lines and lines starting with # are ignored.
"#;

const TO_ADDRESSES_TEMPLATE: &str = r#"# One destination address per line.
# Line N receives from line N of private_keys.txt. Blank lines and lines starting with # are ignored.
"#;

const GITIGNORE_TEMPLATE: &str = r#".env
private_keys.txt
"#;

pub fn handle_init(path: &Path) -> Result<(), InitError> {
    let config_path = path.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        return Err(InitError::AlreadyInitialized(config_path.display().to_string()));
    }

    fs::create_dir_all(path)?;

    let setup_config = SetupConfig::default();
    fs::write(&config_path, serde_yaml::to_string(&setup_config)?)?;

    write_file_if_missing(&path.join(&setup_config.inputs.private_keys), PRIVATE_KEYS_TEMPLATE)?;
    write_file_if_missing(&path.join(&setup_config.inputs.to_addresses), TO_ADDRESSES_TEMPLATE)?;
    write_file_if_missing(&path.join(".gitignore"), GITIGNORE_TEMPLATE)?;

    print_success_message(&format!(
        "Project initialized in {}. Add your keys and addresses, then run `feegate check`.",
        path.display()
    ));
    Ok(())
}
