use std::{
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{input::BatchInputs, wallet::Credential};

pub const COMMENT_MARKER: char = '#';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    PrivateKeys,
    ToAddresses,
}

impl Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::PrivateKeys => write!(f, "private key"),
            InputKind::ToAddresses => write!(f, "destination address"),
        }
    }
}

#[derive(Error, Debug)]
pub enum LoadInputError {
    #[error("Can not read {kind} file {}: {source}", .path.display())]
    CanNotRead {
        kind: InputKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} has no active {kind} (every line is blank or commented out)", .path.display())]
    Empty { kind: InputKind, path: PathBuf },
}

/// Keeps every line that is not blank and does not start with `#`, trimmed, in file order.
/// Duplicates are kept.
pub fn parse_non_commented_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_MARKER))
        .map(str::to_string)
        .collect()
}

/// Reads `path` and returns its active lines, failing if there are none.
pub fn read_non_commented_lines(
    path: &Path,
    kind: InputKind,
) -> Result<Vec<String>, LoadInputError> {
    let contents = fs::read_to_string(path).map_err(|source| LoadInputError::CanNotRead {
        kind,
        path: path.to_path_buf(),
        source,
    })?;

    let lines = parse_non_commented_lines(&contents);
    if lines.is_empty() {
        return Err(LoadInputError::Empty { kind, path: path.to_path_buf() });
    }

    Ok(lines)
}

/// Loads both input lists. Nothing here touches the network, so a bad file is reported
/// before the node is ever contacted.
pub fn load_batch_inputs(
    private_keys_path: &Path,
    to_addresses_path: &Path,
) -> Result<BatchInputs, LoadInputError> {
    let credentials = read_non_commented_lines(private_keys_path, InputKind::PrivateKeys)?
        .into_iter()
        .map(Credential::from)
        .collect();
    let destinations = read_non_commented_lines(to_addresses_path, InputKind::ToAddresses)?;

    Ok(BatchInputs::new(credentials, destinations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let contents = "\n# disabled wallet\nfirst\n   \n  # indented comment\n  second  \nfirst\n";

        assert_eq!(parse_non_commented_lines(contents), vec!["first", "second", "first"]);
    }

    #[test]
    fn test_parse_keeps_inline_hash_after_value() {
        assert_eq!(parse_non_commented_lines("value#tail\n"), vec!["value#tail"]);
    }

    #[test]
    fn test_parse_handles_crlf() {
        assert_eq!(parse_non_commented_lines("a\r\n#b\r\nc\r\n"), vec!["a", "c"]);
    }

    #[test]
    fn test_read_fails_on_all_commented_file() {
        let file = temp_file("# nothing here\n\n   \n");

        let result = read_non_commented_lines(file.path(), InputKind::ToAddresses);

        match result {
            Err(LoadInputError::Empty { kind, path }) => {
                assert_eq!(kind, InputKind::ToAddresses);
                assert_eq!(path, file.path());
            }
            other => panic!("expected empty error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("private_keys.txt");

        let result = read_non_commented_lines(&missing, InputKind::PrivateKeys);

        assert!(matches!(result, Err(LoadInputError::CanNotRead { .. })));
    }

    #[test]
    fn test_load_batch_inputs_names_the_empty_file() {
        let keys = temp_file("0xabc\n");
        let addresses = temp_file("# all commented\n");

        let error = load_batch_inputs(keys.path(), addresses.path()).unwrap_err();

        assert!(error.to_string().contains("destination address"));
        assert!(error.to_string().contains(&addresses.path().display().to_string()));
    }

    #[test]
    fn test_load_batch_inputs_preserves_order() {
        let keys = temp_file("k1\n#k2\nk3\n");
        let addresses = temp_file("a1\na2\n\na3\n");

        let inputs = load_batch_inputs(keys.path(), addresses.path()).unwrap();

        assert_eq!(inputs.credentials(), &[Credential::new("k1"), Credential::new("k3")]);
        assert_eq!(inputs.destinations(), &["a1", "a2", "a3"]);
    }
}
