use std::{fs, fs::File, io::Write, path::Path};

#[derive(thiserror::Error, Debug)]
pub enum WriteFileError {
    #[error("Could not create dir: {0}")]
    CouldNotCreateDir(std::io::Error),

    #[error("Could not write to the file: {0}")]
    CouldNotWrite(std::io::Error),

    #[error("Could not create the file: {0}")]
    CouldNotCreateFile(std::io::Error),
}

/// Writes `contents` to `path` unless the file already exists.
///
/// Parent directories are created as needed and trailing whitespace is stripped from
/// every line. An existing file is left untouched so operator-edited key lists are
/// never clobbered.
///
/// # Returns
/// * `Ok(true)` - The file was written
/// * `Ok(false)` - The file already existed and was skipped
/// * `Err(WriteFileError)` - If directory creation or file writing fails
pub fn write_file_if_missing(path: &Path, contents: &str) -> Result<bool, WriteFileError> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(WriteFileError::CouldNotCreateDir)?;
    }

    let mut cleaned_contents: String =
        contents.lines().map(|line| line.trim_end()).collect::<Vec<&str>>().join("\n");
    cleaned_contents.push('\n');

    let mut file = File::create(path).map_err(WriteFileError::CouldNotCreateFile)?;
    file.write_all(cleaned_contents.as_bytes()).map_err(WriteFileError::CouldNotWrite)?;
    Ok(true)
}
