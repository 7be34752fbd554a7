use crate::shared::error::CreditsError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of any input file we are willing to read (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Checks that `path` is a regular file and not a symbolic link.
///
/// `symlink_metadata()` is used so that the link itself is inspected,
/// not its target.
///
/// # Errors
/// Returns an error if metadata cannot be read, if the path is a symbolic
/// link, or if it is not a regular file.
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<u64> {
    let metadata = fs::symlink_metadata(path).map_err(|e| CreditsError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(CreditsError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Replace the link with the actual file".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(metadata.len())
}

/// Rejects files larger than `max_size` bytes.
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(CreditsError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Check that the path points to the expected file".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Reads a regular, non-symlink file of bounded size into a string.
pub fn read_checked(path: &Path, file_description: &str) -> Result<String> {
    let size = validate_regular_file(path, file_description)?;
    validate_file_size(size, path, MAX_FILE_SIZE)?;

    fs::read_to_string(path).map_err(|e| {
        CreditsError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}
