use crate::credits::domain::{LockIndex, LockRecord};
use crate::shared::Result;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct PdmLock {
    #[serde(default)]
    package: Vec<LockRecord>,
}

/// LockfileReader port for reading lockfile contents
///
/// This port abstracts the file system operations needed to read
/// the pdm.lock file from a project directory.
pub trait LockfileReader {
    /// Reads the pdm.lock file from the specified project directory
    ///
    /// # Errors
    /// Returns an error if:
    /// - The pdm.lock file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    fn read_lockfile(&self, project_path: &Path) -> Result<String>;

    /// Reads pdm.lock and indexes its `[[package]]` tables by lowercase name
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid TOML, or a
    /// package table lacks `name` or `version`.
    fn read_lock_index(&self, project_path: &Path) -> Result<LockIndex> {
        let content = self.read_lockfile(project_path)?;
        parse_lockfile(&content)
    }
}

/// Parses pdm.lock content into a LockIndex
pub fn parse_lockfile(content: &str) -> Result<LockIndex> {
    let lockfile: PdmLock = toml::from_str(content)
        .map_err(|e| anyhow::anyhow!("Failed to parse pdm.lock: {}", e))?;
    Ok(LockIndex::new(lockfile.package))
}
