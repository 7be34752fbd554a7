use crate::credits::domain::{LockIndex, ProjectManifest};
use crate::ports::outbound::{parse_lockfile, parse_manifest, LockfileReader, ManifestReader};
use crate::shared::error::CreditsError;
use crate::shared::security::read_checked;
use crate::shared::Result;
use std::path::Path;

pub const MANIFEST_FILENAME: &str = "pyproject.toml";
pub const LOCKFILE_FILENAME: &str = "pdm.lock";

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements both ManifestReader and LockfileReader ports.
/// Every read goes through the symlink and size checks in `shared::security`.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for FileSystemReader {
    fn read_manifest_content(&self, project_path: &Path) -> Result<String> {
        let manifest_path = project_path.join(MANIFEST_FILENAME);

        if !manifest_path.exists() {
            return Err(CreditsError::ManifestNotFound {
                path: manifest_path,
                suggestion: format!(
                    "pyproject.toml does not exist in project directory \"{}\".\n   \
                     Please run in the root directory of a PDM project, or specify the correct path with the --path option.",
                    project_path.display()
                ),
            }
            .into());
        }

        read_checked(&manifest_path, MANIFEST_FILENAME)
    }

    fn read_manifest(&self, project_path: &Path) -> Result<ProjectManifest> {
        let content = self.read_manifest_content(project_path)?;
        parse_manifest(&content).map_err(|e| {
            CreditsError::ManifestParseError {
                path: project_path.join(MANIFEST_FILENAME),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl LockfileReader for FileSystemReader {
    fn read_lockfile(&self, project_path: &Path) -> Result<String> {
        let lockfile_path = project_path.join(LOCKFILE_FILENAME);

        if !lockfile_path.exists() {
            return Err(CreditsError::LockfileNotFound {
                path: lockfile_path,
                suggestion: format!(
                    "pdm.lock file does not exist in project directory \"{}\".\n   \
                     Please run `pdm lock` first, or specify the correct path with the --path option.",
                    project_path.display()
                ),
            }
            .into());
        }

        read_checked(&lockfile_path, LOCKFILE_FILENAME)
    }

    fn read_lock_index(&self, project_path: &Path) -> Result<LockIndex> {
        let content = self.read_lockfile(project_path)?;
        parse_lockfile(&content).map_err(|e| {
            CreditsError::LockfileParseError {
                path: project_path.join(LOCKFILE_FILENAME),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_lockfile_success() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("pdm.lock"), "test content").unwrap();

        let reader = FileSystemReader::new();
        let content = reader.read_lockfile(temp_dir.path()).unwrap();

        assert_eq!(content, "test content");
    }

    #[test]
    fn test_read_lockfile_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let result = reader.read_lockfile(temp_dir.path());

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("pdm.lock file does not exist"));
    }

    #[test]
    fn test_read_lock_index_parse_error_names_path() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("pdm.lock"), "invalid toml [[[").unwrap();

        let reader = FileSystemReader::new();
        let err_string = reader.read_lock_index(temp_dir.path()).unwrap_err().to_string();

        assert!(err_string.contains("Failed to parse pdm.lock file"));
        assert!(err_string.contains("pdm.lock"));
    }

    #[test]
    fn test_read_lock_index_success() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("pdm.lock"),
            r#"
[[package]]
name = "Click"
version = "8.1.7"
summary = "Composable command line interface toolkit"
"#,
        )
        .unwrap();

        let reader = FileSystemReader::new();
        let index = reader.read_lock_index(temp_dir.path()).unwrap();
        assert_eq!(index.get("click").unwrap().version, "8.1.7");
    }

    #[test]
    fn test_read_manifest_success() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("pyproject.toml"),
            r#"
[project]
name = "test-project"
version = "1.0.0"
dependencies = ["click>=8"]
"#,
        )
        .unwrap();

        let reader = FileSystemReader::new();
        let manifest = reader.read_manifest(temp_dir.path()).unwrap();

        assert_eq!(manifest.name, "test-project");
        assert_eq!(manifest.dependencies, vec!["click>=8"]);
    }

    #[test]
    fn test_read_manifest_file_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let reader = FileSystemReader::new();
        let err_string = reader.read_manifest(temp_dir.path()).unwrap_err().to_string();

        assert!(err_string.contains("pyproject.toml not found"));
    }

    #[test]
    fn test_read_manifest_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("pyproject.toml"), "invalid toml [[[").unwrap();

        let reader = FileSystemReader::new();
        let err_string = reader.read_manifest(temp_dir.path()).unwrap_err().to_string();

        assert!(err_string.contains("Failed to parse pyproject.toml"));
    }

    #[test]
    fn test_read_manifest_missing_name_field() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("pyproject.toml"),
            "[project]\nversion = \"1.0.0\"\n",
        )
        .unwrap();

        let reader = FileSystemReader::new();
        let err_string = reader.read_manifest(temp_dir.path()).unwrap_err().to_string();

        assert!(err_string.contains("Project name not found"));
    }
}
