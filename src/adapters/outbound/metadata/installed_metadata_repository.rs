use super::metadata_file::parse_headers;
use super::site_packages::{discover_site_packages, index_distributions, normalize_name};
use crate::credits::domain::DistributionMetadata;
use crate::ports::outbound::LicenseRepository;
use crate::shared::error::CreditsError;
use crate::shared::security::{validate_file_size, MAX_FILE_SIZE};
use crate::shared::Result;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// InstalledMetadataRepository adapter for reading licenses of installed packages
///
/// The site-packages directories are scanned once at construction; lookups
/// afterwards only read the metadata file of the requested distribution.
pub struct InstalledMetadataRepository {
    index: HashMap<String, PathBuf>,
}

impl InstalledMetadataRepository {
    /// Creates a repository over the given site-packages directories, in precedence order
    pub fn new(site_packages: &[PathBuf]) -> Self {
        Self {
            index: index_distributions(site_packages),
        }
    }

    /// Creates a repository for a project
    ///
    /// Uses `explicit_dirs` when non-empty, otherwise discovers the active
    /// virtual environment (`VIRTUAL_ENV`), the project's `.venv` and
    /// `__pypackages__`.
    pub fn discover(project_path: &Path, explicit_dirs: &[PathBuf]) -> Self {
        if !explicit_dirs.is_empty() {
            return Self::new(explicit_dirs);
        }

        let virtual_env = std::env::var_os("VIRTUAL_ENV").map(PathBuf::from);
        let dirs = discover_site_packages(project_path, virtual_env.as_deref());
        if dirs.is_empty() {
            tracing::debug!(project = %project_path.display(), "no site-packages directory found");
        }
        Self::new(&dirs)
    }

    /// Number of installed distributions found
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl LicenseRepository for InstalledMetadataRepository {
    fn fetch_metadata(&self, package_name: &str) -> Result<Option<DistributionMetadata>> {
        let Some(metadata_path) = self.index.get(&normalize_name(package_name)) else {
            return Ok(None);
        };

        let read_error = |e: std::io::Error| CreditsError::FileReadError {
            path: metadata_path.clone(),
            details: e.to_string(),
        };

        // dist-info files may be links into an installer cache; follow them.
        let size = fs::metadata(metadata_path).map_err(read_error)?.len();
        validate_file_size(size, metadata_path, MAX_FILE_SIZE)?;

        // Metadata files are UTF-8 by standard, but older sdists ship latin-1.
        let bytes = fs::read(metadata_path).map_err(read_error)?;
        let content = String::from_utf8_lossy(&bytes);

        Ok(Some(DistributionMetadata::from_headers(&parse_headers(
            &content,
        ))))
    }
}
