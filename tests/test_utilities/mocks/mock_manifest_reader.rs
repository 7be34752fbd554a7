use pdm_credits::prelude::*;
use std::path::Path;

/// Mock ManifestReader for testing
///
/// Parses the given pyproject.toml content with the same rules as the
/// file system adapter.
pub struct MockManifestReader {
    pub content: String,
}

impl MockManifestReader {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }
}

impl ManifestReader for MockManifestReader {
    fn read_manifest_content(&self, _project_path: &Path) -> Result<String> {
        Ok(self.content.clone())
    }
}
