use pdm_credits::prelude::*;
use std::collections::HashMap;

/// Mock LicenseRepository for testing
///
/// Packages are keyed by lowercase name; unknown packages are "not installed".
#[derive(Default)]
pub struct MockLicenseRepository {
    pub installed: HashMap<String, DistributionMetadata>,
    pub should_fail: bool,
}

impl MockLicenseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_license(self, package: &str, license: &str) -> Self {
        self.with_metadata(package, Some(license), &[])
    }

    pub fn with_metadata(mut self, package: &str, license: Option<&str>, classifiers: &[&str]) -> Self {
        self.installed.insert(
            package.to_lowercase(),
            DistributionMetadata::new(
                license.map(str::to_string),
                classifiers.iter().map(|c| c.to_string()).collect(),
            ),
        );
        self
    }

    pub fn with_failure() -> Self {
        Self {
            installed: HashMap::new(),
            should_fail: true,
        }
    }
}

impl LicenseRepository for MockLicenseRepository {
    fn fetch_metadata(&self, package_name: &str) -> Result<Option<DistributionMetadata>> {
        if self.should_fail {
            anyhow::bail!("Mock license repository failure");
        }
        Ok(self.installed.get(&package_name.to_lowercase()).cloned())
    }
}
