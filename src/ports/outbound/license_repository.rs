use crate::credits::domain::DistributionMetadata;
use crate::credits::policies::LicenseFallback;
use crate::shared::Result;

/// LicenseRepository port for looking up installed package metadata
///
/// This port abstracts the installed-package registry (site-packages
/// directories) used to find license information for a package.
pub trait LicenseRepository {
    /// Fetches the installed metadata of a package
    ///
    /// # Arguments
    /// * `package_name` - Name of the package, in any case or separator spelling
    ///
    /// # Returns
    /// The metadata, or None when the package is not installed
    ///
    /// # Errors
    /// Returns an error if the package is installed but its metadata
    /// cannot be read
    fn fetch_metadata(&self, package_name: &str) -> Result<Option<DistributionMetadata>>;

    /// Resolves the license string to render for a package
    ///
    /// This is a convenience method that fetches raw metadata and applies
    /// the license fallback rules; a package that is not installed gives `?`.
    fn resolve_license(&self, package_name: &str) -> Result<String> {
        let metadata = self.fetch_metadata(package_name)?;
        Ok(LicenseFallback::resolve(metadata.as_ref()))
    }
}
