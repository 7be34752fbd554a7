/// Installed package metadata adapters
///
/// Reads core metadata (`METADATA` / `PKG-INFO`) of distributions installed
/// in site-packages directories.
mod installed_metadata_repository;
mod metadata_file;
mod site_packages;

pub use installed_metadata_repository::InstalledMetadataRepository;
pub use site_packages::normalize_name;
