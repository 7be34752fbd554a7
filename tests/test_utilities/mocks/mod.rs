/// Mock implementations for testing
mod mock_license_repository;
mod mock_lockfile_reader;
mod mock_manifest_reader;
mod mock_progress_reporter;

pub use mock_license_repository::MockLicenseRepository;
pub use mock_lockfile_reader::MockLockfileReader;
pub use mock_manifest_reader::MockManifestReader;
pub use mock_progress_reporter::MockProgressReporter;
