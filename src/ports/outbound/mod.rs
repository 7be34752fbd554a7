/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, installed metadata,
/// template engine, console).
pub mod credits_renderer;
pub mod license_repository;
pub mod lockfile_reader;
pub mod manifest_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use credits_renderer::CreditsRenderer;
pub use license_repository::LicenseRepository;
pub use lockfile_reader::{parse_lockfile, LockfileReader};
pub use manifest_reader::{parse_manifest, ManifestReader};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
