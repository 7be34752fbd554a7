//! pdm-credits - credits page generator for PDM projects
//!
//! Reads a project's `pyproject.toml` and `pdm.lock`, computes the
//! transitive closure of its runtime and development dependencies,
//! resolves each package's license from installed metadata, and renders
//! a Markdown credits document through a Tera template.
//!
//! # Architecture
//!
//! - **Domain Layer** (`credits`): dependency declarations, lock records,
//!   closure expansion and the license fallback policy
//! - **Application Layer** (`application`): use cases, DTOs, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pdm_credits::prelude::*;
//! use std::path::{Path, PathBuf};
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateCreditsUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     InstalledMetadataRepository::discover(Path::new("."), &[]),
//!     StderrProgressReporter::new(),
//! );
//!
//! let response = use_case.execute(CreditsRequest::new(PathBuf::from(".")))?;
//! let model = CreditsReadModelBuilder::build(&response, None);
//! println!("{}", TeraCreditsRenderer::new().render(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod credits;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::metadata::InstalledMetadataRepository;
    pub use crate::adapters::outbound::rendering::TeraCreditsRenderer;
    pub use crate::application::dto::{CreditsRequest, CreditsResponse};
    pub use crate::application::read_models::{CreditsReadModel, CreditsReadModelBuilder};
    pub use crate::application::use_cases::GenerateCreditsUseCase;
    pub use crate::credits::domain::{
        ClosureSet, DependencyRecord, DependencySpec, DistributionMetadata, LockIndex,
        LockRecord, ProjectManifest,
    };
    pub use crate::credits::policies::LicenseFallback;
    pub use crate::credits::services::DependencyExpander;
    pub use crate::ports::outbound::{
        CreditsRenderer, LicenseRepository, LockfileReader, ManifestReader, OutputPresenter,
        ProgressReporter,
    };
    pub use crate::shared::Result;
}
