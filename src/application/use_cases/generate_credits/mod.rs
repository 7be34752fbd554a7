use crate::application::dto::{CreditsRequest, CreditsResponse};
use crate::credits::domain::{ClosureSet, DependencyRecord, LockIndex, ProjectManifest};
use crate::credits::policies::UNKNOWN_LICENSE;
use crate::credits::services::DependencyExpander;
use crate::ports::outbound::{LicenseRepository, LockfileReader, ManifestReader, ProgressReporter};
use crate::shared::Result;
use std::collections::HashMap;

/// GenerateCreditsUseCase - Core use case for credits generation
///
/// This use case orchestrates the credits workflow using generic
/// dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `LR` - LockfileReader implementation
/// * `LREPO` - LicenseRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateCreditsUseCase<MR, LR, LREPO, PR> {
    manifest_reader: MR,
    lockfile_reader: LR,
    license_repository: LREPO,
    progress_reporter: PR,
}

impl<MR, LR, LREPO, PR> GenerateCreditsUseCase<MR, LR, LREPO, PR>
where
    MR: ManifestReader,
    LR: LockfileReader,
    LREPO: LicenseRepository,
    PR: ProgressReporter,
{
    /// Creates a new GenerateCreditsUseCase with injected dependencies
    pub fn new(
        manifest_reader: MR,
        lockfile_reader: LR,
        license_repository: LREPO,
        progress_reporter: PR,
    ) -> Self {
        Self {
            manifest_reader,
            lockfile_reader,
            license_repository,
            progress_reporter,
        }
    }

    /// Executes the credits generation use case
    ///
    /// # Returns
    /// CreditsResponse with the runtime and development records, each sorted by name
    ///
    /// # Errors
    /// Fails if an input file is missing or malformed, or if a declared or
    /// transitive dependency is absent from the lockfile. A package whose
    /// installed metadata cannot be read only produces a warning.
    pub fn execute(&self, request: CreditsRequest) -> Result<CreditsResponse> {
        // Step 1: Read project manifest and lockfile
        let manifest = self.read_manifest(&request)?;
        let lock_index = self.read_lock_index(&request)?;

        // Step 2: Expand both closures independently
        let runtime = DependencyExpander::expand(&manifest.runtime_declarations(), &lock_index)?;
        let development = DependencyExpander::expand(&manifest.dev_declarations(), &lock_index)?;
        self.progress_reporter.report(&format!(
            "✅ Resolved {} runtime and {} development package(s)",
            runtime.len(),
            development.len()
        ));

        // Step 3: Enrich with license information
        let (prod_dependencies, dev_dependencies) = self.enrich_with_licenses(&runtime, &development);

        Ok(CreditsResponse::new(
            manifest.name,
            prod_dependencies,
            dev_dependencies,
        ))
    }

    fn read_manifest(&self, request: &CreditsRequest) -> Result<ProjectManifest> {
        self.progress_reporter.report(&format!(
            "📖 Loading pyproject.toml from: {}",
            request.project_path.display()
        ));
        let manifest = self.manifest_reader.read_manifest(&request.project_path)?;
        tracing::debug!(
            project = %manifest.name,
            dependencies = manifest.dependencies.len(),
            optional_groups = manifest.optional_dependencies.len(),
            dev_groups = manifest.dev_dependency_groups.len(),
            "read manifest"
        );
        Ok(manifest)
    }

    fn read_lock_index(&self, request: &CreditsRequest) -> Result<LockIndex> {
        let lock_index = self.lockfile_reader.read_lock_index(&request.project_path)?;
        self.progress_reporter
            .report(&format!("✅ Detected {} locked package(s)", lock_index.len()));
        Ok(lock_index)
    }

    /// Resolves a license for every closure entry, in name order
    ///
    /// A package present in both closures is looked up once.
    fn enrich_with_licenses(
        &self,
        runtime: &ClosureSet,
        development: &ClosureSet,
    ) -> (Vec<DependencyRecord>, Vec<DependencyRecord>) {
        self.progress_reporter
            .report("🔍 Reading license information...");

        let total = runtime.len() + development.len();
        let mut licenses: HashMap<String, String> = HashMap::new();
        let mut processed = 0;

        let mut enrich = |closure: &ClosureSet| -> Vec<DependencyRecord> {
            closure
                .sorted_entries()
                .into_iter()
                .map(|entry| {
                    processed += 1;
                    let name = entry.record.name.as_str();
                    self.progress_reporter
                        .report_progress(processed, total, Some(name));

                    let license = licenses
                        .entry(entry.record.lookup_key())
                        .or_insert_with(|| self.resolve_license(name))
                        .clone();
                    DependencyRecord::new(entry, license)
                })
                .collect()
        };

        let prod_dependencies = enrich(runtime);
        let dev_dependencies = enrich(development);

        self.progress_reporter.report_completion(&format!(
            "✅ License information read for {} package(s)",
            licenses.len()
        ));

        (prod_dependencies, dev_dependencies)
    }

    fn resolve_license(&self, name: &str) -> String {
        match self.license_repository.resolve_license(name) {
            Ok(license) => license,
            Err(e) => {
                tracing::warn!(package = name, error = %e, "failed to read installed metadata");
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Failed to read metadata for {}: {}",
                    name, e
                ));
                UNKNOWN_LICENSE.to_string()
            }
        }
    }
}
