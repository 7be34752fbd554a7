mod cli;

use clap::Parser;
use cli::Args;
use owo_colors::OwoColorize;
use pdm_credits::adapters::outbound::console::StderrProgressReporter;
use pdm_credits::adapters::outbound::filesystem::FileSystemReader;
use pdm_credits::adapters::outbound::metadata::InstalledMetadataRepository;
use pdm_credits::application::dto::CreditsRequest;
use pdm_credits::application::factories::{PresenterFactory, PresenterType, RendererFactory};
use pdm_credits::application::read_models::CreditsReadModelBuilder;
use pdm_credits::application::use_cases::GenerateCreditsUseCase;
use pdm_credits::config::{self, CreditsOptions};
use pdm_credits::shared::error::{CreditsError, ExitCode};
use pdm_credits::shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the verbosity flag.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(args: Args) -> Result<()> {
    // Validate project directory
    let project_path = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    validate_project_path(&project_path)?;

    // Load config: explicit path, or auto-discovered in the project directory
    let config_file = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(&project_path)?,
    };
    let options = CreditsOptions::merge(args.credits_options(), config_file);
    tracing::debug!(?options, "effective options");

    // Create adapters (Dependency Injection)
    let manifest_reader = FileSystemReader::new();
    let lockfile_reader = FileSystemReader::new();
    let license_repository =
        InstalledMetadataRepository::discover(&project_path, &options.site_packages);
    let progress_reporter = StderrProgressReporter::new();

    if license_repository.is_empty() {
        tracing::warn!("no installed distributions found; every license will render as '?'");
    }

    // Load the template before reading any project files
    let renderer = RendererFactory::create(options.template.as_deref())?;

    let use_case = GenerateCreditsUseCase::new(
        manifest_reader,
        lockfile_reader,
        license_repository,
        progress_reporter,
    );
    let response = use_case.execute(CreditsRequest::new(project_path))?;

    let model = CreditsReadModelBuilder::build(&response, options.more_credits.as_deref());
    let document = renderer.render(&model)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&document)?;

    Ok(())
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(CreditsError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Reject symbolic links for project paths
    let metadata =
        std::fs::symlink_metadata(path).map_err(|e| CreditsError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read path metadata: {}", e),
        })?;

    if metadata.is_symlink() {
        return Err(CreditsError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. Symbolic links are not allowed."
                .to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(CreditsError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
