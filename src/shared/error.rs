use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The credits document was rendered and presented
    Success = 0,
    /// Application error (missing input file, lookup failure, template error, I/O error, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for credits generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the user-facing messages next to the variants.
#[derive(Debug, Error)]
pub enum CreditsError {
    #[error("pyproject.toml not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse pyproject.toml: {path}\nDetails: {details}\n\n💡 Hint: Please verify that pyproject.toml is valid TOML with a [project] table")]
    ManifestParseError { path: PathBuf, details: String },

    #[error("pdm.lock file not found: {path}\n\n💡 Hint: {suggestion}")]
    LockfileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse pdm.lock file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the pdm.lock file is in the correct format")]
    LockfileParseError { path: PathBuf, details: String },

    #[error("Package '{name}' is not present in pdm.lock\n\n💡 Hint: Run `pdm lock` to refresh the lockfile so that it covers every declared dependency")]
    PackageNotInLockfile { name: String },

    #[error("Invalid dependency declaration: '{declaration}'\n\n💡 Hint: Declarations must start with a package name, e.g. \"requests>=2.0\"")]
    InvalidDeclaration { declaration: String },

    #[error("Failed to render credits template\nDetails: {details}\n\n💡 Hint: Check that the template only references project_name, prod_dependencies, dev_dependencies and more_credits")]
    TemplateRenderError { details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
