use std::path::PathBuf;

/// CreditsRequest - Internal request DTO for the credits generation use case
#[derive(Debug, Clone)]
pub struct CreditsRequest {
    /// Path to the project directory containing pyproject.toml and pdm.lock
    pub project_path: PathBuf,
}

impl CreditsRequest {
    pub fn new(project_path: PathBuf) -> Self {
        Self { project_path }
    }
}
