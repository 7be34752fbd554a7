use crate::credits::domain::DependencyRecord;

/// CreditsResponse - Internal response DTO from the credits generation use case
///
/// Both record lists are sorted by package name.
#[derive(Debug, Clone)]
pub struct CreditsResponse {
    pub project_name: String,
    /// Closure of `dependencies` and every optional dependency group
    pub prod_dependencies: Vec<DependencyRecord>,
    /// Closure of every development dependency group
    pub dev_dependencies: Vec<DependencyRecord>,
}

impl CreditsResponse {
    pub fn new(
        project_name: String,
        prod_dependencies: Vec<DependencyRecord>,
        dev_dependencies: Vec<DependencyRecord>,
    ) -> Self {
        Self {
            project_name,
            prod_dependencies,
            dev_dependencies,
        }
    }
}
