//! Query-optimized read model for rendering the credits document

use super::dependency_view::DependencyView;
use serde::Serialize;

/// Everything a credits template can reference
///
/// Serialized as the template context, so every field here is a
/// top-level template variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreditsReadModel {
    pub project_name: String,
    pub prod_dependencies: Vec<DependencyView>,
    pub dev_dependencies: Vec<DependencyView>,
    /// Link to additional credits; empty string when not configured
    pub more_credits: String,
}
