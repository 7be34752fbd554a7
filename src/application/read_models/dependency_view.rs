//! Dependency view struct for the read model

use serde::Serialize;

/// One table row of the credits document
///
/// Field names are the ones templates refer to (`dep.name`, `dep.spec`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyView {
    /// Package name as spelled in the lockfile
    pub name: String,
    pub summary: String,
    /// Accepted version specifier; empty when the declaration had none
    pub spec: String,
    /// Locked version
    pub version: String,
    pub license: String,
}
