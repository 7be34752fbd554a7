use super::ClosureEntry;

/// DependencyRecord: the renderable unit, a closure entry enriched with its license
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    name: String,
    specifier: String,
    version: String,
    summary: String,
    license: String,
}

impl DependencyRecord {
    pub fn new(entry: &ClosureEntry, license: String) -> Self {
        Self {
            name: entry.record.name.clone(),
            specifier: entry.spec.specifier().to_string(),
            version: entry.record.version.clone(),
            summary: entry.record.summary.clone(),
            license,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accepted version range as declared, empty when unconstrained
    pub fn specifier(&self) -> &str {
        &self.specifier
    }

    /// Version resolved in the lockfile
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn license(&self) -> &str {
        &self.license
    }
}
