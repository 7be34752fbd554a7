use serde::Deserialize;
use std::collections::HashMap;

/// LockRecord value object: one resolved package from pdm.lock
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LockRecord {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub summary: String,
    /// Declarations of the package's own dependencies, e.g. `"idna<4,>=2.5"`
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl LockRecord {
    pub fn new(name: &str, version: &str, summary: &str, dependencies: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            summary: summary.to_string(),
            dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
        }
    }

    pub fn lookup_key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// LockIndex aggregate: every resolved package keyed by lowercase name
#[derive(Debug, Clone, Default)]
pub struct LockIndex {
    records: HashMap<String, LockRecord>,
}

impl LockIndex {
    /// Builds the index; a later record with the same lowercase name replaces an earlier one.
    pub fn new(records: Vec<LockRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.lookup_key(), record))
            .collect();
        Self { records }
    }

    pub fn get(&self, lookup_key: &str) -> Option<&LockRecord> {
        self.records.get(lookup_key)
    }

    pub fn contains(&self, lookup_key: &str) -> bool {
        self.records.contains_key(lookup_key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
