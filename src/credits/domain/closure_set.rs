use super::{DependencySpec, LockRecord};
use std::collections::HashMap;

/// A package reached during expansion: the declaration that introduced it
/// joined with its lockfile entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosureEntry {
    pub spec: DependencySpec,
    pub record: LockRecord,
}

/// ClosureSet aggregate: at most one entry per lowercase package name
#[derive(Debug, Clone, Default)]
pub struct ClosureSet {
    entries: HashMap<String, ClosureEntry>,
}

impl ClosureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the entry for the spec's lookup key.
    pub fn insert(&mut self, spec: DependencySpec, record: LockRecord) {
        self.entries
            .insert(spec.lookup_key(), ClosureEntry { spec, record });
    }

    pub fn contains(&self, lookup_key: &str) -> bool {
        self.entries.contains_key(lookup_key)
    }

    pub fn get(&self, lookup_key: &str) -> Option<&ClosureEntry> {
        self.entries.get(lookup_key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by the locked package name, ties broken by lookup key
    pub fn sorted_entries(&self) -> Vec<&ClosureEntry> {
        let mut entries: Vec<(&String, &ClosureEntry)> = self.entries.iter().collect();
        entries.sort_by(|(key_a, a), (key_b, b)| {
            a.record
                .name
                .cmp(&b.record.name)
                .then_with(|| key_a.cmp(key_b))
        });
        entries.into_iter().map(|(_, entry)| entry).collect()
    }
}
