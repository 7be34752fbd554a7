use crate::credits::domain::{ClosureSet, DependencySpec, LockIndex, LockRecord};
use crate::shared::error::CreditsError;
use crate::shared::Result;
use std::collections::VecDeque;

/// DependencyExpander service for computing the transitive closure of declarations
///
/// The lockfile already holds a fully resolved, flat package list, so the closure
/// is a worklist walk over it: no version selection happens here.
pub struct DependencyExpander;

impl DependencyExpander {
    /// Expands top-level declarations into every package they reach through the lockfile
    ///
    /// # Arguments
    /// * `declarations` - Top-level declaration strings, e.g. `"requests>=2.0"`
    /// * `index` - Resolved packages keyed by lowercase name
    ///
    /// # Returns
    /// A ClosureSet with one entry per reachable lowercase name. A top-level
    /// declaration repeated for the same name replaces the earlier specifier;
    /// transitive declarations never replace an existing entry.
    ///
    /// # Errors
    /// Returns an error if a declaration cannot be parsed or names a package
    /// that is absent from the lockfile.
    pub fn expand<S: AsRef<str>>(declarations: &[S], index: &LockIndex) -> Result<ClosureSet> {
        let mut closure = ClosureSet::new();
        let mut worklist = VecDeque::new();

        for declaration in declarations {
            let spec = DependencySpec::parse(declaration.as_ref())?;
            let key = spec.lookup_key();
            let record = Self::lookup(index, &spec)?;
            closure.insert(spec, record.clone());
            worklist.push_back(key);
        }

        while let Some(key) = worklist.pop_front() {
            let Some(record) = index.get(&key) else {
                continue;
            };

            for declaration in &record.dependencies {
                let spec = DependencySpec::parse(declaration)?;
                let dep_key = spec.lookup_key();
                if closure.contains(&dep_key) {
                    continue;
                }

                let dep_record = Self::lookup(index, &spec)?;
                tracing::trace!(package = %record.name, dependency = %dep_record.name, "reached");
                closure.insert(spec, dep_record.clone());
                worklist.push_back(dep_key);
            }
        }

        Ok(closure)
    }

    fn lookup<'a>(index: &'a LockIndex, spec: &DependencySpec) -> Result<&'a LockRecord> {
        index.get(&spec.lookup_key()).ok_or_else(|| {
            CreditsError::PackageNotInLockfile {
                name: spec.name().to_string(),
            }
            .into()
        })
    }
}
