use crate::shared::Result;
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashSet;

/// One entry of a `[dependency-groups]` group
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum GroupEntry {
    Requirement(String),
    Include {
        #[serde(rename = "include-group")]
        include_group: String,
    },
}

/// ProjectManifest aggregate: what pyproject.toml declares
///
/// Group maps keep the order in which groups appear in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectManifest {
    pub name: String,
    pub dependencies: Vec<String>,
    pub optional_dependencies: IndexMap<String, Vec<String>>,
    pub dev_dependency_groups: IndexMap<String, Vec<String>>,
}

impl ProjectManifest {
    pub fn new(name: String) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    pub fn with_dependencies(mut self, dependencies: &[&str]) -> Self {
        self.dependencies = dependencies.iter().map(|d| d.to_string()).collect();
        self
    }

    pub fn with_optional_group(mut self, group: &str, dependencies: &[&str]) -> Self {
        self.optional_dependencies.insert(
            group.to_string(),
            dependencies.iter().map(|d| d.to_string()).collect(),
        );
        self
    }

    pub fn with_dev_group(mut self, group: &str, dependencies: &[&str]) -> Self {
        self.dev_dependency_groups
            .entry(group.to_string())
            .or_default()
            .extend(dependencies.iter().map(|d| d.to_string()));
        self
    }

    /// Runtime dependencies followed by every optional-dependency group
    pub fn runtime_declarations(&self) -> Vec<String> {
        self.dependencies
            .iter()
            .chain(self.optional_dependencies.values().flatten())
            .cloned()
            .collect()
    }

    /// Every development group, flattened
    pub fn dev_declarations(&self) -> Vec<String> {
        self.dev_dependency_groups
            .values()
            .flatten()
            .cloned()
            .collect()
    }
}

/// Flattens `[dependency-groups]`, splicing `include-group` references in place.
///
/// A group is expanded at most once per including group, so include cycles terminate.
///
/// # Errors
/// Returns an error if a group includes a group that is not defined.
pub fn resolve_dependency_groups(
    groups: &IndexMap<String, Vec<GroupEntry>>,
) -> Result<IndexMap<String, Vec<String>>> {
    let mut resolved = IndexMap::new();
    for group in groups.keys() {
        let mut requirements = Vec::new();
        let mut visited = HashSet::new();
        collect_group(group, groups, &mut requirements, &mut visited)?;
        resolved.insert(group.clone(), requirements);
    }
    Ok(resolved)
}

fn collect_group(
    group: &str,
    groups: &IndexMap<String, Vec<GroupEntry>>,
    requirements: &mut Vec<String>,
    visited: &mut HashSet<String>,
) -> Result<()> {
    if !visited.insert(group.to_string()) {
        return Ok(());
    }

    let entries = groups
        .get(group)
        .ok_or_else(|| anyhow::anyhow!("Dependency group '{}' is included but not defined", group))?;

    for entry in entries {
        match entry {
            GroupEntry::Requirement(requirement) => requirements.push(requirement.clone()),
            GroupEntry::Include { include_group } => {
                collect_group(include_group, groups, requirements, visited)?
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requirement(s: &str) -> GroupEntry {
        GroupEntry::Requirement(s.to_string())
    }

    fn include(s: &str) -> GroupEntry {
        GroupEntry::Include {
            include_group: s.to_string(),
        }
    }

    #[test]
    fn test_runtime_declarations_include_optional_groups() {
        let manifest = ProjectManifest::new("demo".to_string())
            .with_dependencies(&["requests>=2.0"])
            .with_optional_group("yaml", &["pyyaml"])
            .with_optional_group("cli", &["click>=8"]);

        assert_eq!(
            manifest.runtime_declarations(),
            vec!["requests>=2.0", "pyyaml", "click>=8"]
        );
    }

    #[test]
    fn test_dev_declarations_flatten_all_groups() {
        let manifest = ProjectManifest::new("demo".to_string())
            .with_dev_group("test", &["pytest"])
            .with_dev_group("lint", &["ruff"]);

        assert_eq!(manifest.dev_declarations(), vec!["pytest", "ruff"]);
        assert!(manifest.runtime_declarations().is_empty());
    }

    #[test]
    fn test_resolve_dependency_groups_splices_includes() {
        let mut groups = IndexMap::new();
        groups.insert("test".to_string(), vec![requirement("pytest")]);
        groups.insert(
            "dev".to_string(),
            vec![include("test"), requirement("ruff")],
        );

        let resolved = resolve_dependency_groups(&groups).unwrap();
        assert_eq!(resolved["dev"], vec!["pytest", "ruff"]);
        assert_eq!(resolved["test"], vec!["pytest"]);
    }

    #[test]
    fn test_resolve_dependency_groups_terminates_on_cycle() {
        let mut groups = IndexMap::new();
        groups.insert("a".to_string(), vec![requirement("one"), include("b")]);
        groups.insert("b".to_string(), vec![requirement("two"), include("a")]);

        let resolved = resolve_dependency_groups(&groups).unwrap();
        assert_eq!(resolved["a"], vec!["one", "two"]);
        assert_eq!(resolved["b"], vec!["two", "one"]);
    }

    #[test]
    fn test_resolve_dependency_groups_unknown_include() {
        let mut groups = IndexMap::new();
        groups.insert("dev".to_string(), vec![include("missing")]);

        let result = resolve_dependency_groups(&groups);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("'missing'"));
    }

    #[test]
    fn test_group_entry_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            entries: Vec<GroupEntry>,
        }

        let wrapper: Wrapper =
            toml::from_str(r#"entries = ["pytest>=7", { include-group = "lint" }]"#).unwrap();
        assert_eq!(
            wrapper.entries,
            vec![requirement("pytest>=7"), include("lint")]
        );
    }
}
