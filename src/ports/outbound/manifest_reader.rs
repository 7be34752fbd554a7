use crate::credits::domain::{resolve_dependency_groups, GroupEntry, ProjectManifest};
use crate::shared::Result;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct PyProject {
    project: Option<ProjectTable>,
    #[serde(default)]
    tool: ToolTable,
    #[serde(default, rename = "dependency-groups")]
    dependency_groups: IndexMap<String, Vec<GroupEntry>>,
}

#[derive(Debug, Deserialize)]
struct ProjectTable {
    name: Option<String>,
    #[serde(default)]
    dependencies: Vec<String>,
    #[serde(default, rename = "optional-dependencies")]
    optional_dependencies: IndexMap<String, Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct ToolTable {
    #[serde(default)]
    pdm: PdmTable,
}

#[derive(Debug, Default, Deserialize)]
struct PdmTable {
    #[serde(default, rename = "dev-dependencies")]
    dev_dependencies: IndexMap<String, Vec<String>>,
}

/// ManifestReader port for reading the project manifest
///
/// This port abstracts the file system operations needed to read
/// pyproject.toml from a project directory.
pub trait ManifestReader {
    /// Reads pyproject.toml from the specified project directory
    ///
    /// # Errors
    /// Returns an error if:
    /// - pyproject.toml does not exist
    /// - The file cannot be read due to permissions or I/O errors
    fn read_manifest_content(&self, project_path: &Path) -> Result<String>;

    /// Reads and parses pyproject.toml into a ProjectManifest
    ///
    /// Development groups come from `[tool.pdm.dev-dependencies]` and from
    /// `[dependency-groups]`; a group defined in both gets both lists.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid TOML,
    /// has no `project.name`, or includes an undefined dependency group.
    fn read_manifest(&self, project_path: &Path) -> Result<ProjectManifest> {
        let content = self.read_manifest_content(project_path)?;
        parse_manifest(&content)
    }
}

/// Parses pyproject.toml content into a ProjectManifest
pub fn parse_manifest(content: &str) -> Result<ProjectManifest> {
    let pyproject: PyProject = toml::from_str(content)
        .map_err(|e| anyhow::anyhow!("Failed to parse pyproject.toml: {}", e))?;

    let project = pyproject
        .project
        .ok_or_else(|| anyhow::anyhow!("[project] table not found in pyproject.toml"))?;
    let name = project
        .name
        .ok_or_else(|| anyhow::anyhow!("Project name not found in pyproject.toml"))?;

    let mut dev_dependency_groups = pyproject.tool.pdm.dev_dependencies;
    for (group, requirements) in resolve_dependency_groups(&pyproject.dependency_groups)? {
        dev_dependency_groups
            .entry(group)
            .or_default()
            .extend(requirements);
    }

    Ok(ProjectManifest {
        name,
        dependencies: project.dependencies,
        optional_dependencies: project.optional_dependencies,
        dev_dependency_groups,
    })
}
