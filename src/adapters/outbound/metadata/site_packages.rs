use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const DIST_INFO_SUFFIX: &str = ".dist-info";
const EGG_INFO_SUFFIX: &str = ".egg-info";

/// Normalizes a distribution name the way installers compare names (PEP 503):
/// lowercase, with every run of `-`, `_` and `.` collapsed to a single `-`.
pub fn normalize_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    let mut in_separator_run = false;

    for c in name.chars() {
        if matches!(c, '-' | '_' | '.') {
            if !in_separator_run {
                normalized.push('-');
            }
            in_separator_run = true;
        } else {
            normalized.extend(c.to_lowercase());
            in_separator_run = false;
        }
    }

    normalized
}

/// Finds site-packages directories for a project when none were configured.
///
/// Search order: the active virtual environment, the project's `.venv`,
/// then PDM's `__pypackages__/<python>/lib` layout. Only existing
/// directories are returned.
pub fn discover_site_packages(project_path: &Path, virtual_env: Option<&Path>) -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if let Some(venv) = virtual_env {
        dirs.extend(venv_site_packages(venv));
    }
    dirs.extend(venv_site_packages(&project_path.join(".venv")));
    dirs.extend(pep582_libs(&project_path.join("__pypackages__")));

    dirs.dedup();
    dirs
}

/// `<venv>/lib/python*/site-packages`, or `<venv>/Lib/site-packages` on Windows layouts
fn venv_site_packages(venv: &Path) -> Vec<PathBuf> {
    let windows_layout = venv.join("Lib").join("site-packages");
    if windows_layout.is_dir() {
        return vec![windows_layout];
    }

    sorted_subdirectories(&venv.join("lib"))
        .into_iter()
        .filter(|dir| {
            dir.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("python"))
        })
        .map(|dir| dir.join("site-packages"))
        .filter(|dir| dir.is_dir())
        .collect()
}

/// `__pypackages__/<X.Y>/lib`
fn pep582_libs(pypackages: &Path) -> Vec<PathBuf> {
    sorted_subdirectories(pypackages)
        .into_iter()
        .map(|dir| dir.join("lib"))
        .filter(|dir| dir.is_dir())
        .collect()
}

fn sorted_subdirectories(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut subdirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    subdirs.sort();
    subdirs
}

/// Maps normalized distribution names to their core metadata file.
///
/// Earlier directories take precedence; within a directory, entries are
/// visited in file-name order and the first one for a name is kept.
pub fn index_distributions(site_packages: &[PathBuf]) -> HashMap<String, PathBuf> {
    let mut index = HashMap::new();

    for dir in site_packages {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(dir = %dir.display(), error = %e, "skipping unreadable site-packages");
                continue;
            }
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .collect();
        paths.sort();

        for path in paths {
            if let Some((name, metadata_file)) = distribution_entry(&path) {
                index.entry(normalize_name(&name)).or_insert(metadata_file);
            }
        }
    }

    tracing::debug!(distributions = index.len(), "indexed installed distributions");
    index
}

/// Recognizes `<name>-<version>.dist-info/` and `<name>-<version>[-...].egg-info`
/// (directory or single file) and returns the name and its metadata file.
fn distribution_entry(path: &Path) -> Option<(String, PathBuf)> {
    let file_name = path.file_name()?.to_str()?;

    let (stem, metadata_file) = if let Some(stem) = file_name.strip_suffix(DIST_INFO_SUFFIX) {
        (stem, path.join("METADATA"))
    } else if let Some(stem) = file_name.strip_suffix(EGG_INFO_SUFFIX) {
        if path.is_dir() {
            (stem, path.join("PKG-INFO"))
        } else {
            (stem, path.to_path_buf())
        }
    } else {
        return None;
    };

    if !metadata_file.is_file() {
        return None;
    }

    let name = stem.split_once('-').map_or(stem, |(name, _)| name);
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), metadata_file))
}
