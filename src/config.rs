//! Configuration file support for pdm-credits.
//!
//! Provides YAML-based configuration through `pdm-credits.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line options.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::security::read_checked;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "pdm-credits.config.yml";

/// Top-level configuration file schema.
///
/// Relative paths are resolved against the directory holding the config file.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub site_packages: Option<Vec<PathBuf>>,
    pub more_credits: Option<String>,
    pub template: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_checked(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let mut config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    validate_config(&config)?;
    warn_unknown_fields(&config);

    if let Some(base) = path.parent() {
        config.resolve_relative_paths(base);
    }
    tracing::debug!(config = %path.display(), "loaded config file");

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

impl ConfigFile {
    fn resolve_relative_paths(&mut self, base: &Path) {
        if let Some(dirs) = self.site_packages.as_mut() {
            for dir in dirs.iter_mut() {
                if dir.is_relative() {
                    *dir = base.join(&*dir);
                }
            }
        }
        if let Some(template) = self.template.as_mut() {
            if template.is_relative() {
                *template = base.join(&*template);
            }
        }
    }
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref dirs) = config.site_packages {
        for (i, dir) in dirs.iter().enumerate() {
            if dir.as_os_str().is_empty() {
                bail!(
                    "Invalid config: site_packages[{}] must not be empty.\n\n\
                     💡 Hint: Each entry must be a site-packages directory (e.g., \".venv/lib/python3.12/site-packages\").",
                    i
                );
            }
        }
    }
    if let Some(ref url) = config.more_credits {
        if url.trim().is_empty() {
            bail!(
                "Invalid config: more_credits must not be empty.\n\n\
                 💡 Hint: Remove the key or set it to a URL."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Options after merging the command line over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreditsOptions {
    pub site_packages: Vec<PathBuf>,
    pub more_credits: Option<String>,
    pub template: Option<PathBuf>,
}

impl CreditsOptions {
    /// Command-line values win; config values fill in what the command line left unset.
    pub fn merge(cli: CreditsOptions, config: Option<ConfigFile>) -> Self {
        let Some(config) = config else {
            return cli;
        };

        Self {
            site_packages: if cli.site_packages.is_empty() {
                config.site_packages.unwrap_or_default()
            } else {
                cli.site_packages
            },
            more_credits: cli.more_credits.or(config.more_credits),
            template: cli.template.or(config.template),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
site_packages:
  - .venv/lib/python3.12/site-packages
  - /opt/python/site-packages
more_credits: https://example.org/credits
template: docs/credits.md.tera
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(
            config.site_packages.unwrap(),
            vec![
                dir.path().join(".venv/lib/python3.12/site-packages"),
                PathBuf::from("/opt/python/site-packages"),
            ]
        );
        assert_eq!(
            config.more_credits.as_deref(),
            Some("https://example.org/credits")
        );
        assert_eq!(
            config.template.unwrap(),
            dir.path().join("docs/credits.md.tera")
        );
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "more_credits: https://example.org\n",
        )
        .unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.more_credits.as_deref(), Some("https://example.org"));
        assert!(config.site_packages.is_none());
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_empty_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.site_packages.is_none());
        assert!(config.more_credits.is_none());
        assert!(config.template.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let result = load_config_from_path(&config_path);
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_blank_more_credits_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "more_credits: \"   \"\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("more_credits must not be empty"));
    }

    #[test]
    fn test_empty_site_packages_entry_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "site_packages:\n  - \"\"\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("site_packages[0] must not be empty"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
more_credits: https://example.org
unknown_field: true
another_unknown: value
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("unknown_field"));
        assert!(config.unknown_fields.contains_key("another_unknown"));
    }

    #[test]
    fn test_merge_cli_overrides_config() {
        let config = ConfigFile {
            site_packages: Some(vec![PathBuf::from("/config/site")]),
            more_credits: Some("https://config.example".to_string()),
            template: Some(PathBuf::from("/config/template.md")),
            unknown_fields: HashMap::new(),
        };
        let cli = CreditsOptions {
            site_packages: vec![PathBuf::from("/cli/site")],
            more_credits: Some("https://cli.example".to_string()),
            template: None,
        };

        let merged = CreditsOptions::merge(cli, Some(config));
        assert_eq!(merged.site_packages, vec![PathBuf::from("/cli/site")]);
        assert_eq!(merged.more_credits.as_deref(), Some("https://cli.example"));
        assert_eq!(merged.template, Some(PathBuf::from("/config/template.md")));
    }

    #[test]
    fn test_merge_config_fills_unset_options() {
        let config = ConfigFile {
            site_packages: Some(vec![PathBuf::from("/config/site")]),
            ..ConfigFile::default()
        };

        let merged = CreditsOptions::merge(CreditsOptions::default(), Some(config));
        assert_eq!(merged.site_packages, vec![PathBuf::from("/config/site")]);
        assert!(merged.more_credits.is_none());
        assert!(merged.template.is_none());
    }

    #[test]
    fn test_merge_without_config() {
        let cli = CreditsOptions {
            more_credits: Some("https://cli.example".to_string()),
            ..CreditsOptions::default()
        };
        assert_eq!(CreditsOptions::merge(cli.clone(), None), cli);
    }
}
