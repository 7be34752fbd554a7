use crate::shared::error::CreditsError;
use crate::shared::Result;
use regex::Regex;
use std::sync::LazyLock;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// A declaration is a distribution name followed by anything else
/// (extras, version specifiers, environment markers).
static DECLARATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<dist>[\w.-]+)(?P<spec>.*)$").expect("declaration pattern is valid")
});

/// NewType wrapper for a distribution name as written in a declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-folded name used to join declarations with lockfile entries
    pub fn lookup_key(&self) -> String {
        self.0.to_lowercase()
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// DependencySpec value object: a parsed `<name><specifier>` declaration
///
/// The specifier is kept verbatim, so `foo[bar]>=1; python_version<"3.8"`
/// has the specifier `[bar]>=1; python_version<"3.8"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
    name: PackageName,
    specifier: String,
}

impl DependencySpec {
    pub fn parse(declaration: &str) -> Result<Self> {
        let trimmed = declaration.trim();
        let captures = DECLARATION_PATTERN.captures(trimmed).ok_or_else(|| {
            CreditsError::InvalidDeclaration {
                declaration: declaration.to_string(),
            }
        })?;

        let name = PackageName::new(captures["dist"].to_string())?;
        let specifier = captures["spec"].to_string();

        Ok(Self { name, specifier })
    }

    pub fn name(&self) -> &PackageName {
        &self.name
    }

    pub fn specifier(&self) -> &str {
        &self.specifier
    }

    pub fn lookup_key(&self) -> String {
        self.name.lookup_key()
    }
}
