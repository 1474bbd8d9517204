use crate::shared::Result;

/// Maximum length for npm package names (registry limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 214;

/// Maximum length for package versions
const MAX_VERSION_LENGTH: usize = 100;

/// NewType wrapper for an npm package name with validation
///
/// Accepts scoped names such as `@hapi/boom`.
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

        if !name
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '~' | '@' | '/'))
        {
            anyhow::bail!(
                "Package name contains invalid characters. Only alphanumeric, hyphens, underscores, dots, tildes and scope markers (@, /) are allowed."
            );
        }

        // '@' may only open a scope, and a scope needs exactly one '/'
        if name.contains('@') || name.contains('/') {
            let scoped = name
                .strip_prefix('@')
                .and_then(|rest| rest.split_once('/'))
                .is_some_and(|(scope, pkg)| {
                    !scope.is_empty() && !pkg.is_empty() && !pkg.contains('/') && !pkg.contains('@')
                });
            if !scoped {
                anyhow::bail!(
                    "Package name '{}' is not a valid scoped name. Expected the form @scope/name.",
                    name
                );
            }
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for package version with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    pub fn new(version: String) -> Result<Self> {
        if version.is_empty() {
            anyhow::bail!("Package version cannot be empty");
        }

        if version.len() > MAX_VERSION_LENGTH {
            anyhow::bail!(
                "Package version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            );
        }

        if !version
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '.' | '-' | '+'))
        {
            anyhow::bail!(
                "Package version contains invalid characters. Only alphanumeric, dots, hyphens and plus are allowed."
            );
        }

        Ok(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Package value object identifying one npm package version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Package {
    name: PackageName,
    version: Version,
}

impl Package {
    pub fn new(name: String, version: String) -> Result<Self> {
        Ok(Self {
            name: PackageName::new(name)?,
            version: Version::new(version)?,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn version(&self) -> &str {
        self.version.as_str()
    }
}

impl std::fmt::Display for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}
