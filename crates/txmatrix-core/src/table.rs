//! Version table: which releases are built, under which tier, for which OSes.
//!
//! Tables are written in TOML, one `[versions."<id>"]` table per release:
//!
//! ```toml
//! [versions."4.0.3"]
//! stability = "oldstable"
//! oses = ["debian-11", "ubuntu-22.04"]
//! ```
//!
//! Declaration order is significant and is preserved through to the
//! generated matrix.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{Result, TableError};
use crate::stability::Stability;

/// The table shipped with the binary.
pub const SHIPPED_TABLE: &str = include_str!("../data/versions.toml");

/// Build configuration for a single version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConfig {
    stability: Stability,
    oses: Vec<String>,
}

impl VersionConfig {
    /// Create a config, rejecting an empty OS list or blank labels.
    ///
    /// `version` is only used to name the entry in errors.
    pub fn new(
        version: &str,
        stability: Stability,
        oses: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self> {
        if stability.as_str().trim().is_empty() {
            return Err(TableError::Blank {
                version: version.to_string(),
                field: "stability",
            });
        }
        let oses: Vec<String> = oses.into_iter().map(Into::into).collect();
        if oses.is_empty() {
            return Err(TableError::EmptyOses {
                version: version.to_string(),
            });
        }
        if oses.iter().any(|os| os.trim().is_empty()) {
            return Err(TableError::Blank {
                version: version.to_string(),
                field: "oses",
            });
        }
        Ok(Self { stability, oses })
    }

    /// The tier this version ships under.
    pub fn stability(&self) -> &Stability {
        &self.stability
    }

    /// Target operating systems, in declaration order.
    pub fn oses(&self) -> &[String] {
        &self.oses
    }
}

/// Ordered mapping from version identifier to its build configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionTable {
    versions: IndexMap<String, VersionConfig>,
}

/// On-disk shape of a table file. Fields are optional here so that a missing
/// one can be reported against its version key.
#[derive(Debug, Deserialize)]
struct TableFile {
    #[serde(default)]
    versions: IndexMap<String, RawVersionConfig>,
}

#[derive(Debug, Deserialize)]
struct RawVersionConfig {
    stability: Option<String>,
    oses: Option<Vec<String>>,
}

impl VersionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a version. Keys must be non-blank and unique.
    pub fn insert(&mut self, version: impl Into<String>, config: VersionConfig) -> Result<()> {
        let version = version.into();
        if version.trim().is_empty() {
            return Err(TableError::Blank {
                version,
                field: "version",
            });
        }
        if self.versions.contains_key(&version) {
            return Err(TableError::DuplicateVersion { version });
        }
        self.versions.insert(version, config);
        Ok(())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, version: impl Into<String>, config: VersionConfig) -> Result<Self> {
        self.insert(version, config)?;
        Ok(self)
    }

    /// Look up a version's config.
    pub fn get(&self, version: &str) -> Option<&VersionConfig> {
        self.versions.get(version)
    }

    /// Iterate versions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VersionConfig)> {
        self.versions.iter().map(|(v, c)| (v.as_str(), c))
    }

    /// Number of versions.
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Whether the table has no versions.
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Number of matrix entries this table expands to.
    pub fn total_entries(&self) -> usize {
        self.versions.values().map(|c| c.oses.len()).sum()
    }

    /// Parse a table from TOML text.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let file: TableFile = toml::from_str(toml_str)?;
        let mut table = Self::new();
        for (version, raw) in file.versions {
            let stability = raw.stability.ok_or_else(|| TableError::MissingField {
                version: version.clone(),
                field: "stability",
            })?;
            let oses = raw.oses.ok_or_else(|| TableError::MissingField {
                version: version.clone(),
                field: "oses",
            })?;
            let config = VersionConfig::new(&version, Stability::from(stability), oses)?;
            table.insert(version, config)?;
        }
        tracing::debug!(
            versions = table.len(),
            entries = table.total_entries(),
            "parsed version table"
        );
        Ok(table)
    }

    /// Load a table from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TableError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading version table");
        Self::from_toml_str(&content)
    }

    /// The table shipped with the binary.
    pub fn shipped() -> Result<Self> {
        Self::from_toml_str(SHIPPED_TABLE)
    }
}

impl<'a> IntoIterator for &'a VersionTable {
    type Item = (&'a String, &'a VersionConfig);
    type IntoIter = indexmap::map::Iter<'a, String, VersionConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.versions.iter()
    }
}
