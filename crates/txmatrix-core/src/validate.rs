//! Structural checks over a loaded version table.
//!
//! Construction already rejects malformed entries; these checks cover
//! properties of the table as a whole that are worth reporting but that the
//! expansion itself does not depend on.

use std::collections::HashSet;
use std::fmt;

use crate::stability::{known_tiers, Stability};
use crate::table::VersionTable;

/// How serious a validation finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}

/// A validation issue found in a version table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: Severity,
    /// The version the issue concerns, if it is about a single entry.
    pub version: Option<String>,
    /// Human-readable description.
    pub message: String,
}

impl ValidationIssue {
    fn error(version: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            version: version.map(str::to_string),
            message: message.into(),
        }
    }

    fn warning(version: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            version: version.map(str::to_string),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(v) => write!(f, "{}: {}: {}", self.severity, v, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

/// Check a table, returning every issue found (empty when clean).
pub fn validate_table(table: &VersionTable) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if table.is_empty() {
        issues.push(ValidationIssue::error(None, "table defines no versions"));
    }

    for (version, config) in table.iter() {
        if let Err(e) = semver::Version::parse(version) {
            issues.push(ValidationIssue::warning(
                Some(version),
                format!("not a semantic version ({e})"),
            ));
        }

        if !config.stability().is_known() {
            issues.push(ValidationIssue::warning(
                Some(version),
                format!(
                    "unrecognized stability tier '{}' (expected one of: {})",
                    config.stability(),
                    known_tiers()
                        .iter()
                        .map(Stability::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            ));
        }

        let mut seen = HashSet::new();
        for os in config.oses() {
            if !seen.insert(os.as_str()) {
                issues.push(ValidationIssue::warning(
                    Some(version),
                    format!("operating system '{os}' is listed more than once"),
                ));
            }
        }
    }

    issues
}

/// Whether any issue is error-severity.
pub fn has_errors(issues: &[ValidationIssue]) -> bool {
    issues.iter().any(|i| i.severity == Severity::Error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::VersionConfig;

    #[test]
    fn shipped_table_is_clean() {
        let table = VersionTable::shipped().unwrap();
        assert!(validate_table(&table).is_empty());
    }

    #[test]
    fn empty_table_is_an_error() {
        let issues = validate_table(&VersionTable::new());
        assert_eq!(issues.len(), 1);
        assert!(has_errors(&issues));
        assert_eq!(issues[0].to_string(), "error: table defines no versions");
    }

    #[test]
    fn non_semver_version_warns() {
        let table = VersionTable::new()
            .with(
                "nightly-2024",
                VersionConfig::new("nightly-2024", Stability::Next, ["debian-12"]).unwrap(),
            )
            .unwrap();
        let issues = validate_table(&table);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].version.as_deref(), Some("nightly-2024"));
        assert!(!has_errors(&issues));
    }

    #[test]
    fn unknown_tier_warns() {
        let table = VersionTable::new()
            .with(
                "4.2.0",
                VersionConfig::new("4.2.0", Stability::parse("lts"), ["debian-12"]).unwrap(),
            )
            .unwrap();
        let issues = validate_table(&table);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("'lts'"));
    }

    #[test]
    fn repeated_os_warns() {
        let table = VersionTable::new()
            .with(
                "4.0.6",
                VersionConfig::new(
                    "4.0.6",
                    Stability::Stable,
                    ["debian-12", "ubuntu-24.04", "debian-12"],
                )
                .unwrap(),
            )
            .unwrap();
        let issues = validate_table(&table);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("debian-12"));
        assert_eq!(
            issues[0].to_string(),
            "warning: 4.0.6: operating system 'debian-12' is listed more than once"
        );
    }
}
