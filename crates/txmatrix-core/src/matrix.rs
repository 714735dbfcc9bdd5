//! Matrix expansion: one entry per (version, OS) pair.

use serde::{Deserialize, Serialize};

use crate::stability::Stability;
use crate::table::VersionTable;

/// A single CI job: build `version` at `stability` on `os`.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatrixEntry {
    pub version: String,
    pub stability: Stability,
    pub os: String,
}

/// Ordered list of matrix entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix {
    entries: Vec<MatrixEntry>,
}

impl Matrix {
    /// Wrap an existing list of entries.
    pub fn from_entries(entries: Vec<MatrixEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatrixEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[MatrixEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<MatrixEntry> {
        self.entries
    }

    /// Distinct versions, in first-seen order.
    pub fn versions(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !out.contains(&entry.version.as_str()) {
                out.push(entry.version.as_str());
            }
        }
        out
    }
}

impl<'a> IntoIterator for &'a Matrix {
    type Item = &'a MatrixEntry;
    type IntoIter = std::slice::Iter<'a, MatrixEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Flatten a table into its matrix.
///
/// Entries follow table order, then each version's OS order.
pub fn expand(table: &VersionTable) -> Matrix {
    let mut entries = Vec::with_capacity(table.total_entries());
    for (version, config) in table.iter() {
        for os in config.oses() {
            entries.push(MatrixEntry {
                version: version.to_string(),
                stability: config.stability().clone(),
                os: os.clone(),
            });
        }
    }
    tracing::debug!(entries = entries.len(), "expanded build matrix");
    Matrix { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::VersionConfig;

    fn entry(version: &str, stability: Stability, os: &str) -> MatrixEntry {
        MatrixEntry {
            version: version.into(),
            stability,
            os: os.into(),
        }
    }

    #[test]
    fn single_version_expansion() {
        let table = VersionTable::new()
            .with(
                "4.0.3",
                VersionConfig::new("4.0.3", Stability::OldStable, ["debian-11", "ubuntu-22.04"])
                    .unwrap(),
            )
            .unwrap();
        let matrix = expand(&table);
        assert_eq!(
            matrix.entries(),
            &[
                entry("4.0.3", Stability::OldStable, "debian-11"),
                entry("4.0.3", Stability::OldStable, "ubuntu-22.04"),
            ]
        );
    }

    #[test]
    fn shipped_table_cardinality() {
        let table = VersionTable::shipped().unwrap();
        let matrix = expand(&table);
        assert_eq!(matrix.len(), 16);
        assert_eq!(matrix.len(), table.total_entries());
    }

    #[test]
    fn entries_project_their_version_config() {
        let table = VersionTable::shipped().unwrap();
        for e in &expand(&table) {
            let config = table.get(&e.version).unwrap();
            assert_eq!(config.stability(), &e.stability);
            assert!(config.oses().contains(&e.os));
        }
    }

    #[test]
    fn order_follows_table_then_os_lists() {
        let table = VersionTable::shipped().unwrap();
        let expected: Vec<(String, String)> = table
            .iter()
            .flat_map(|(v, c)| c.oses().iter().map(move |os| (v.to_string(), os.clone())))
            .collect();
        let actual: Vec<(String, String)> = expand(&table)
            .into_entries()
            .into_iter()
            .map(|e| (e.version, e.os))
            .collect();
        assert_eq!(actual, expected);

        let matrix = expand(&table);
        assert_eq!(
            matrix.versions(),
            vec!["4.0.3", "4.0.4", "4.0.5", "4.0.6", "4.1.0-beta.2"]
        );
        assert_eq!(matrix.entries()[0], entry("4.0.3", Stability::OldStable, "debian-11"));
        assert_eq!(
            matrix.entries()[15],
            entry("4.1.0-beta.2", Stability::Next, "ubuntu-24.04")
        );
    }

    #[test]
    fn stability_counts_in_shipped_matrix() {
        let matrix = expand(&VersionTable::shipped().unwrap());
        let count = |s: Stability| matrix.iter().filter(|e| e.stability == s).count();
        assert_eq!(count(Stability::OldStable), 2);
        assert_eq!(count(Stability::Stable), 12);
        assert_eq!(count(Stability::Next), 2);
    }

    #[test]
    fn empty_table_gives_empty_matrix() {
        assert!(expand(&VersionTable::new()).is_empty());
    }
}
