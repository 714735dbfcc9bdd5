//! CLI subcommand implementations.

pub mod check;
pub mod generate;
pub mod list;

use std::path::Path;

use anyhow::{Context, Result};
use txmatrix_core::VersionTable;

/// Load the table named on the command line, or the shipped one.
pub fn load_table(path: Option<&Path>) -> Result<VersionTable> {
    match path {
        Some(path) => VersionTable::load(path)
            .with_context(|| format!("loading version table {}", path.display())),
        None => VersionTable::shipped().context("parsing shipped version table"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_table_by_default() {
        let table = load_table(None).unwrap();
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn missing_file_mentions_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = load_table(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("nope.toml"));
    }
}
