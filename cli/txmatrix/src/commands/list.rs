//! `txmatrix list`: summarize the version table.

use std::fmt::Write;
use std::path::Path;

use anyhow::Result;
use txmatrix_core::VersionTable;

use super::load_table;

/// Print the table summary.
pub fn run(table: Option<&Path>) -> Result<()> {
    let table = load_table(table)?;
    print!("{}", summary(&table));
    Ok(())
}

/// Human-readable summary: one line per version, then the entry count.
pub fn summary(table: &VersionTable) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Versions:");
    let _ = writeln!(out);
    for (version, config) in table.iter() {
        let _ = writeln!(
            out,
            "  {version:<16} {:<10} {}",
            config.stability(),
            config.oses().join(", ")
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} versions, {} matrix entries",
        table.len(),
        table.total_entries()
    );
    out
}
