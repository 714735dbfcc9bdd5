//! `txmatrix check`: validate the version table.

use std::path::Path;

use anyhow::{bail, Result};
use txmatrix_core::{has_errors, validate_table};

use super::load_table;

/// Print every validation issue; fail if any is an error.
pub fn run(table: Option<&Path>) -> Result<()> {
    let table = load_table(table)?;
    let issues = validate_table(&table);

    for issue in &issues {
        println!("{issue}");
    }
    if has_errors(&issues) {
        bail!("version table has errors");
    }
    println!(
        "ok: {} versions, {} matrix entries{}",
        table.len(),
        table.total_entries(),
        if issues.is_empty() {
            String::new()
        } else {
            format!(" ({} warnings)", issues.len())
        }
    );
    Ok(())
}
