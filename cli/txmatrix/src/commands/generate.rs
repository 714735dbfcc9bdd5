//! `txmatrix generate`: print the build matrix.

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use txmatrix_core::{expand, has_errors, validate_table, Severity};
use txmatrix_emit::{render_checked, OutputFormat};

use super::load_table;

/// Build the complete document text without writing anything.
pub fn produce(table: Option<&Path>, format: Option<&str>) -> Result<String> {
    let format = match format {
        Some(name) => OutputFormat::parse(name)?,
        None => OutputFormat::default(),
    };
    let table = load_table(table)?;

    let issues = validate_table(&table);
    for issue in issues.iter().filter(|i| i.severity == Severity::Warning) {
        tracing::warn!("{issue}");
    }
    if has_errors(&issues) {
        let errors: Vec<String> = issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .map(ToString::to_string)
            .collect();
        bail!("version table is invalid:\n  {}", errors.join("\n  "));
    }

    let matrix = expand(&table);
    render_checked(&matrix, format).context("rendering build matrix")
}

/// Print the document to stdout in a single write.
pub fn run(table: Option<&Path>, format: Option<&str>) -> Result<()> {
    let text = produce(table, format)?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .context("writing build matrix to stdout")
}

#[cfg(test)]
mod tests {
    use super::*;
    use txmatrix_emit::decode;

    #[test]
    fn default_output_is_shipped_yaml() {
        let text = produce(None, None).unwrap();
        assert!(text.starts_with("include:\n- version: 4.0.3\n"));
        let matrix = decode(&text, OutputFormat::Yaml).unwrap();
        assert_eq!(matrix.len(), 16);
    }

    #[test]
    fn json_output() {
        let text = produce(None, Some("json")).unwrap();
        let matrix = decode(&text, OutputFormat::Json).unwrap();
        assert_eq!(matrix.len(), 16);
    }

    #[test]
    fn unknown_format_fails() {
        assert!(produce(None, Some("csv")).is_err());
    }

    #[test]
    fn empty_table_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        std::fs::write(&path, "# nothing here\n").unwrap();
        let err = produce(Some(&path), None).unwrap_err();
        assert!(format!("{err:#}").contains("no versions"));
    }
}
