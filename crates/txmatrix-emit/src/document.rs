//! The `include` document wrapping a matrix, and render/decode entry points.

use serde::{Deserialize, Serialize};
use txmatrix_core::Matrix;

use crate::error::{EmitError, Result};
use crate::format::OutputFormat;

/// Borrowed view of a matrix as its one-key document, for writing.
#[derive(Debug, Serialize)]
pub struct IncludeRef<'a> {
    pub include: &'a Matrix,
}

/// Owned `include` document, for reading back.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IncludeDocument {
    pub include: Matrix,
}

/// Render a matrix as an `include` document in the given format.
pub fn render(matrix: &Matrix, format: OutputFormat) -> Result<String> {
    format
        .serializer()
        .to_text(&IncludeRef { include: matrix })
}

/// Read an `include` document back into a matrix.
pub fn decode(text: &str, format: OutputFormat) -> Result<Matrix> {
    Ok(format.serializer().from_text(text)?.include)
}

/// Render, then confirm the text decodes to exactly `matrix`.
///
/// Catches scalars the target format would re-type on the way back in, such
/// as an OS label that reads as a number.
pub fn render_checked(matrix: &Matrix, format: OutputFormat) -> Result<String> {
    let text = render(matrix, format)?;
    let decoded = decode(&text, format)?;
    if decoded != *matrix {
        let detail = match matrix
            .iter()
            .zip(decoded.iter())
            .position(|(a, b)| a != b)
        {
            Some(i) => format!("entry {i} differs"),
            None => format!(
                "expected {} entries, decoded {}",
                matrix.len(),
                decoded.len()
            ),
        };
        return Err(EmitError::RoundTrip {
            format: format.name(),
            detail,
        });
    }
    tracing::debug!(
        format = format.name(),
        bytes = text.len(),
        entries = matrix.len(),
        "rendered matrix"
    );
    Ok(text)
}
