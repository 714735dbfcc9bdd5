//! Structured-text rendering of build matrices.
//!
//! A matrix is always emitted as a one-key document, `include`, holding the
//! entry list in order. This is the shape CI systems expect for a job matrix
//! with explicit combinations. YAML is the default; JSON is available for
//! consumers that read the matrix through a JSON decoder.

pub mod document;
pub mod error;
pub mod format;

pub use document::{decode, render, render_checked, IncludeDocument, IncludeRef};
pub use error::{EmitError, Result};
pub use format::{available_formats, JsonSerializer, MatrixSerializer, OutputFormat, YamlSerializer};
