//! Output formats and the serializer seam.

use crate::document::{IncludeDocument, IncludeRef};
use crate::error::{EmitError, Result};

/// The document format to emit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    /// Parse a format name.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            _ => Err(EmitError::UnknownFormat {
                name: s.to_string(),
            }),
        }
    }

    /// Display name for this format.
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Yaml => "yaml",
            OutputFormat::Json => "json",
        }
    }

    /// The serializer implementing this format.
    pub fn serializer(&self) -> &'static dyn MatrixSerializer {
        match self {
            OutputFormat::Yaml => &YamlSerializer,
            OutputFormat::Json => &JsonSerializer,
        }
    }
}

/// List all supported output formats.
pub fn available_formats() -> &'static [OutputFormat] {
    &[OutputFormat::Yaml, OutputFormat::Json]
}

/// Turns a document into text and back.
///
/// Implementations must keep field order as declared on the serialized types
/// (no key sorting), render nested mappings and sequences in block style, and
/// end the text with a newline.
pub trait MatrixSerializer {
    fn format(&self) -> OutputFormat;

    fn to_text(&self, doc: &IncludeRef<'_>) -> Result<String>;

    fn from_text(&self, text: &str) -> Result<IncludeDocument>;
}

/// Block-style YAML via `serde_yaml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlSerializer;

/// Pretty-printed JSON via `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl MatrixSerializer for YamlSerializer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Yaml
    }

    fn to_text(&self, doc: &IncludeRef<'_>) -> Result<String> {
        Ok(terminate(serde_yaml::to_string(doc)?))
    }

    fn from_text(&self, text: &str) -> Result<IncludeDocument> {
        Ok(serde_yaml::from_str(text)?)
    }
}

impl MatrixSerializer for JsonSerializer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Json
    }

    fn to_text(&self, doc: &IncludeRef<'_>) -> Result<String> {
        Ok(terminate(serde_json::to_string_pretty(doc)?))
    }

    fn from_text(&self, text: &str) -> Result<IncludeDocument> {
        Ok(serde_json::from_str(text)?)
    }
}

fn terminate(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
