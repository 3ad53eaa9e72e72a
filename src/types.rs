//! Core types for schema generation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

/// Default suffix segment of every output file name.
pub const DEFAULT_SCHEMA_FILE_NAME: &str = "asyncapi";

/// Default output directory.
pub const DEFAULT_SCHEMA_FILE_PATH: &str = "generated/asyncapi";

/// Directory used when the configured output directory is blank.
pub const FALLBACK_SCHEMA_DIR: &str = "asyncapi-schemas";

/// Default run label, used in class path errors.
pub const DEFAULT_RUN_NAME: &str = "generateAsyncApi";

/// Output encoding of generated documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaFormat {
    #[default]
    Json,
    Yaml,
}

impl SchemaFormat {
    /// Parse a format value, rejecting anything but `json` and `yaml`.
    pub fn parse(value: &str) -> Result<Self, GenerateError> {
        match value {
            "json" => Ok(SchemaFormat::Json),
            "yaml" => Ok(SchemaFormat::Yaml),
            _ => Err(GenerateError::UnsupportedFormat {
                value: value.to_string(),
            }),
        }
    }

    /// File extension for documents in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            SchemaFormat::Json => "json",
            SchemaFormat::Yaml => "yaml",
        }
    }
}

impl FromStr for SchemaFormat {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SchemaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// How instances are turned into documents. Fixed for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializationPolicy {
    pub format: SchemaFormat,
    /// When false, null attributes are left out of the output.
    pub include_nulls: bool,
    /// Multi-line indented output. Only JSON has a compact form.
    pub pretty_print: bool,
}

impl SerializationPolicy {
    /// Build a policy from a raw format value.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::UnsupportedFormat` for anything but `json` or `yaml`.
    pub fn new(format: &str, include_nulls: bool, pretty_print: bool) -> Result<Self, GenerateError> {
        Ok(Self {
            format: SchemaFormat::parse(format)?,
            include_nulls,
            pretty_print,
        })
    }
}

impl Default for SerializationPolicy {
    fn default() -> Self {
        Self {
            format: SchemaFormat::Json,
            include_nulls: false,
            pretty_print: true,
        }
    }
}

/// Returns the last `::` segment of a type path.
pub fn simple_name(type_path: &str) -> &str {
    type_path
        .rsplit_once("::")
        .map(|(_, name)| name)
        .unwrap_or(type_path)
}

/// Returns the module part of a type path, or `""` for a bare name.
pub fn module_path_of(type_path: &str) -> &str {
    type_path
        .rsplit_once("::")
        .map(|(module, _)| module)
        .unwrap_or("")
}

/// Check that `s` is a plain Rust identifier.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    s != "_" && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
