//! Run configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;
use crate::types::{
    SerializationPolicy, DEFAULT_RUN_NAME, DEFAULT_SCHEMA_FILE_NAME, DEFAULT_SCHEMA_FILE_PATH,
};

/// Inputs of one generation run.
///
/// Field names follow the build plugin options (`classNames`,
/// `schemaFileFormat`, ...) so config files can be shared with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct DiscoveryRequest {
    /// Run label, used in class path errors.
    pub name: String,
    /// Fully-qualified type names, processed in order.
    pub class_names: Vec<String>,
    /// Module paths scanned for subtypes of the base type.
    pub package_names: Vec<String>,
    pub schema_file_name: String,
    /// `json` or `yaml`. Kept as text so bad values are reported, not rejected by the parser.
    pub schema_file_format: String,
    /// Output directory. Blank means `asyncapi-schemas`.
    pub schema_file_path: String,
    pub include_nulls: bool,
    pub pretty_print: bool,
    pub class_path: Vec<PathBuf>,
    pub build_classpath: Vec<PathBuf>,
}

impl Default for DiscoveryRequest {
    fn default() -> Self {
        Self {
            name: DEFAULT_RUN_NAME.to_string(),
            class_names: Vec::new(),
            package_names: Vec::new(),
            schema_file_name: DEFAULT_SCHEMA_FILE_NAME.to_string(),
            schema_file_format: "json".to_string(),
            schema_file_path: DEFAULT_SCHEMA_FILE_PATH.to_string(),
            include_nulls: false,
            pretty_print: true,
            class_path: Vec::new(),
            build_classpath: Vec::new(),
        }
    }
}

impl DiscoveryRequest {
    /// Load a request from a YAML (`.yaml`, `.yml`) or JSON file.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::ConfigRead` if the file can't be read, or
    /// `GenerateError::ConfigParse` if its content is invalid.
    pub fn from_file(path: &Path) -> Result<Self, GenerateError> {
        let content = std::fs::read_to_string(path).map_err(|source| GenerateError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );

        let parsed = if is_yaml {
            serde_yaml::from_str(&content).map_err(|e| e.to_string())
        } else {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        };

        parsed.map_err(|message| GenerateError::ConfigParse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Whether at least one class or package name was given.
    pub fn has_targets(&self) -> bool {
        !self.class_names.is_empty() || !self.package_names.is_empty()
    }

    /// Derive the serialization policy, validating the format.
    pub fn policy(&self) -> Result<SerializationPolicy, GenerateError> {
        SerializationPolicy::new(&self.schema_file_format, self.include_nulls, self.pretty_print)
    }
}
