//! Schema file output.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GenerateError;
use crate::types::{SchemaFormat, FALLBACK_SCHEMA_DIR};

/// Persists documents under deterministic file names.
///
/// Files are named `{simpleTypeName}-{schemaFileName}.{json|yaml}`. Two
/// types sharing a simple name map to the same file, and the later write
/// replaces the earlier one.
#[derive(Debug, Clone)]
pub struct SchemaWriter {
    directory: PathBuf,
    schema_file_name: String,
    format: SchemaFormat,
}

impl SchemaWriter {
    /// Create a writer. A blank `output_dir` falls back to `asyncapi-schemas`.
    pub fn new(output_dir: &str, schema_file_name: impl Into<String>, format: SchemaFormat) -> Self {
        let directory = if output_dir.trim().is_empty() {
            PathBuf::from(FALLBACK_SCHEMA_DIR)
        } else {
            PathBuf::from(output_dir)
        };
        Self {
            directory,
            schema_file_name: schema_file_name.into(),
            format,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Output path for a type with the given simple name.
    pub fn output_path(&self, simple_name: &str) -> PathBuf {
        self.directory.join(format!(
            "{}-{}.{}",
            simple_name,
            self.schema_file_name,
            self.format.extension()
        ))
    }

    /// Write `document`, replacing any existing file.
    ///
    /// Missing directories are created first.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::Write` naming the type and the directory or
    /// file that failed.
    pub fn write(&self, document: &str, simple_name: &str) -> Result<PathBuf, GenerateError> {
        let failed = |path: &Path, source| GenerateError::Write {
            type_name: simple_name.to_string(),
            path: path.to_path_buf(),
            source,
        };

        fs::create_dir_all(&self.directory).map_err(|e| failed(&self.directory, e))?;

        let path = self.output_path(simple_name);
        tracing::debug!(schema = simple_name, "generated schema:\n{}", document);

        fs::write(&path, document.as_bytes()).map_err(|e| failed(&path, e))?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn writer_in(dir: &Path, format: SchemaFormat) -> SchemaWriter {
        SchemaWriter::new(dir.to_str().unwrap(), "asyncapi", format)
    }

    #[test]
    fn blank_dir_falls_back() {
        let writer = SchemaWriter::new("  ", "asyncapi", SchemaFormat::Json);
        assert_eq!(writer.directory(), Path::new("asyncapi-schemas"));

        let writer = SchemaWriter::new("", "asyncapi", SchemaFormat::Json);
        assert_eq!(writer.directory(), Path::new("asyncapi-schemas"));
    }

    #[test]
    fn fallback_dir_names_files() {
        let writer = SchemaWriter::new("", "events", SchemaFormat::Yaml);
        assert_eq!(
            writer.output_path("OrdersApi"),
            Path::new("asyncapi-schemas/OrdersApi-events.yaml")
        );
    }

    #[test]
    fn configured_dir_is_verbatim() {
        let writer = SchemaWriter::new("generated/asyncapi", "asyncapi", SchemaFormat::Json);
        assert_eq!(writer.directory(), Path::new("generated/asyncapi"));
    }

    #[test]
    fn file_name_follows_format() {
        let writer = SchemaWriter::new("out", "events", SchemaFormat::Json);
        assert_eq!(
            writer.output_path("OrdersApi"),
            Path::new("out/OrdersApi-events.json")
        );

        let writer = SchemaWriter::new("out", "events", SchemaFormat::Yaml);
        assert_eq!(
            writer.output_path("OrdersApi"),
            Path::new("out/OrdersApi-events.yaml")
        );
    }

    #[test]
    fn creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let writer = writer_in(&nested, SchemaFormat::Json);

        let path = writer.write("{}", "Api").unwrap();
        assert_eq!(path, nested.join("Api-asyncapi.json"));
        assert_eq!(fs::read_to_string(path).unwrap(), "{}");

        // existing directory is fine
        writer.write("{}", "Other").unwrap();
    }

    #[test]
    fn replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let writer = writer_in(dir.path(), SchemaFormat::Yaml);

        writer.write("title: a much longer first document\n", "Api").unwrap();
        let path = writer.write("title: b\n", "Api").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "title: b\n");
    }

    #[test]
    fn write_failure_names_path() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "not a directory").unwrap();

        let writer = writer_in(&blocker.join("out"), SchemaFormat::Json);
        match writer.write("{}", "Api").unwrap_err() {
            GenerateError::Write {
                type_name, path, ..
            } => {
                assert_eq!(type_name, "Api");
                assert!(path.starts_with(&blocker));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
