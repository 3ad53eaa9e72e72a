//! Generation pipeline.
//!
//! A run validates its inputs, builds the resolution scope, resolves every
//! class name and then every package, and finally instantiates, serializes
//! and writes each discovered type in turn. The first failure ends the run;
//! files written before it stay on disk.

use std::path::PathBuf;

use crate::config::DiscoveryRequest;
use crate::error::GenerateError;
use crate::instantiate::instantiate;
use crate::loader::build_scope;
use crate::model::AsyncApi;
use crate::registry::SchemaDefinition;
use crate::resolver::{resolve_by_name, resolve_by_package, TypeHandle};
use crate::serializer::SchemaSerializer;
use crate::writer::SchemaWriter;

/// One written document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSchema {
    pub type_path: String,
    pub path: PathBuf,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Writes in processing order. Types sharing a simple name appear once
    /// per write, all with the same path.
    pub generated: Vec<GeneratedSchema>,
}

/// Run the pipeline once.
///
/// # Errors
///
/// Returns the first error met, in the order input validation, class path,
/// class names, packages, then per-type generation.
pub fn generate(request: &DiscoveryRequest) -> Result<GenerationReport, GenerateError> {
    tracing::info!(run = %request.name, "resolving AsyncAPI specification");

    if !request.has_targets() {
        return Err(GenerateError::NoDiscoveryTargets);
    }
    let policy = request.policy()?;

    let scope = build_scope(&request.name, &request.class_path, &request.build_classpath)?;

    let mut handles: Vec<TypeHandle> = Vec::new();

    if !request.class_names.is_empty() {
        tracing::info!("handling class names");
        for name in &request.class_names {
            handles.push(resolve_by_name(&scope, name)?);
        }
    }

    if !request.package_names.is_empty() {
        tracing::info!("handling package names");
        for package in &request.package_names {
            handles.extend(resolve_by_package(&scope, package, AsyncApi::TYPE_PATH)?);
        }
    }

    let serializer = SchemaSerializer::new(policy);
    let writer = SchemaWriter::new(
        &request.schema_file_path,
        request.schema_file_name.as_str(),
        serializer.policy().format,
    );

    let mut report = GenerationReport::default();
    for handle in &handles {
        let path = generate_schema(handle, &serializer, &writer)?;
        tracing::info!(schema = handle.type_path(), path = %path.display(), "wrote schema");
        report.generated.push(GeneratedSchema {
            type_path: handle.type_path().to_string(),
            path,
        });
    }

    Ok(report)
}

fn generate_schema(
    handle: &TypeHandle,
    serializer: &SchemaSerializer,
    writer: &SchemaWriter,
) -> Result<PathBuf, GenerateError> {
    let instance = instantiate(handle)?;
    let document = serializer.serialize(instance.as_ref(), handle.simple_name())?;
    writer.write(&document, handle.simple_name())
}
