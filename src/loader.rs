//! Resolution scope construction from artifact paths.
//!
//! Each artifact path names a compiled crate (an `.rlib`, a shared library,
//! a binary, or a crate directory). The scope only exposes registered types
//! whose declaring crate appears among its artifacts.

use std::path::{Path, PathBuf};

use crate::error::{GenerateError, LookupError};
use crate::registry::{registrations, TypeRegistration};
use crate::resolver::TypeHandle;
use crate::types::is_identifier;

/// Extensions of compiled artifacts that are stripped from the file name.
const ARTIFACT_EXTENSIONS: &[&str] = &["rlib", "rmeta", "so", "dylib", "a", "dll", "lib", "exe", "d"];

/// Extensions whose file names carry a `lib` prefix.
const LIB_PREFIXED_EXTENSIONS: &[&str] = &["rlib", "rmeta", "so", "dylib", "a"];

/// Minimum length of a cargo metadata hash suffix.
const MIN_HASH_LEN: usize = 8;

/// A single entry of the class path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLocation {
    pub path: PathBuf,
    /// Crate whose types this artifact provides.
    pub crate_name: String,
}

impl ArtifactLocation {
    /// Convert a path into an artifact location.
    ///
    /// Returns the reason when no crate name can be derived from the path.
    pub fn from_path(path: &Path) -> Result<Self, String> {
        if path.as_os_str().is_empty() {
            return Err("empty path".to_string());
        }

        let file_name = path
            .file_name()
            .ok_or_else(|| "path has no file name".to_string())?
            .to_str()
            .ok_or_else(|| "file name is not valid UTF-8".to_string())?;

        let crate_name = crate_name_for(file_name);
        if !is_identifier(&crate_name) {
            return Err(format!("'{}' is not a valid crate name", crate_name));
        }

        Ok(Self {
            path: path.to_path_buf(),
            crate_name,
        })
    }
}

/// Derive a crate name from an artifact file name.
///
/// `libfoo_bar-1a2b3c4d5e6f7a8b.rlib`, `foo-bar` and `foo_bar` all map to `foo_bar`.
fn crate_name_for(file_name: &str) -> String {
    let mut stem = file_name;
    if let Some((base, ext)) = file_name.rsplit_once('.') {
        if ARTIFACT_EXTENSIONS.contains(&ext) {
            stem = base;
            if LIB_PREFIXED_EXTENSIONS.contains(&ext) {
                stem = stem.strip_prefix("lib").unwrap_or(stem);
            }
        }
    }

    if let Some((base, hash)) = stem.rsplit_once('-') {
        if hash.len() >= MIN_HASH_LEN && hash.chars().all(|c| c.is_ascii_hexdigit()) {
            stem = base;
        }
    }

    stem.replace('-', "_")
}

/// Run-local lookup context built from the class path.
///
/// Dropped at the end of each run; nothing loaded through it outlives the run.
#[derive(Debug)]
pub struct ResolutionScope {
    run_name: String,
    artifacts: Vec<ArtifactLocation>,
}

impl ResolutionScope {
    pub fn run_name(&self) -> &str {
        &self.run_name
    }

    /// Artifact locations, in class path order.
    pub fn artifacts(&self) -> &[ArtifactLocation] {
        &self.artifacts
    }

    /// Whether some artifact provides `crate_name`.
    pub fn contains_crate(&self, crate_name: &str) -> bool {
        self.artifacts.iter().any(|a| a.crate_name == crate_name)
    }

    /// Registrations visible through this scope.
    pub fn registrations(&self) -> impl Iterator<Item = &'static TypeRegistration> + '_ {
        registrations().filter(move |r| self.contains_crate(r.crate_name()))
    }

    /// Load a type by fully-qualified name.
    ///
    /// # Errors
    ///
    /// `LookupError::OutsideScope` when the type exists but its crate is not
    /// on the class path, `LookupError::NotRegistered` otherwise.
    pub fn load(&self, type_path: &str) -> Result<TypeHandle, LookupError> {
        match registrations().find(|r| r.type_path == type_path) {
            Some(reg) if self.contains_crate(reg.crate_name()) => Ok(TypeHandle::new(reg)),
            Some(reg) => Err(LookupError::OutsideScope {
                type_path: type_path.to_string(),
                crate_name: reg.crate_name().to_string(),
            }),
            None => Err(LookupError::NotRegistered {
                type_path: type_path.to_string(),
            }),
        }
    }
}

impl Drop for ResolutionScope {
    fn drop(&mut self) {
        tracing::trace!(run = %self.run_name, "released resolution scope");
    }
}

/// Build the resolution scope for a run.
///
/// The scope is the union of both path sets, in order, without duplicates.
///
/// # Errors
///
/// Returns `GenerateError::Classpath` naming the run and the first path
/// that cannot be converted.
pub fn build_scope(
    run_name: &str,
    artifact_paths: &[PathBuf],
    auxiliary_paths: &[PathBuf],
) -> Result<ResolutionScope, GenerateError> {
    let mut artifacts: Vec<ArtifactLocation> = Vec::new();

    for path in artifact_paths.iter().chain(auxiliary_paths) {
        let location =
            ArtifactLocation::from_path(path).map_err(|reason| GenerateError::Classpath {
                run: run_name.to_string(),
                path: path.clone(),
                reason,
            })?;
        if !artifacts.iter().any(|a| a.path == location.path) {
            artifacts.push(location);
        }
    }

    tracing::debug!(
        run = run_name,
        artifacts = artifacts.len(),
        "built resolution scope"
    );

    Ok(ResolutionScope {
        run_name: run_name.to_string(),
        artifacts,
    })
}
