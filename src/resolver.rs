//! Type resolution - turns class names and package names into type handles.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::error::GenerateError;
use crate::loader::ResolutionScope;
use crate::registry::{Constructor, TypeRegistration};
use crate::types::{is_identifier, module_path_of, simple_name};

/// Resolved reference to a schema-definition type.
#[derive(Clone, Copy)]
pub struct TypeHandle {
    registration: &'static TypeRegistration,
}

impl TypeHandle {
    pub(crate) fn new(registration: &'static TypeRegistration) -> Self {
        Self { registration }
    }

    /// Fully-qualified type path.
    pub fn type_path(&self) -> &'static str {
        self.registration.type_path
    }

    /// Last path segment, used for output file names.
    pub fn simple_name(&self) -> &'static str {
        simple_name(self.registration.type_path)
    }

    pub(crate) fn constructor(&self) -> Option<Constructor> {
        self.registration.constructor
    }
}

impl fmt::Debug for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeHandle")
            .field(&self.registration.type_path)
            .finish()
    }
}

impl PartialEq for TypeHandle {
    fn eq(&self, other: &Self) -> bool {
        self.type_path() == other.type_path()
    }
}

impl Eq for TypeHandle {}

/// Resolve one fully-qualified type name within the scope.
///
/// # Errors
///
/// Returns `GenerateError::TypeNotFound` carrying the lookup failure.
pub fn resolve_by_name(scope: &ResolutionScope, name: &str) -> Result<TypeHandle, GenerateError> {
    scope
        .load(name)
        .map_err(|source| GenerateError::TypeNotFound {
            name: name.to_string(),
            source,
        })
}

/// Resolve every concrete subtype of `base_type` declared in `package`.
///
/// A type belongs to the package when its module is the package or nested
/// inside it. Subtyping follows parent links transitively through types
/// visible in the scope; `base_type` itself is never returned. Abstract
/// declarations are skipped. Results are ordered by type path.
///
/// # Errors
///
/// Returns `GenerateError::PackageScan` for a malformed package name or a
/// cyclic parent chain.
pub fn resolve_by_package(
    scope: &ResolutionScope,
    package: &str,
    base_type: &str,
) -> Result<Vec<TypeHandle>, GenerateError> {
    let scan_error = |message: String| GenerateError::PackageScan {
        package: package.to_string(),
        message,
    };

    if package.is_empty() || !package.split("::").all(is_identifier) {
        return Err(scan_error("invalid package name".to_string()));
    }

    let root = package.split("::").next().unwrap_or(package);
    if !scope.contains_crate(root) {
        tracing::warn!(
            package,
            "no artifact on the class path provides crate '{}'",
            root
        );
        return Ok(Vec::new());
    }

    let visible: BTreeMap<&'static str, &'static TypeRegistration> = scope
        .registrations()
        .map(|r| (r.type_path, r))
        .collect();

    let mut found = Vec::new();
    for &reg in visible.values() {
        if reg.is_abstract() || reg.type_path == base_type || !in_package(reg.type_path, package) {
            continue;
        }
        if extends(reg, base_type, &visible).map_err(scan_error)? {
            found.push(TypeHandle::new(reg));
        }
    }

    tracing::debug!(package, types = found.len(), "scanned package");
    Ok(found)
}

fn in_package(type_path: &str, package: &str) -> bool {
    let module = module_path_of(type_path);
    module == package
        || module
            .strip_prefix(package)
            .is_some_and(|rest| rest.starts_with("::"))
}

/// Walk the parent chain of `reg` looking for `base_type`.
fn extends(
    reg: &TypeRegistration,
    base_type: &str,
    visible: &BTreeMap<&'static str, &'static TypeRegistration>,
) -> Result<bool, String> {
    let mut seen = HashSet::new();
    seen.insert(reg.type_path);

    let mut parent = reg.parent;
    while let Some(current) = parent {
        if current == base_type {
            return Ok(true);
        }
        if !seen.insert(current) {
            return Err(format!("cyclic type hierarchy at {}", current));
        }
        parent = match visible.get(current) {
            Some(next) => next.parent,
            None => return Ok(false),
        };
    }
    Ok(false)
}
