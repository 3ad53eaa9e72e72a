//! Error types for schema discovery and emission.

use std::path::PathBuf;
use thiserror::Error;

/// Why a type name could not be loaded from a resolution scope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no schema type registered as {type_path}")]
    NotRegistered { type_path: String },

    #[error("{type_path} is registered but crate '{crate_name}' is not on the class path")]
    OutsideScope {
        type_path: String,
        crate_name: String,
    },
}

/// Errors that halt a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    // Invalid input (exit code 2)
    #[error("classNames or packageNames are required")]
    NoDiscoveryTargets,

    #[error("schemaFileFormat={value} not recognized: expected json or yaml")]
    UnsupportedFormat { value: String },

    // Class path errors (exit code 3)
    #[error("can't create class path for run '{run}': {}: {reason}", .path.display())]
    Classpath {
        run: String,
        path: PathBuf,
        reason: String,
    },

    // Discovery errors (exit code 2)
    #[error("loading type error: {name}: {source}")]
    TypeNotFound {
        name: String,
        #[source]
        source: LookupError,
    },

    #[error("loading package error: {package}: {message}")]
    PackageScan { package: String, message: String },

    // Generation errors (exit code 2)
    #[error("can't instantiate {type_name} because {message}")]
    Instantiation { type_name: String, message: String },

    #[error("can't serialize {type_name} because {source}")]
    Serialization {
        type_name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // Output errors (exit code 3)
    #[error("can't write {type_name} to {}: {source}", .path.display())]
    Write {
        type_name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },
}

impl GenerateError {
    /// Returns the exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GenerateError::Classpath { .. }
            | GenerateError::Write { .. }
            | GenerateError::ConfigRead { .. } => 3,
            _ => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(GenerateError::NoDiscoveryTargets.exit_code(), 2);

        let err = GenerateError::Classpath {
            run: "generateAsyncApi".into(),
            path: PathBuf::from(""),
            reason: "empty path".into(),
        };
        assert_eq!(err.exit_code(), 3);

        let err = GenerateError::Write {
            type_name: "Api".into(),
            path: PathBuf::from("out/Api-asyncapi.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.exit_code(), 3);

        let err = GenerateError::Instantiation {
            type_name: "Api".into(),
            message: "boom".into(),
        };
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn messages_name_the_offender() {
        let err = GenerateError::TypeNotFound {
            name: "orders::Missing".into(),
            source: LookupError::NotRegistered {
                type_path: "orders::Missing".into(),
            },
        };
        assert_eq!(
            err.to_string(),
            "loading type error: orders::Missing: no schema type registered as orders::Missing"
        );

        let err = GenerateError::UnsupportedFormat {
            value: "toml".into(),
        };
        assert!(err.to_string().contains("schemaFileFormat=toml"));

        let err = GenerateError::Classpath {
            run: "docs".into(),
            path: PathBuf::from("/"),
            reason: "no file name".into(),
        };
        assert_eq!(
            err.to_string(),
            "can't create class path for run 'docs': /: no file name"
        );

        let err = GenerateError::Write {
            type_name: "OrdersApi".into(),
            path: PathBuf::from("out"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "not a directory"),
        };
        assert_eq!(
            err.to_string(),
            "can't write OrdersApi to out: not a directory"
        );
    }

    #[test]
    fn lookup_error_display() {
        let err = LookupError::OutsideScope {
            type_path: "billing::api::BillingApi".into(),
            crate_name: "billing".into(),
        };
        assert_eq!(
            err.to_string(),
            "billing::api::BillingApi is registered but crate 'billing' is not on the class path"
        );
    }
}
