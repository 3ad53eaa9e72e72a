//! AsyncAPI Schema Generator
//!
//! Build-time discovery and emission of AsyncAPI documents.
//!
//! Schema-definition types register themselves with [`schema_type!`]. A run
//! takes a [`DiscoveryRequest`] naming types and packages (module paths),
//! resolves them against the artifacts on its class path, constructs each
//! type with no arguments, serializes it to JSON or YAML and writes
//! `{simpleTypeName}-{schemaFileName}.{json|yaml}` into the output directory.
//!
//! # Example
//!
//! ```
//! use asyncapi_gen::model::{AsyncApi, ChannelItem, Info};
//! use asyncapi_gen::{generate, DiscoveryRequest};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! pub struct OrdersApi(AsyncApi);
//!
//! impl Default for OrdersApi {
//!     fn default() -> Self {
//!         OrdersApi(AsyncApi::new(Info::new("Orders", "1.0.0"))
//!             .channel("orders/created", ChannelItem::default()))
//!     }
//! }
//!
//! asyncapi_gen::schema_type!(OrdersApi);
//!
//! let out = tempfile::tempdir().unwrap();
//! let request = DiscoveryRequest {
//!     class_names: vec![format!("{}::OrdersApi", module_path!())],
//!     class_path: vec![module_path!().into()],
//!     schema_file_path: out.path().to_str().unwrap().into(),
//!     ..DiscoveryRequest::default()
//! };
//!
//! let report = generate(&request).unwrap();
//! assert!(report.generated[0].path.ends_with("OrdersApi-asyncapi.json"));
//! ```
//!
//! # Options
//!
//! | Option | Default | Effect |
//! |--------|---------|--------|
//! | `classNames` | `[]` | Types to generate, in order |
//! | `packageNames` | `[]` | Module paths scanned for AsyncAPI subtypes |
//! | `schemaFileName` | `"asyncapi"` | Suffix segment of output file names |
//! | `schemaFileFormat` | `"json"` | `json` or `yaml` |
//! | `schemaFilePath` | `"generated/asyncapi"` | Output directory; blank means `asyncapi-schemas` |
//! | `includeNulls` | `false` | Write null attributes explicitly |
//! | `prettyPrint` | `true` | Indented JSON output |
//! | `classPath` | required | Artifacts providing schema types |
//! | `buildClasspath` | `[]` | Supplementary artifacts |

pub mod cli;
mod config;
mod error;
mod instantiate;
mod loader;
pub mod model;
mod pipeline;
mod registry;
mod resolver;
mod serializer;
mod types;
mod writer;

pub use config::DiscoveryRequest;
pub use error::{GenerateError, LookupError};
pub use instantiate::instantiate;
pub use loader::{build_scope, ArtifactLocation, ResolutionScope};
pub use pipeline::{generate, GeneratedSchema, GenerationReport};
pub use registry::{
    registrations, BoxError, Constructor, SchemaDefinition, SchemaInstance, TypeRegistration,
};
pub use resolver::{resolve_by_name, resolve_by_package, TypeHandle};
pub use serializer::SchemaSerializer;
pub use types::{SchemaFormat, SerializationPolicy};
pub use writer::SchemaWriter;

#[doc(hidden)]
pub use inventory;
