//! Schema serialization to JSON or YAML.

use serde_json::Value;

use crate::error::GenerateError;
use crate::registry::SchemaInstance;
use crate::types::{SchemaFormat, SerializationPolicy};

/// Encoding strategy, chosen once from the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Encoder {
    Json { pretty: bool },
    /// Block style, without a `---` document start marker.
    Yaml,
}

/// Turns schema instances into documents under a fixed policy.
#[derive(Debug, Clone)]
pub struct SchemaSerializer {
    policy: SerializationPolicy,
    encoder: Encoder,
}

impl SchemaSerializer {
    pub fn new(policy: SerializationPolicy) -> Self {
        let encoder = match policy.format {
            SchemaFormat::Json => Encoder::Json {
                pretty: policy.pretty_print,
            },
            SchemaFormat::Yaml => Encoder::Yaml,
        };
        Self { policy, encoder }
    }

    pub fn policy(&self) -> &SerializationPolicy {
        &self.policy
    }

    /// Serialize one instance.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::Serialization` naming `type_name` when the
    /// instance cannot be represented in the target format.
    pub fn serialize(
        &self,
        instance: &dyn SchemaInstance,
        type_name: &str,
    ) -> Result<String, GenerateError> {
        let failed = |source: Box<dyn std::error::Error + Send + Sync>| {
            GenerateError::Serialization {
                type_name: type_name.to_string(),
                source,
            }
        };

        let mut value = instance.to_value().map_err(|e| failed(Box::new(e)))?;
        if !self.policy.include_nulls {
            strip_nulls(&mut value);
        }

        let document = match self.encoder {
            Encoder::Json { pretty: true } => {
                serde_json::to_string_pretty(&value).map_err(|e| failed(Box::new(e)))?
            }
            Encoder::Json { pretty: false } => {
                serde_json::to_string(&value).map_err(|e| failed(Box::new(e)))?
            }
            Encoder::Yaml => serde_yaml::to_string(&value).map_err(|e| failed(Box::new(e)))?,
        };
        Ok(document)
    }
}

/// Remove null members from every object in the tree.
///
/// Array elements are left alone; only attributes are subject to the policy.
fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            for child in map.values_mut() {
                strip_nulls(child);
            }
        }
        Value::Array(items) => {
            for item in items {
                strip_nulls(item);
            }
        }
        _ => {}
    }
}
