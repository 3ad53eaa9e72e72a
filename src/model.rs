//! AsyncAPI 2.0 document model.
//!
//! [`AsyncApi`] is the base type of every schema definition: a package scan
//! only returns types whose parent chain reaches it. Optional attributes are
//! `Option` so the null-inclusion policy decides whether they appear.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Version written to the `asyncapi` field of new documents.
pub const ASYNCAPI_VERSION: &str = "2.0.0";

/// Root of an AsyncAPI document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsyncApi {
    pub asyncapi: String,
    pub id: Option<String>,
    pub info: Option<Info>,
    pub servers: Option<BTreeMap<String, Server>>,
    pub default_content_type: Option<String>,
    pub channels: Option<BTreeMap<String, ChannelItem>>,
    pub components: Option<Value>,
    pub tags: Option<Vec<Tag>>,
    pub external_docs: Option<ExternalDocumentation>,
}

impl AsyncApi {
    pub fn new(info: Info) -> Self {
        Self {
            info: Some(info),
            ..Self::default()
        }
    }

    /// Add a channel, creating the channel map if needed.
    pub fn channel(mut self, name: impl Into<String>, item: ChannelItem) -> Self {
        self.channels
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), item);
        self
    }

    /// Add a server, creating the server map if needed.
    pub fn server(mut self, name: impl Into<String>, server: Server) -> Self {
        self.servers
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), server);
        self
    }
}

impl Default for AsyncApi {
    fn default() -> Self {
        Self {
            asyncapi: ASYNCAPI_VERSION.to_string(),
            id: None,
            info: None,
            servers: None,
            default_content_type: None,
            channels: None,
            components: None,
            tags: None,
            external_docs: None,
        }
    }
}

crate::__register_schema_type!(
    AsyncApi,
    None,
    Some(crate::__schema_constructor!(AsyncApi, || -> Result<
        AsyncApi,
        std::convert::Infallible,
    > {
        Ok(AsyncApi::default())
    }))
);

/// Metadata about the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
    pub terms_of_service: Option<String>,
    pub contact: Option<Contact>,
    pub license: Option<License>,
}

impl Info {
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: Option<String>,
    pub url: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    pub url: Option<String>,
}

/// A message broker the application can connect to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    pub url: String,
    pub protocol: String,
    pub protocol_version: Option<String>,
    pub description: Option<String>,
    pub variables: Option<BTreeMap<String, ServerVariable>>,
    pub bindings: Option<ServerBindings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerVariable {
    #[serde(rename = "enum")]
    pub allowed: Option<Vec<String>>,
    pub default: Option<String>,
    pub description: Option<String>,
    pub examples: Option<Vec<String>>,
}

/// Operations available on a single channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelItem {
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    pub description: Option<String>,
    pub subscribe: Option<Operation>,
    pub publish: Option<Operation>,
    pub parameters: Option<BTreeMap<String, Value>>,
    pub bindings: Option<ChannelBindings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub operation_id: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<Tag>>,
    pub external_docs: Option<ExternalDocumentation>,
    pub bindings: Option<OperationBindings>,
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub headers: Option<Value>,
    pub payload: Option<Value>,
    pub content_type: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub bindings: Option<MessageBindings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub name: String,
    pub description: Option<String>,
    pub external_docs: Option<ExternalDocumentation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalDocumentation {
    pub description: Option<String>,
    pub url: String,
}

// Protocol bindings

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerBindings {
    pub sqs: Option<SqsServerBinding>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelBindings {
    pub ws: Option<WebSocketsChannelBinding>,
    pub jms: Option<JmsChannelBinding>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationBindings {
    pub jms: Option<JmsOperationBinding>,
    pub stomp: Option<StompOperationBinding>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageBindings {
    pub redis: Option<RedisMessageBinding>,
}

/// How to establish a WebSockets channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSocketsChannelBinding {
    /// `GET` or `POST`.
    pub method: Option<String>,
    /// Schema object for the query parameters.
    pub query: Option<Value>,
    /// Schema object for the HTTP headers.
    pub headers: Option<Value>,
    /// Binding version, `latest` when omitted.
    pub binding_version: Option<String>,
}

// The bindings below carry no properties; their names are reserved.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JmsChannelBinding {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JmsOperationBinding {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StompOperationBinding {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RedisMessageBinding {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SqsServerBinding {}
