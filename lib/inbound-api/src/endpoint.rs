//! Assembled inbound endpoint descriptor
use crate::{AspectConfiguration, MessageHandler};
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// A declared endpoint parameter after resolution
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    /// Resolved value; `None` means no value was declared, not an empty one
    pub value: Option<String>,
    /// Registry key the value came from, kept so the runtime can re-resolve it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
            key: None,
        }
    }

    pub fn with_key(name: impl Into<String>, value: String, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
            key: Some(key.into()),
        }
    }
}

/// InboundEndpoint is the typed configuration the runtime receives traffic with
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundEndpoint {
    pub name: String,
    pub protocol: Option<String>,
    /// Concrete listener implementation
    pub class_impl: Option<String>,
    pub suspended: bool,
    /// Sequence incoming messages are injected into
    pub inject_sequence: Option<String>,
    /// Sequence invoked when processing fails
    pub error_sequence: Option<String>,
    pub file_name: String,
    pub aspect: AspectConfiguration,
    /// Parameters in declaration order, duplicates preserved
    pub parameters: Vec<Parameter>,
    /// Handlers in invocation order
    #[serde(serialize_with = "serialize_handlers")]
    pub handlers: Vec<Box<dyn MessageHandler>>,
}

impl InboundEndpoint {
    /// Value of the first parameter with the given name
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.name == name)
            .and_then(|p| p.value.as_deref())
    }

    /// Registry key of the first parameter with the given name
    pub fn parameter_key(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.name == name)
            .and_then(|p| p.key.as_deref())
    }

    /// Parameters as a map; the first declaration of a name wins
    pub fn parameters_map(&self) -> HashMap<&str, Option<&str>> {
        let mut map = HashMap::new();
        for param in &self.parameters {
            map.entry(param.name.as_str())
                .or_insert_with(|| param.value.as_deref());
        }
        map
    }

    /// Names of the handlers in invocation order
    pub fn handler_names(&self) -> Vec<&str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }
}

/// Handlers are compared by name: every assembly instantiates fresh ones.
impl PartialEq for InboundEndpoint {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.protocol == other.protocol
            && self.class_impl == other.class_impl
            && self.suspended == other.suspended
            && self.inject_sequence == other.inject_sequence
            && self.error_sequence == other.error_sequence
            && self.file_name == other.file_name
            && self.aspect == other.aspect
            && self.parameters == other.parameters
            && self.handler_names() == other.handler_names()
    }
}

fn serialize_handlers<S>(
    handlers: &[Box<dyn MessageHandler>],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(handlers.iter().map(|h| h.name()))
}
