//! Resolution of declared endpoint parameters

use crate::error::{DeployError, Result};
use crate::registry::Registry;
use crate::resolver::ExpressionResolver;
use inbound_api::names::{ATT_PARAMETER_KEY, ATT_PARAMETER_NAME, PARAMETER};
use inbound_api::{ConfigElement, Parameter};
use tracing::{debug, error};

/// How a single parameter gets its value, in precedence order
#[derive(Debug, PartialEq)]
pub enum ParameterSource<'a, E> {
    /// Text entry in the configuration registry
    RegistryKey(&'a str),
    /// Serialized form of the nested element
    Nested(&'a E),
    /// Literal text expanded by the expression resolver
    Text(&'a str),
    /// Nothing declared
    Empty,
}

impl<'a, E: ConfigElement> ParameterSource<'a, E> {
    /// Pick the source of a parameter element; the first that applies wins
    pub fn of(parameter: &'a E) -> Self {
        if let Some(key) = parameter.attribute(ATT_PARAMETER_KEY) {
            ParameterSource::RegistryKey(key)
        } else if let Some(nested) = parameter.first_element() {
            ParameterSource::Nested(nested)
        } else if let Some(text) = parameter.text() {
            ParameterSource::Text(text)
        } else {
            ParameterSource::Empty
        }
    }
}

/// ParameterResolver turns parameter elements into resolved parameters
pub struct ParameterResolver<'a> {
    endpoint: &'a str,
    registry: &'a dyn Registry,
    resolver: &'a dyn ExpressionResolver,
}

impl<'a> ParameterResolver<'a> {
    pub fn new(
        endpoint: &'a str,
        registry: &'a dyn Registry,
        resolver: &'a dyn ExpressionResolver,
    ) -> Self {
        Self {
            endpoint,
            registry,
            resolver,
        }
    }

    /// Resolve every `parameter` child of `parameters`, in declaration order.
    ///
    /// The first failing parameter aborts the whole resolution.
    pub fn resolve_all<E: ConfigElement>(&self, parameters: &E) -> Result<Vec<Parameter>> {
        parameters
            .children_named(PARAMETER)
            .map(|p| self.resolve(p))
            .collect()
    }

    /// Resolve a single parameter element
    pub fn resolve<E: ConfigElement>(&self, parameter: &E) -> Result<Parameter> {
        let name = parameter.attribute(ATT_PARAMETER_NAME).unwrap_or_default();

        match ParameterSource::of(parameter) {
            ParameterSource::RegistryKey(key) => {
                let text = self.lookup_text(key)?;
                debug!("Parameter {} resolved from registry key {}", name, key);
                Ok(Parameter::with_key(name, text, key))
            }
            ParameterSource::Nested(nested) => {
                debug!("Parameter {} resolved from nested element", name);
                Ok(Parameter::new(name, Some(nested.to_xml_string())))
            }
            ParameterSource::Text(text) => {
                let value = self.resolver.resolve(text).map_err(|source| {
                    error!(
                        "Error resolving parameter {} of inbound endpoint {}: {}",
                        name, self.endpoint, source
                    );
                    DeployError::Resolution {
                        endpoint: self.endpoint.to_string(),
                        parameter: name.to_string(),
                        source,
                    }
                })?;
                Ok(Parameter::new(name, Some(value)))
            }
            ParameterSource::Empty => Ok(Parameter::new(name, None)),
        }
    }

    /// Single registry lookup; anything but a text entry is a broken reference
    fn lookup_text(&self, key: &str) -> Result<String> {
        match self.registry.lookup(key) {
            Some(entry) => match entry.as_text() {
                Some(text) => Ok(text.to_string()),
                None => {
                    error!(
                        "Registry entry {} for inbound endpoint {} is {}, expected text",
                        key,
                        self.endpoint,
                        entry.content_type()
                    );
                    Err(self.unresolved(key, Some(entry.content_type())))
                }
            },
            None => {
                error!(
                    "Registry entry {} for inbound endpoint {} not found",
                    key, self.endpoint
                );
                Err(self.unresolved(key, None))
            }
        }
    }

    fn unresolved(&self, key: &str, content_type: Option<&'static str>) -> DeployError {
        DeployError::UnresolvedRegistryReference {
            endpoint: self.endpoint.to_string(),
            key: key.to_string(),
            content_type,
        }
    }
}
