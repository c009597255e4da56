//! Handler capability registry and built-in handlers
//!
//! Handler classes named in a definition are looked up here and instantiated
//! with no arguments. Only identifiers registered up front can be instantiated,
//! so a definition can never make the deployer construct an arbitrary type.

use crate::error::{DeployError, Result};
use inbound_api::names::{ATT_CLASS, HANDLER};
use inbound_api::{ConfigElement, MessageHandler};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error};

/// Identifier of the built-in [`PassThroughHandler`]
pub const PASS_THROUGH_HANDLER: &str = "inbound_core::handler::PassThroughHandler";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    #[error("Handler class not found: {0}")]
    ClassNotFound(String),

    #[error("Handler construction failed: {0}")]
    Construction(String),
}

/// Outcome of instantiating a handler
pub type HandlerResult = std::result::Result<Box<dyn MessageHandler>, HandlerError>;

/// Zero-argument constructor for a handler
pub type HandlerFactory = Arc<dyn Fn() -> HandlerResult + Send + Sync>;

/// HandlerRegistry maps handler class identifiers to their constructors
#[derive(Clone, Default)]
pub struct HandlerRegistry {
    factories: HashMap<String, HandlerFactory>,
}

impl HandlerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in handler registered
    pub fn with_builtins() -> Self {
        Self::new().register_pass_through(PASS_THROUGH_HANDLER)
    }

    /// Register a class whose instances are [`PassThroughHandler`]s named after it
    pub fn register_pass_through(self, class: impl Into<String>) -> Self {
        let class = class.into();
        let name = class.clone();
        self.register(class, move || Ok(Box::new(PassThroughHandler::new(name.clone()))))
    }

    /// Register a constructor under an identifier, replacing any previous one
    pub fn register<F>(mut self, class: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> HandlerResult + Send + Sync + 'static,
    {
        let class = class.into();
        debug!("Registered handler class: {}", class);
        self.factories.insert(class, Arc::new(factory));
        self
    }

    /// Whether an identifier is registered
    pub fn contains(&self, class: &str) -> bool {
        self.factories.contains_key(class)
    }

    /// Resolve an identifier and instantiate a fresh handler
    pub fn instantiate(&self, class: &str) -> HandlerResult {
        let factory = self
            .factories
            .get(class)
            .ok_or_else(|| HandlerError::ClassNotFound(class.to_string()))?;
        factory()
    }

    /// Registered identifiers, sorted
    pub fn classes(&self) -> Vec<&str> {
        let mut classes: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        classes.sort_unstable();
        classes
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("classes", &self.classes())
            .finish()
    }
}

/// HandlerResolver instantiates the handlers declared for one endpoint
pub struct HandlerResolver<'a> {
    endpoint: &'a str,
    registry: &'a HandlerRegistry,
}

impl<'a> HandlerResolver<'a> {
    pub fn new(endpoint: &'a str, registry: &'a HandlerRegistry) -> Self {
        Self { endpoint, registry }
    }

    /// Instantiate every `handler` child of `handlers`, in declaration order.
    ///
    /// Handlers without a class are skipped. A class that cannot be
    /// instantiated aborts the whole resolution.
    pub fn resolve_all<E: ConfigElement>(
        &self,
        handlers: &E,
    ) -> Result<Vec<Box<dyn MessageHandler>>> {
        let mut resolved = Vec::new();
        for handler in handlers.children_named(HANDLER) {
            if let Some(instance) = self.resolve(handler)? {
                resolved.push(instance);
            }
        }
        Ok(resolved)
    }

    /// Instantiate a single handler element, `None` when it names no class
    pub fn resolve<E: ConfigElement>(
        &self,
        handler: &E,
    ) -> Result<Option<Box<dyn MessageHandler>>> {
        let class = match handler.attribute(ATT_CLASS) {
            Some(class) if !class.is_empty() => class,
            _ => {
                debug!(
                    "Handler of inbound endpoint {} has no class configured, skipping",
                    self.endpoint
                );
                return Ok(None);
            }
        };

        match self.registry.instantiate(class) {
            Ok(instance) => {
                debug!("Initialized handler {} for inbound endpoint {}", class, self.endpoint);
                Ok(Some(instance))
            }
            Err(source) => {
                error!(
                    "Error initializing handler {} for inbound endpoint {}: {}",
                    class, self.endpoint, source
                );
                Err(DeployError::HandlerInstantiation {
                    endpoint: self.endpoint.to_string(),
                    class: class.to_string(),
                    source,
                })
            }
        }
    }
}

/// Handler that only carries its class identifier.
///
/// Every hook keeps the trait's default and lets the message through, so the
/// runtime sees the declared handler in its position without extra behaviour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PassThroughHandler {
    class: String,
}

impl PassThroughHandler {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
        }
    }
}

impl MessageHandler for PassThroughHandler {
    fn name(&self) -> &str {
        &self.class
    }
}
