//! Late-bound expansion of literal parameter text

use std::collections::HashMap;
use thiserror::Error;

/// Prefix of values read from the system environment
pub const SYSTEM_PREFIX: &str = "$SYSTEM:";
/// Prefix of values read from the loaded properties file
pub const FILE_PREFIX: &str = "$FILE:";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    #[error("Environment variable not found: {0}")]
    VariableNotFound(String),

    #[error("File property not found: {0}")]
    PropertyNotFound(String),

    #[error("Invalid placeholder: {0}")]
    InvalidPlaceholder(String),
}

/// Expands placeholder syntax in literal text.
///
/// Implementations are shared by concurrent assemblies.
pub trait ExpressionResolver: Send + Sync {
    fn resolve(&self, raw: &str) -> Result<String, ResolverError>;
}

/// Resolver that returns text unchanged
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityResolver;

impl ExpressionResolver for IdentityResolver {
    fn resolve(&self, raw: &str) -> Result<String, ResolverError> {
        Ok(raw.to_string())
    }
}

type VariableSource = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Resolver for `$SYSTEM:NAME` and `$FILE:NAME` values.
///
/// A placeholder must make up the whole value. Text without a known prefix is
/// returned as is.
pub struct PlaceholderResolver {
    variables: VariableSource,
    properties: HashMap<String, String>,
}

impl PlaceholderResolver {
    /// Create a resolver reading `$SYSTEM:` values from the process environment
    pub fn from_env() -> Self {
        Self::with_variables(|name| std::env::var(name).ok())
    }

    /// Create a resolver with a custom variable source
    pub fn with_variables<F>(variables: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            variables: Box::new(variables),
            properties: HashMap::new(),
        }
    }

    /// Set the properties `$FILE:` values are read from
    pub fn with_properties(mut self, properties: HashMap<String, String>) -> Self {
        self.properties = properties;
        self
    }
}

impl std::fmt::Debug for PlaceholderResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaceholderResolver")
            .field("properties", &self.properties.len())
            .finish()
    }
}

impl ExpressionResolver for PlaceholderResolver {
    fn resolve(&self, raw: &str) -> Result<String, ResolverError> {
        if let Some(name) = raw.strip_prefix(SYSTEM_PREFIX) {
            if name.is_empty() {
                return Err(ResolverError::InvalidPlaceholder(raw.to_string()));
            }
            return (self.variables)(name)
                .ok_or_else(|| ResolverError::VariableNotFound(name.to_string()));
        }

        if let Some(name) = raw.strip_prefix(FILE_PREFIX) {
            if name.is_empty() {
                return Err(ResolverError::InvalidPlaceholder(raw.to_string()));
            }
            return self
                .properties
                .get(name)
                .cloned()
                .ok_or_else(|| ResolverError::PropertyNotFound(name.to_string()));
        }

        Ok(raw.to_string())
    }
}
