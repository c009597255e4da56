//! Assembles an inbound endpoint descriptor from its definition element

use crate::aspect::build_aspect;
use crate::attributes::EndpointAttributes;
use crate::error::{DeployError, Result};
use crate::handler::{HandlerRegistry, HandlerResolver};
use crate::parameter::ParameterResolver;
use crate::registry::Registry;
use crate::resolver::ExpressionResolver;
use inbound_api::names::{ATT_NAME, HANDLERS, PARAMETERS, SOURCE_FILE_EXTENSION};
use inbound_api::{ConfigElement, InboundEndpoint};
use std::sync::Arc;
use tracing::{debug, error, span, Level};

/// Collaborators an assembly resolves against
#[derive(Clone)]
pub struct AssemblyContext {
    pub registry: Arc<dyn Registry>,
    pub resolver: Arc<dyn ExpressionResolver>,
    pub handlers: Arc<HandlerRegistry>,
}

impl AssemblyContext {
    pub fn new(
        registry: Arc<dyn Registry>,
        resolver: Arc<dyn ExpressionResolver>,
        handlers: Arc<HandlerRegistry>,
    ) -> Self {
        Self {
            registry,
            resolver,
            handlers,
        }
    }
}

/// Build an endpoint descriptor from a definition element.
///
/// Every field is resolved before the descriptor is constructed, so a failure
/// at any step leaves nothing behind. The name is checked before anything else.
pub fn assemble<E: ConfigElement>(
    element: &E,
    context: &AssemblyContext,
) -> Result<InboundEndpoint> {
    let name = match element.attribute(ATT_NAME) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => {
            error!("Inbound Endpoint name cannot be null or empty");
            return Err(DeployError::MissingRequiredField { field: ATT_NAME });
        }
    };

    let span = span!(Level::DEBUG, "inbound_endpoint", name = %name);
    let _guard = span.enter();

    let attrs = EndpointAttributes::from_element(element);
    let suspended = attrs.suspended();

    let aspect = build_aspect(&name, attrs.statistics.as_deref(), attrs.trace.as_deref());

    let parameters = match element.first_child(PARAMETERS) {
        Some(parameters) => {
            ParameterResolver::new(&name, context.registry.as_ref(), context.resolver.as_ref())
                .resolve_all(parameters)?
        }
        None => Vec::new(),
    };

    let handlers = match element.first_child(HANDLERS) {
        Some(handlers) => HandlerResolver::new(&name, &context.handlers).resolve_all(handlers)?,
        None => Vec::new(),
    };

    debug!(
        "Assembled inbound endpoint with {} parameters and {} handlers",
        parameters.len(),
        handlers.len()
    );

    Ok(InboundEndpoint {
        file_name: format!("{}{}", name, SOURCE_FILE_EXTENSION),
        name,
        protocol: attrs.protocol,
        class_impl: attrs.class_impl,
        suspended,
        inject_sequence: attrs.inject_sequence,
        error_sequence: attrs.error_sequence,
        aspect,
        parameters,
        handlers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::InMemoryRegistry;
    use crate::resolver::IdentityResolver;
    use inbound_api::Element;

    fn context() -> AssemblyContext {
        AssemblyContext::new(
            Arc::new(InMemoryRegistry::new()),
            Arc::new(IdentityResolver),
            Arc::new(HandlerRegistry::with_builtins()),
        )
    }

    #[test]
    fn test_minimal_endpoint() {
        let elem = Element::new("inboundEndpoint").with_attribute("name", "ep1");
        let ep = assemble(&elem, &context()).unwrap();
        assert_eq!(ep.name, "ep1");
        assert_eq!(ep.file_name, "ep1.xml");
        assert_eq!(ep.protocol, None);
        assert_eq!(ep.class_impl, None);
        assert!(!ep.suspended);
        assert_eq!(ep.aspect.id, "ep1");
        assert!(ep.parameters.is_empty());
        assert!(ep.handlers.is_empty());
    }

    #[test]
    fn test_all_attributes() {
        let elem = Element::new("inboundEndpoint")
            .with_attribute("name", "orders")
            .with_attribute("protocol", "http")
            .with_attribute("class", "com.example.Listener")
            .with_attribute("suspend", "True")
            .with_attribute("sequence", "main")
            .with_attribute("onError", "fault")
            .with_attribute("statistics", "enable")
            .with_attribute("trace", "disable");
        let ep = assemble(&elem, &context()).unwrap();
        assert_eq!(ep.protocol.as_deref(), Some("http"));
        assert_eq!(ep.class_impl.as_deref(), Some("com.example.Listener"));
        assert!(ep.suspended);
        assert_eq!(ep.inject_sequence.as_deref(), Some("main"));
        assert_eq!(ep.error_sequence.as_deref(), Some("fault"));
        assert!(ep.aspect.statistics_enabled);
        assert!(!ep.aspect.tracing_enabled);
    }

    #[test]
    fn test_missing_name() {
        let elem = Element::new("inboundEndpoint").with_attribute("protocol", "http");
        let err = assemble(&elem, &context()).unwrap_err();
        assert!(matches!(err, DeployError::MissingRequiredField { field: "name" }));
    }

    #[test]
    fn test_empty_name() {
        let elem = Element::new("inboundEndpoint").with_attribute("name", "");
        let err = assemble(&elem, &context()).unwrap_err();
        assert!(matches!(err, DeployError::MissingRequiredField { .. }));
    }
}
