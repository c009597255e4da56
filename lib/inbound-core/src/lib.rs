//! Inbound endpoint assembly
//!
//! This library turns a declarative endpoint definition into an
//! [`InboundEndpoint`](inbound_api::InboundEndpoint):
//! - Parameter resolution against the configuration registry and the
//!   placeholder resolver
//! - Handler instantiation through a closed capability registry
//! - Statistics/tracing aspect settings

pub mod assembler;
pub mod aspect;
pub mod attributes;
pub mod error;
pub mod handler;
pub mod parameter;
pub mod registry;
pub mod resolver;

pub use assembler::{assemble, AssemblyContext};
pub use error::{DeployError, Result};
pub use handler::{HandlerError, HandlerRegistry, HandlerResolver};
pub use parameter::ParameterResolver;
pub use registry::{InMemoryRegistry, Registry, RegistryEntry};
pub use resolver::{ExpressionResolver, IdentityResolver, PlaceholderResolver, ResolverError};
