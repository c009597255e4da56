//! Inbound endpoint API types
//!
//! This library defines the typed model shared by the assembler and the runtime:
//! - Element: read-only configuration element tree an endpoint is declared in
//! - InboundEndpoint: the assembled endpoint descriptor
//! - AspectConfiguration: statistics/tracing toggles
//! - MessageHandler: contract for pluggable per-endpoint handlers

pub mod aspect;
pub mod element;
pub mod endpoint;
pub mod handler;
pub mod names;

pub use aspect::AspectConfiguration;
pub use element::{ConfigElement, Element};
pub use endpoint::{InboundEndpoint, Parameter};
pub use handler::{MessageContext, MessageHandler};
