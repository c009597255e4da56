//! Contract for pluggable inbound message handlers

use std::collections::HashMap;
use std::fmt;

/// Per-message state handed to handlers by the runtime
#[derive(Clone, Debug, Default)]
pub struct MessageContext {
    /// Name of the endpoint the message arrived on
    pub endpoint: String,
    /// Transport headers
    pub headers: HashMap<String, String>,
    /// Properties handlers may read and set
    pub properties: HashMap<String, String>,
}

impl MessageContext {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }
}

/// Handler instantiated per endpoint at assembly time and invoked by the
/// runtime in declaration order.
///
/// Returning `false` from a hook stops further processing of the message.
pub trait MessageHandler: Send + Sync + fmt::Debug {
    /// Identifier the handler was registered under
    fn name(&self) -> &str;

    /// Called when a message is received on the endpoint
    fn handle_request(&self, _context: &mut MessageContext) -> bool {
        true
    }

    /// Called when a response is sent back through the endpoint
    fn handle_response(&self, _context: &mut MessageContext) -> bool {
        true
    }
}
