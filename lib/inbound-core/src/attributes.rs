//! Endpoint-level attributes read off a definition element
use inbound_api::names::{
    ATT_CLASS, ATT_ERROR_SEQUENCE, ATT_NAME, ATT_PROTOCOL, ATT_SEQUENCE, ATT_STATISTICS,
    ATT_SUSPEND, ATT_TRACE,
};
use inbound_api::ConfigElement;

/// Attribute value as an owned string, `None` when absent
pub fn attribute<E: ConfigElement>(element: &E, name: &str) -> Option<String> {
    element.attribute(name).map(str::to_string)
}

/// Raw attributes of an inbound endpoint element
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EndpointAttributes {
    pub name: Option<String>,
    pub protocol: Option<String>,
    pub class_impl: Option<String>,
    pub suspend: Option<String>,
    pub inject_sequence: Option<String>,
    pub error_sequence: Option<String>,
    pub statistics: Option<String>,
    pub trace: Option<String>,
}

impl EndpointAttributes {
    pub fn from_element<E: ConfigElement>(element: &E) -> Self {
        Self {
            name: attribute(element, ATT_NAME),
            protocol: attribute(element, ATT_PROTOCOL),
            class_impl: attribute(element, ATT_CLASS),
            suspend: attribute(element, ATT_SUSPEND),
            inject_sequence: attribute(element, ATT_SEQUENCE),
            error_sequence: attribute(element, ATT_ERROR_SEQUENCE),
            statistics: attribute(element, ATT_STATISTICS),
            trace: attribute(element, ATT_TRACE),
        }
    }

    /// `suspend` parsed leniently: only a case-insensitive "true" suspends
    pub fn suspended(&self) -> bool {
        self.suspend
            .as_deref()
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }
}
