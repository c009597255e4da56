use crate::handler::HandlerError;
use crate::resolver::ResolverError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DeployError>;

/// Fatal failures of an endpoint assembly. No descriptor is produced when one
/// of these is returned.
#[derive(Error, Debug)]
pub enum DeployError {
    #[error("Inbound endpoint {field} cannot be null or empty")]
    MissingRequiredField { field: &'static str },

    /// `content_type` is set when the key exists but does not hold text
    #[error(
        "Error while deploying inbound endpoint {endpoint}. \
         Registry entry defined with key: {key} {}",
        unresolved_reason(.content_type)
    )]
    UnresolvedRegistryReference {
        endpoint: String,
        key: String,
        content_type: Option<&'static str>,
    },

    #[error("Error initializing handler {class} for inbound endpoint {endpoint}")]
    HandlerInstantiation {
        endpoint: String,
        class: String,
        #[source]
        source: HandlerError,
    },

    #[error("Error resolving parameter {parameter} of inbound endpoint {endpoint}")]
    Resolution {
        endpoint: String,
        parameter: String,
        #[source]
        source: ResolverError,
    },
}

fn unresolved_reason(content_type: &Option<&'static str>) -> String {
    match content_type {
        Some(found) => format!("is not a text entry (found {found})"),
        None => "not found".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_reference_messages() {
        let missing = DeployError::UnresolvedRegistryReference {
            endpoint: "ep1".to_string(),
            key: "conf:/port".to_string(),
            content_type: None,
        };
        assert_eq!(
            missing.to_string(),
            "Error while deploying inbound endpoint ep1. Registry entry defined with key: conf:/port not found"
        );

        let wrong_type = DeployError::UnresolvedRegistryReference {
            endpoint: "ep1".to_string(),
            key: "conf:/bin".to_string(),
            content_type: Some("binary"),
        };
        let message = wrong_type.to_string();
        assert!(message.ends_with("key: conf:/bin is not a text entry (found binary)"));
        assert!(!message.contains("not found"));
    }
}
