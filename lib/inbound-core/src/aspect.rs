//! Derives monitoring settings from endpoint attributes
use inbound_api::names::{DEFAULT_ASPECT_ID, STATISTICS_ENABLE, TRACE_ENABLE};
use inbound_api::AspectConfiguration;

/// Build aspect settings for an endpoint.
///
/// A toggle is on only when its attribute equals the enable value exactly;
/// absent or unrecognized values leave it off. An empty name falls back to the
/// default identity.
pub fn build_aspect(
    name: &str,
    statistics: Option<&str>,
    tracing: Option<&str>,
) -> AspectConfiguration {
    let id = if name.is_empty() { DEFAULT_ASPECT_ID } else { name };

    let mut aspect = AspectConfiguration::new(id);
    aspect.statistics_enabled = statistics == Some(STATISTICS_ENABLE);
    aspect.tracing_enabled = tracing == Some(TRACE_ENABLE);
    aspect
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_disabled() {
        let aspect = build_aspect("ep1", None, None);
        assert_eq!(aspect.id, "ep1");
        assert!(!aspect.statistics_enabled);
        assert!(!aspect.tracing_enabled);
    }

    #[test]
    fn test_enable_sentinel() {
        let aspect = build_aspect("ep1", Some("enable"), Some("enable"));
        assert!(aspect.statistics_enabled);
        assert!(aspect.tracing_enabled);
    }

    #[test]
    fn test_unrecognized_values_disabled() {
        for value in ["true", "Enable", "enable ", "disable", ""] {
            let aspect = build_aspect("ep1", Some(value), Some(value));
            assert!(!aspect.statistics_enabled, "statistics={value:?}");
            assert!(!aspect.tracing_enabled, "trace={value:?}");
        }
    }

    #[test]
    fn test_empty_name_uses_default_identity() {
        assert_eq!(build_aspect("", None, None).id, DEFAULT_ASPECT_ID);
    }
}
