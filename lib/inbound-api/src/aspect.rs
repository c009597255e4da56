//! Monitoring toggles attached to an endpoint
use serde::{Deserialize, Serialize};

/// Statistics and tracing settings for one endpoint
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectConfiguration {
    /// Identity used to correlate monitoring data
    pub id: String,
    #[serde(default)]
    pub statistics_enabled: bool,
    #[serde(default)]
    pub tracing_enabled: bool,
}

impl AspectConfiguration {
    /// Create settings with both statistics and tracing disabled
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            statistics_enabled: false,
            tracing_enabled: false,
        }
    }
}
