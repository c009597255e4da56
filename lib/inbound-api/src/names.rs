//! Element and attribute names of an inbound endpoint definition

/// Root element of an endpoint definition
pub const INBOUND_ENDPOINT: &str = "inboundEndpoint";

pub const ATT_NAME: &str = "name";
pub const ATT_PROTOCOL: &str = "protocol";
pub const ATT_CLASS: &str = "class";
pub const ATT_SUSPEND: &str = "suspend";
pub const ATT_SEQUENCE: &str = "sequence";
pub const ATT_ERROR_SEQUENCE: &str = "onError";
pub const ATT_STATISTICS: &str = "statistics";
pub const ATT_TRACE: &str = "trace";

pub const PARAMETERS: &str = "parameters";
pub const PARAMETER: &str = "parameter";
pub const ATT_PARAMETER_NAME: &str = "name";
pub const ATT_PARAMETER_KEY: &str = "key";

pub const HANDLERS: &str = "handlers";
pub const HANDLER: &str = "handler";

/// Value of `statistics` that turns statistics collection on
pub const STATISTICS_ENABLE: &str = "enable";
/// Value of `trace` that turns tracing on
pub const TRACE_ENABLE: &str = "enable";

/// Aspect identity used when an endpoint has no usable name
pub const DEFAULT_ASPECT_ID: &str = "anonymousInbound";

/// Extension appended to the endpoint name to form its source file name
pub const SOURCE_FILE_EXTENSION: &str = ".xml";
