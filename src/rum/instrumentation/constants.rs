/// Header carrying the trace id of the distributed trace a request belongs to.
pub const TRACE_ID_HEADER_KEY: &str = "x-datadog-trace-id";

/// Header carrying the parent span id for the request.
pub const PARENT_ID_HEADER_KEY: &str = "x-datadog-parent-id";

/// Header marking the request as originating from RUM instrumentation.
pub const ORIGIN_HEADER_KEY: &str = "x-datadog-origin";

pub const ORIGIN_RUM: &str = "rum";

/// Resource kind reported for intercepted browser-style requests.
pub const RESOURCE_KIND_XHR: &str = "xhr";

/// Stand-in written into the resource key and start timestamp when a request
/// reached its terminal state without ever being sent.
pub const MISSING_TIME: i64 = -1;
