use serde::Serialize;

use crate::rum::instrumentation::resource_tracking::RequestContext;

/// A single timing on the relative resource timeline, in nanoseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timing {
    pub start_time: i64,
    pub duration: i64,
}

/// Per-resource timings reported under `_dd.timings`.
///
/// Unlike in the browser Performance API, `first_byte` does not measure the
/// time until the request starts (connect, SSL, DNS) but the time until the
/// response is first seen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceTimings {
    pub first_byte: Timing,
    pub download: Timing,
}

/// Derives the first-byte/download timing pair for a finished request.
///
/// Both the send time and the first "receiving data" time must have been
/// observed; otherwise the timings are unavailable and `None` is returned
/// rather than zero or negative values.
pub fn create_timings(context: &RequestContext, response_end_time: i64) -> Option<ResourceTimings> {
    let start_time = context.start_time?;
    let load_start_time = context.load_start_time?;

    let first_byte = format_timing(start_time, start_time, load_start_time);
    let download = format_timing(start_time, load_start_time, response_end_time);

    Some(ResourceTimings {
        first_byte,
        download,
    })
}

fn format_timing(origin: i64, start: i64, end: i64) -> Timing {
    Timing {
        start_time: to_server_duration(start - origin),
        duration: to_server_duration(end - start),
    }
}

/// Converts a millisecond duration to the nanosecond granularity the backend
/// expects, rounding to zero decimal places.
fn to_server_duration(duration_ms: i64) -> i64 {
    (duration_ms as f64 * 1e6).round() as i64
}
