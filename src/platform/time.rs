use chrono::Utc;

/// Current wall-clock time in milliseconds since the Unix epoch.
///
/// Event timestamps cross the bridge as epoch milliseconds, matching the
/// native SDK's expectations.
pub fn epoch_millis() -> i64 {
    Utc::now().timestamp_millis()
}
