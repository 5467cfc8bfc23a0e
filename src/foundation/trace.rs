use async_trait::async_trait;

use crate::foundation::error::SdkResult;
use crate::foundation::rum::EventContext;

/// The entry point to use Datadog's Trace feature.
///
/// Implemented by the native SDK collaborator.
#[async_trait]
pub trait Tracer: Send + Sync {
    /// Start a span and return its unique identifier.
    async fn start_span(
        &self,
        operation: &str,
        timestamp_ms: i64,
        context: EventContext,
    ) -> SdkResult<String>;

    /// Finish a previously started span.
    async fn finish_span(
        &self,
        span_id: &str,
        timestamp_ms: i64,
        context: EventContext,
    ) -> SdkResult<()>;
}
