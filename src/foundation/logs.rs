use async_trait::async_trait;

use crate::foundation::error::SdkResult;
use crate::foundation::rum::EventContext;

/// The entry point to use Datadog's Logs feature.
///
/// Implemented by the native SDK collaborator.
#[async_trait]
pub trait Logs: Send + Sync {
    /// Send a log with level debug.
    async fn debug(&self, message: &str, context: EventContext) -> SdkResult<()>;

    /// Send a log with level info.
    async fn info(&self, message: &str, context: EventContext) -> SdkResult<()>;

    /// Send a log with level warn.
    async fn warn(&self, message: &str, context: EventContext) -> SdkResult<()>;

    /// Send a log with level error.
    async fn error(&self, message: &str, context: EventContext) -> SdkResult<()>;
}
