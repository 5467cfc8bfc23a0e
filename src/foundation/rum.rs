use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::foundation::error::SdkResult;

/// Open-ended key/value map attached to every emitted event as additional tags.
pub type EventContext = HashMap<String, Value>;

/// The entry point to use Datadog's RUM feature.
///
/// Implemented by the native SDK collaborator; this crate only pushes derived
/// events through it. All operations resolve asynchronously once the event has
/// been handed over to the native event pipeline.
#[async_trait]
pub trait RumMonitor: Send + Sync {
    /// Start tracking a RUM view identified by its unique `key`.
    async fn start_view(
        &self,
        key: &str,
        name: &str,
        timestamp_ms: i64,
        context: EventContext,
    ) -> SdkResult<()>;

    /// Stop tracking the RUM view identified by `key`.
    async fn stop_view(&self, key: &str, timestamp_ms: i64, context: EventContext) -> SdkResult<()>;

    /// Start tracking a RUM action (tap, scroll, swipe, click, custom).
    async fn start_action(
        &self,
        action_type: &str,
        name: &str,
        timestamp_ms: i64,
        context: EventContext,
    ) -> SdkResult<()>;

    /// Stop tracking the ongoing RUM action.
    async fn stop_action(&self, timestamp_ms: i64, context: EventContext) -> SdkResult<()>;

    /// Add a standalone RUM action.
    async fn add_action(
        &self,
        action_type: &str,
        name: &str,
        timestamp_ms: i64,
        context: EventContext,
    ) -> SdkResult<()>;

    /// Start tracking a RUM resource identified by its unique `key`.
    async fn start_resource(
        &self,
        key: &str,
        method: &str,
        url: &str,
        timestamp_ms: i64,
        context: EventContext,
    ) -> SdkResult<()>;

    /// Stop tracking the RUM resource identified by `key`.
    ///
    /// `kind` is the resource's kind (xhr, document, image, css, font, ...).
    async fn stop_resource(
        &self,
        key: &str,
        status_code: u16,
        kind: &str,
        timestamp_ms: i64,
        context: EventContext,
    ) -> SdkResult<()>;

    /// Add a RUM error with its source (network, source, console, logger, ...).
    async fn add_error(
        &self,
        message: &str,
        source: &str,
        stacktrace: &str,
        timestamp_ms: i64,
        context: EventContext,
    ) -> SdkResult<()>;
}
