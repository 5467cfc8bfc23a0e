use async_lock::Mutex;
use async_trait::async_trait;

use crate::foundation::{EventContext, RumMonitor, SdkResult};

/// Everything a [`RumMonitor`] can be asked to emit, captured for assertions.
#[derive(Clone, Debug, PartialEq)]
pub enum RumEvent {
    StartView {
        key: String,
        name: String,
        timestamp_ms: i64,
        context: EventContext,
    },
    StopView {
        key: String,
        timestamp_ms: i64,
        context: EventContext,
    },
    StartAction {
        action_type: String,
        name: String,
        timestamp_ms: i64,
        context: EventContext,
    },
    StopAction {
        timestamp_ms: i64,
        context: EventContext,
    },
    AddAction {
        action_type: String,
        name: String,
        timestamp_ms: i64,
        context: EventContext,
    },
    StartResource {
        key: String,
        method: String,
        url: String,
        timestamp_ms: i64,
        context: EventContext,
    },
    StopResource {
        key: String,
        status_code: u16,
        kind: String,
        timestamp_ms: i64,
        context: EventContext,
    },
    AddError {
        message: String,
        source: String,
        stacktrace: String,
        timestamp_ms: i64,
        context: EventContext,
    },
}

/// In-memory [`RumMonitor`] recording every emission in order.
#[derive(Default)]
pub struct RecordingRum {
    events: Mutex<Vec<RumEvent>>,
}

impl RecordingRum {
    pub async fn events(&self) -> Vec<RumEvent> {
        self.events.lock().await.clone()
    }

    pub async fn take_events(&self) -> Vec<RumEvent> {
        std::mem::take(&mut *self.events.lock().await)
    }

    async fn record(&self, event: RumEvent) -> SdkResult<()> {
        self.events.lock().await.push(event);
        Ok(())
    }
}

#[async_trait]
impl RumMonitor for RecordingRum {
    async fn start_view(
        &self,
        key: &str,
        name: &str,
        timestamp_ms: i64,
        context: EventContext,
    ) -> SdkResult<()> {
        self.record(RumEvent::StartView {
            key: key.into(),
            name: name.into(),
            timestamp_ms,
            context,
        })
        .await
    }

    async fn stop_view(
        &self,
        key: &str,
        timestamp_ms: i64,
        context: EventContext,
    ) -> SdkResult<()> {
        self.record(RumEvent::StopView {
            key: key.into(),
            timestamp_ms,
            context,
        })
        .await
    }

    async fn start_action(
        &self,
        action_type: &str,
        name: &str,
        timestamp_ms: i64,
        context: EventContext,
    ) -> SdkResult<()> {
        self.record(RumEvent::StartAction {
            action_type: action_type.into(),
            name: name.into(),
            timestamp_ms,
            context,
        })
        .await
    }

    async fn stop_action(&self, timestamp_ms: i64, context: EventContext) -> SdkResult<()> {
        self.record(RumEvent::StopAction {
            timestamp_ms,
            context,
        })
        .await
    }

    async fn add_action(
        &self,
        action_type: &str,
        name: &str,
        timestamp_ms: i64,
        context: EventContext,
    ) -> SdkResult<()> {
        self.record(RumEvent::AddAction {
            action_type: action_type.into(),
            name: name.into(),
            timestamp_ms,
            context,
        })
        .await
    }

    async fn start_resource(
        &self,
        key: &str,
        method: &str,
        url: &str,
        timestamp_ms: i64,
        context: EventContext,
    ) -> SdkResult<()> {
        self.record(RumEvent::StartResource {
            key: key.into(),
            method: method.into(),
            url: url.into(),
            timestamp_ms,
            context,
        })
        .await
    }

    async fn stop_resource(
        &self,
        key: &str,
        status_code: u16,
        kind: &str,
        timestamp_ms: i64,
        context: EventContext,
    ) -> SdkResult<()> {
        self.record(RumEvent::StopResource {
            key: key.into(),
            status_code,
            kind: kind.into(),
            timestamp_ms,
            context,
        })
        .await
    }

    async fn add_error(
        &self,
        message: &str,
        source: &str,
        stacktrace: &str,
        timestamp_ms: i64,
        context: EventContext,
    ) -> SdkResult<()> {
        self.record(RumEvent::AddError {
            message: message.into(),
            source: source.into(),
            stacktrace: stacktrace.into(),
            timestamp_ms,
            context,
        })
        .await
    }
}
