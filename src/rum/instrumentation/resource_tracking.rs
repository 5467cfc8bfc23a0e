use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::Value;

use crate::foundation::{EventContext, RumMonitor};
use crate::platform::runtime;
use crate::platform::time::epoch_millis;
use crate::rum::instrumentation::constants::{
    MISSING_TIME, ORIGIN_HEADER_KEY, ORIGIN_RUM, PARENT_ID_HEADER_KEY, RESOURCE_KIND_XHR,
    TRACE_ID_HEADER_KEY,
};
use crate::rum::instrumentation::resource_timings::create_timings;
use crate::rum::instrumentation::trace_identifier::generate_trace_id;
use crate::rum::instrumentation::xhr::{ReadyStateChange, ReadyStateHandler, Xhr, XhrReadyState};

/// Correlation state carried by one intercepted request.
#[derive(Clone, Debug)]
pub struct RequestContext {
    pub method: String,
    pub url: String,
    /// Wall-clock time the request was sent, if it was.
    pub start_time: Option<i64>,
    /// Wall-clock time of the first observed "receiving data" transition.
    pub load_start_time: Option<i64>,
    pub span_id: String,
    pub trace_id: String,
    /// Emitted-once guard for the terminal report.
    pub reported: bool,
}

impl RequestContext {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            start_time: None,
            load_start_time: None,
            span_id: generate_trace_id(),
            trace_id: generate_trace_id(),
            reported: false,
        }
    }
}

/// Tracks network resources and sends a paired RUM resource start/stop event
/// for every request that reaches its terminal transport state.
///
/// The tracker replaces the original SDK's prototype patching with an explicit
/// decorator: the host substitutes [`ResourceTracker::track`] at the point
/// where it constructs requests, and every request built while tracking is
/// active carries its own correlation state.
#[derive(Clone)]
pub struct ResourceTracker {
    inner: Arc<ResourceTrackerInner>,
}

struct ResourceTrackerInner {
    rum: Arc<dyn RumMonitor>,
    tracking: AtomicBool,
}

impl ResourceTracker {
    pub fn new(rum: Arc<dyn RumMonitor>) -> Self {
        Self {
            inner: Arc::new(ResourceTrackerInner {
                rum,
                tracking: AtomicBool::new(false),
            }),
        }
    }

    /// Starts tracking resources. Idempotent.
    pub fn start_tracking(&self) {
        self.inner.tracking.store(true, Ordering::SeqCst);
    }

    /// Stops tracking resources; requests wrapped afterwards behave as if
    /// never decorated. Idempotent, a no-op when tracking was never started.
    pub fn stop_tracking(&self) {
        self.inner.tracking.store(false, Ordering::SeqCst);
    }

    pub fn is_tracking(&self) -> bool {
        self.inner.tracking.load(Ordering::SeqCst)
    }

    /// Decorates a transport so its lifecycle is reported as a RUM resource.
    pub fn track<T: Xhr>(&self, xhr: T) -> TrackedXhr<T> {
        TrackedXhr::new(xhr, self.clone())
    }
}

#[derive(Default)]
struct TrackedState {
    context: Option<RequestContext>,
    user_handler: Option<ReadyStateHandler>,
}

/// Decorator over a [`Xhr`] transport that owns the per-request
/// [`RequestContext`] and observes lifecycle transitions.
pub struct TrackedXhr<T: Xhr> {
    inner: T,
    tracker: ResourceTracker,
    state: Arc<Mutex<TrackedState>>,
}

impl<T: Xhr> TrackedXhr<T> {
    fn new(mut inner: T, tracker: ResourceTracker) -> Self {
        let state = Arc::new(Mutex::new(TrackedState {
            context: None,
            // A handler installed on the transport before decoration keeps
            // firing through the proxy, same as one set afterwards.
            user_handler: inner.take_on_ready_state_change(),
        }));

        // The proxy stays installed for the lifetime of the request so the
        // caller-set handler keeps firing even when tracking is inactive.
        let proxy_state = Arc::clone(&state);
        let rum = Arc::clone(&tracker.inner.rum);
        inner.set_on_ready_state_change(Some(Box::new(move |change| {
            handle_ready_state_change(&proxy_state, &rum, change);
        })));

        Self {
            inner,
            tracker,
            state,
        }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<T: Xhr> Xhr for TrackedXhr<T> {
    fn open(&mut self, method: &str, url: &str) {
        // Start time is tracked by `send`.
        if self.tracker.is_tracking() {
            let mut state = self.state.lock().unwrap();
            state.context = Some(RequestContext::new(method, url));
        }
        self.inner.open(method, url);
    }

    fn send(&mut self, body: Option<Vec<u8>>) {
        let correlation = {
            let mut state = self.state.lock().unwrap();
            state.context.as_mut().map(|context| {
                context.start_time = Some(epoch_millis());
                (context.trace_id.clone(), context.span_id.clone())
            })
        };
        if let Some((trace_id, span_id)) = correlation {
            self.inner.set_request_header(TRACE_ID_HEADER_KEY, &trace_id);
            self.inner.set_request_header(PARENT_ID_HEADER_KEY, &span_id);
            self.inner.set_request_header(ORIGIN_HEADER_KEY, ORIGIN_RUM);
        }
        self.inner.send(body);
    }

    fn set_request_header(&mut self, name: &str, value: &str) {
        self.inner.set_request_header(name, value);
    }

    fn ready_state(&self) -> XhrReadyState {
        self.inner.ready_state()
    }

    fn status(&self) -> u16 {
        self.inner.status()
    }

    fn set_on_ready_state_change(&mut self, handler: Option<ReadyStateHandler>) {
        self.state.lock().unwrap().user_handler = handler;
    }

    fn take_on_ready_state_change(&mut self) -> Option<ReadyStateHandler> {
        self.state.lock().unwrap().user_handler.take()
    }
}

fn handle_ready_state_change(
    state: &Mutex<TrackedState>,
    rum: &Arc<dyn RumMonitor>,
    change: ReadyStateChange,
) {
    let mut state = state.lock().unwrap();
    match change.ready_state {
        XhrReadyState::Loading => {
            if let Some(context) = state.context.as_mut() {
                if context.load_start_time.is_none() {
                    context.load_start_time = Some(epoch_millis());
                }
            }
        }
        XhrReadyState::Done => {
            if let Some(context) = state.context.as_mut() {
                if !context.reported {
                    context.reported = true;
                    report_request(rum, context, change.status);
                }
            }
        }
        _ => {}
    }

    if let Some(handler) = state.user_handler.as_mut() {
        handler(change);
    }
}

/// Emits the resource start event followed, once that emission is
/// acknowledged, by the matching stop event.
fn report_request(rum: &Arc<dyn RumMonitor>, context: &RequestContext, status: u16) {
    let response_end_time = epoch_millis();
    let start_time = context.start_time.unwrap_or(MISSING_TIME);

    // The start/stop pair is correlated through this composite key; it is the
    // contract with the native collaborator. Two requests sharing method and
    // start millisecond would collide, a quirk kept for compatibility.
    let key = format!("{start_time}/{}/{start_time}", context.method);

    let mut start_context = EventContext::new();
    start_context.insert("_dd.span_id".into(), Value::String(context.span_id.clone()));
    start_context.insert(
        "_dd.trace_id".into(),
        Value::String(context.trace_id.clone()),
    );

    let timings = create_timings(context, response_end_time)
        .and_then(|timings| serde_json::to_value(timings).ok())
        .unwrap_or(Value::Null);
    let mut stop_context = EventContext::new();
    stop_context.insert("_dd.timings".into(), timings);

    let rum = Arc::clone(rum);
    let method = context.method.clone();
    let url = context.url.clone();
    runtime::spawn_detached(async move {
        match rum
            .start_resource(&key, &method, &url, start_time, start_context)
            .await
        {
            Ok(()) => {
                if let Err(err) = rum
                    .stop_resource(
                        &key,
                        status,
                        RESOURCE_KIND_XHR,
                        response_end_time,
                        stop_context,
                    )
                    .await
                {
                    log::debug!("failed to stop RUM resource {method} {url}: {err}");
                }
            }
            Err(err) => log::debug!("failed to start RUM resource {method} {url}: {err}"),
        }
    });
}
