//! RUM auto-instrumentation.
//!
//! Two trackers observe the host application and derive RUM events on their
//! own: [`ResourceTracker`] decorates the transport used for network calls and
//! emits paired resource start/stop events, [`NavigationViewTracker`] follows
//! the navigation tree and emits paired view start/stop events, including
//! foreground/background reconciliation.

mod app_state;
mod constants;
mod navigation;
mod navigation_tracking;
mod resource_timings;
mod resource_tracking;
mod trace_identifier;
mod xhr;

pub use app_state::{AppStateListener, AppStateObserver, AppStateStatus, AppStateSubscription};
pub use constants::{
    ORIGIN_HEADER_KEY, ORIGIN_RUM, PARENT_ID_HEADER_KEY, RESOURCE_KIND_XHR, TRACE_ID_HEADER_KEY,
};
pub use navigation::{
    ListenerHandle, NavigationRoot, NavigationState, NavigationStateListener, Route,
};
pub use navigation_tracking::NavigationViewTracker;
pub use resource_timings::{create_timings, ResourceTimings, Timing};
pub use resource_tracking::{RequestContext, ResourceTracker, TrackedXhr};
pub use trace_identifier::generate_trace_id;
pub use xhr::{ReadyStateChange, ReadyStateHandler, Xhr, XhrReadyState};
