use std::sync::{Arc, Mutex};

use crate::foundation::{EventContext, RumMonitor};
use crate::platform::runtime;
use crate::platform::time::epoch_millis;
use crate::rum::instrumentation::app_state::{AppStateObserver, AppStateStatus, AppStateSubscription};
use crate::rum::instrumentation::navigation::{ListenerHandle, NavigationRoot, Route};

/// Tracks a navigation container and sends a RUM view event every time the
/// active route changes, reconciling app foreground/background transitions
/// against the currently active view.
///
/// Unlike the original SDK's process-wide static tracker, this is an explicit
/// instance the host constructs and owns, so tests can run several trackers
/// independently.
pub struct NavigationViewTracker {
    rum: Arc<dyn RumMonitor>,
    app_state: Arc<dyn AppStateObserver>,
    registration: Arc<Mutex<TrackingRegistration>>,
}

/// At most one navigation root is tracked at a time; the stored handles are
/// what `stop_tracking_views` needs to detach.
#[derive(Default)]
struct TrackingRegistration {
    root: Option<Arc<dyn NavigationRoot>>,
    state_listener: Option<ListenerHandle>,
    app_state_subscription: Option<AppStateSubscription>,
}

impl NavigationViewTracker {
    pub fn new(rum: Arc<dyn RumMonitor>, app_state: Arc<dyn AppStateObserver>) -> Self {
        Self {
            rum,
            app_state,
            registration: Arc::new(Mutex::new(TrackingRegistration::default())),
        }
    }

    /// Starts tracking `root` and reports the initially active route so the
    /// first view is not missed.
    ///
    /// Attaching a second, different root while one is tracked is a usage
    /// error: it is logged and the original registration is preserved.
    pub fn start_tracking_views(&self, root: Option<Arc<dyn NavigationRoot>>) {
        let Some(root) = root else {
            return;
        };

        {
            let mut registration = self.registration.lock().unwrap();
            match registration.root.as_ref() {
                Some(current) if !same_root(current, &root) => {
                    log::error!(
                        "cannot track a new navigation root while another one is still tracked"
                    );
                }
                Some(_) => {}
                None => {
                    handle_route_navigation(&self.rum, root.current_route());
                    let rum = Arc::clone(&self.rum);
                    let handle = root.add_state_listener(Arc::new(move |state| {
                        handle_route_navigation(&rum, state.active_leaf().cloned());
                    }));
                    registration.state_listener = Some(handle);
                    registration.root = Some(root);
                }
            }
        }

        self.register_app_state_listener_if_needed();
    }

    /// Stops tracking the given root. The app-state listener intentionally
    /// persists for the lifetime of the tracker.
    pub fn stop_tracking_views(&self, root: Option<Arc<dyn NavigationRoot>>) {
        let Some(root) = root else {
            return;
        };

        let mut registration = self.registration.lock().unwrap();
        if let Some(handle) = registration.state_listener.take() {
            root.remove_state_listener(handle);
        }
        registration.root = None;
    }

    fn register_app_state_listener_if_needed(&self) {
        let mut registration = self.registration.lock().unwrap();
        if registration.app_state_subscription.is_some() {
            return;
        }

        let rum = Arc::clone(&self.rum);
        let shared = Arc::clone(&self.registration);
        let subscription = self.app_state.add_change_listener(Arc::new(move |status| {
            // Resolve the active route fresh from the registered root; a
            // cached route could be stale by the time the app backgrounds.
            let current = shared
                .lock()
                .unwrap()
                .root
                .as_ref()
                .and_then(|root| root.current_route());
            let Some(route) = current else {
                return;
            };
            let Some(name) = route.name else {
                return;
            };
            match status {
                AppStateStatus::Background => {
                    let rum = Arc::clone(&rum);
                    let timestamp_ms = epoch_millis();
                    runtime::spawn_detached(async move {
                        if let Err(err) = rum
                            .stop_view(&route.key, timestamp_ms, EventContext::new())
                            .await
                        {
                            log::debug!("failed to stop RUM view {}: {err}", route.key);
                        }
                    });
                }
                AppStateStatus::Active => {
                    // The navigation listener does not fire when the app
                    // returns to the foreground.
                    let rum = Arc::clone(&rum);
                    let timestamp_ms = epoch_millis();
                    runtime::spawn_detached(async move {
                        if let Err(err) = rum
                            .start_view(&route.key, &name, timestamp_ms, EventContext::new())
                            .await
                        {
                            log::debug!("failed to start RUM view {}: {err}", route.key);
                        }
                    });
                }
                AppStateStatus::Inactive => {}
            }
        }));
        registration.app_state_subscription = Some(subscription);
    }
}

fn same_root(a: &Arc<dyn NavigationRoot>, b: &Arc<dyn NavigationRoot>) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}

/// Reports `route` as the newly active view. Routes without a name are
/// silently skipped; the previous view's stop is implied by the collaborator's
/// one-active-view semantics.
fn handle_route_navigation(rum: &Arc<dyn RumMonitor>, route: Option<Route>) {
    let Some(route) = route else {
        return;
    };
    let Some(name) = route.name else {
        return;
    };

    let key = route.key;
    let timestamp_ms = epoch_millis();
    let rum = Arc::clone(rum);
    runtime::spawn_detached(async move {
        if let Err(err) = rum
            .start_view(&key, &name, timestamp_ms, EventContext::new())
            .await
        {
            log::debug!("failed to start RUM view {key}: {err}");
        }
    });
}
