use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::rum::instrumentation::{
    AppStateListener, AppStateObserver, AppStateStatus, AppStateSubscription, ListenerHandle,
    NavigationRoot, NavigationState, NavigationStateListener, Route,
};

/// Navigation container fake: holds a current route and dispatches state
/// events to registered listeners.
pub struct FakeNavigationRoot {
    current: Mutex<Option<Route>>,
    listeners: Mutex<Vec<(ListenerHandle, NavigationStateListener)>>,
    next_handle: AtomicU64,
}

impl FakeNavigationRoot {
    pub fn new(current: Option<Route>) -> Self {
        Self {
            current: Mutex::new(current),
            listeners: Mutex::new(Vec::new()),
            next_handle: AtomicU64::new(1),
        }
    }

    pub fn set_current_route(&self, route: Option<Route>) {
        *self.current.lock().unwrap() = route;
    }

    /// Dispatches a navigation-state event and updates the current route to
    /// the state's active leaf, like a real navigator.
    pub fn emit_state(&self, state: &NavigationState) {
        self.set_current_route(state.active_leaf().cloned());
        let listeners: Vec<NavigationStateListener> = self
            .listeners
            .lock()
            .unwrap()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(state);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }
}

impl NavigationRoot for FakeNavigationRoot {
    fn current_route(&self) -> Option<Route> {
        self.current.lock().unwrap().clone()
    }

    fn add_state_listener(&self, listener: NavigationStateListener) -> ListenerHandle {
        let handle = ListenerHandle::new(self.next_handle.fetch_add(1, Ordering::SeqCst));
        self.listeners.lock().unwrap().push((handle, listener));
        handle
    }

    fn remove_state_listener(&self, handle: ListenerHandle) {
        self.listeners
            .lock()
            .unwrap()
            .retain(|(registered, _)| *registered != handle);
    }
}

/// App-lifecycle fake: tests push status transitions through [`emit`].
///
/// [`emit`]: FakeAppState::emit
#[derive(Default)]
pub struct FakeAppState {
    listeners: Mutex<Vec<(AppStateSubscription, AppStateListener)>>,
    next_subscription: AtomicU64,
}

impl FakeAppState {
    pub fn emit(&self, status: AppStateStatus) {
        let listeners: Vec<AppStateListener> = self
            .listeners
            .lock()
            .unwrap()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(status);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }
}

impl AppStateObserver for FakeAppState {
    fn add_change_listener(&self, listener: AppStateListener) -> AppStateSubscription {
        let subscription =
            AppStateSubscription::new(self.next_subscription.fetch_add(1, Ordering::SeqCst));
        self.listeners.lock().unwrap().push((subscription, listener));
        subscription
    }

    fn remove_change_listener(&self, subscription: AppStateSubscription) {
        self.listeners
            .lock()
            .unwrap()
            .retain(|(registered, _)| *registered != subscription);
    }
}
