use std::sync::Arc;

/// Coarse application lifecycle status, as reported by the host platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppStateStatus {
    Active,
    Inactive,
    Background,
}

pub type AppStateListener = Arc<dyn Fn(AppStateStatus) + Send + Sync + 'static>;

/// Identifies a registered app-state listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AppStateSubscription(u64);

impl AppStateSubscription {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Process-wide source of foreground/background transitions, supporting
/// multiple independent listener registrations.
pub trait AppStateObserver: Send + Sync {
    fn add_change_listener(&self, listener: AppStateListener) -> AppStateSubscription;

    fn remove_change_listener(&self, subscription: AppStateSubscription);
}
