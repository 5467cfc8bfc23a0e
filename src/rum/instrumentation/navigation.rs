use std::sync::Arc;

/// One screen in the navigation tree.
///
/// Routes are owned by the navigation framework; the tracker only reads them
/// during a single reconciliation pass and never mutates them.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub key: String,
    pub name: Option<String>,
    /// Nested navigator state, when this route hosts a child navigator.
    pub state: Option<NavigationState>,
}

impl Route {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: Some(name.into()),
            state: None,
        }
    }
}

/// A navigator's child routes plus the index of the active one.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationState {
    pub index: usize,
    pub routes: Vec<Route>,
}

impl NavigationState {
    /// Resolves the currently active leaf route, following active-index
    /// pointers through arbitrarily nested navigators.
    pub fn active_leaf(&self) -> Option<&Route> {
        let mut route = self.routes.get(self.index)?;
        while let Some(nested) = route.state.as_ref() {
            route = nested.routes.get(nested.index)?;
        }
        Some(route)
    }
}

pub type NavigationStateListener = Arc<dyn Fn(&NavigationState) + Send + Sync + 'static>;

/// Identifies a registered state listener so it can later be detached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerHandle(u64);

impl ListenerHandle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// The navigation-container contract the view tracker attaches to.
pub trait NavigationRoot: Send + Sync {
    fn current_route(&self) -> Option<Route>;

    fn add_state_listener(&self, listener: NavigationStateListener) -> ListenerHandle;

    fn remove_state_listener(&self, handle: ListenerHandle);
}
