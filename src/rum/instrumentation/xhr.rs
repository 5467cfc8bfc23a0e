/// Lifecycle stages exposed by a browser-style request object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XhrReadyState {
    Unsent,
    Opened,
    HeadersReceived,
    Loading,
    Done,
}

/// Snapshot handed to ready-state-change handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadyStateChange {
    pub ready_state: XhrReadyState,
    pub status: u16,
}

pub type ReadyStateHandler = Box<dyn FnMut(ReadyStateChange) + Send + 'static>;

/// The browser-style request contract the resource tracker decorates.
///
/// Any transport exposing open/send, header injection, a numeric status and a
/// mutable ready-state-change callback can be tracked; the transport invokes
/// the handler with its current state on every lifecycle transition.
pub trait Xhr: Send {
    fn open(&mut self, method: &str, url: &str);

    fn send(&mut self, body: Option<Vec<u8>>);

    fn set_request_header(&mut self, name: &str, value: &str);

    fn ready_state(&self) -> XhrReadyState;

    fn status(&self) -> u16;

    /// Replaces the ready-state-change handler; `None` clears it.
    fn set_on_ready_state_change(&mut self, handler: Option<ReadyStateHandler>);

    /// Removes and returns the currently installed handler, if any.
    fn take_on_ready_state_change(&mut self) -> Option<ReadyStateHandler>;
}
