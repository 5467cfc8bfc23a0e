//! The native SDK surface this bridge talks to.
//!
//! Event storage, batching, persistence and transport all live in the native
//! Datadog SDK; the traits here describe the asynchronous contract a host
//! application wires in when it initializes the bridge.

mod error;
mod logs;
mod rum;
mod trace;

pub use error::{internal_error, invalid_argument, SdkError, SdkErrorCode, SdkResult};
pub use logs::Logs;
pub use rum::{EventContext, RumMonitor};
pub use trace::Tracer;
