//! Test utilities shared across crate-level unit and integration tests.

pub mod navigation;
pub mod rum;

pub use navigation::{FakeAppState, FakeNavigationRoot};
pub use rum::{RecordingRum, RumEvent};
pub use xhr::FakeXhr;
