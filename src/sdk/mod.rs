//! Initialization surface of the bridge.

mod config;

pub use config::{Sdk, SdkConfiguration};
