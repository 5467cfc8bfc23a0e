//! Rust port of the Datadog mobile RUM SDK bridge.
//!
//! The native Datadog SDK owns event storage, batching, persistence and
//! transport; this crate marshals calls towards it ([`foundation`], [`sdk`])
//! and ships the auto-instrumentation layer that derives RUM events on its
//! own ([`rum::instrumentation`]): a resource tracker decorating the host's
//! network transport and a view tracker observing the navigation tree.

pub mod foundation;
pub mod platform;
pub mod rum;
pub mod sdk;

#[cfg(test)]
pub mod test_support;
