//! Real User Monitoring integrations.

pub mod instrumentation;
