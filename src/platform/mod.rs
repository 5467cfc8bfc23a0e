//! Host-runtime helpers shared across subsystems.

pub mod runtime;
pub mod time;
