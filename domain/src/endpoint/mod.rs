//! Endpoint value objects.
//!
//! - [`environment::Environment`] / [`environment::ApiEndpoints`]: host selection
//! - [`target::SessionIdentity`] / [`target::ConnectionTarget`]: per-session chat target

pub mod environment;
pub mod target;
