//! Configuration value objects for the domain layer
//!
//! - [`remote`]: configuration published by the config service
//! - [`config_key`]: the remote keys this front-end consumes
//! - [`validation`]: issues found in the local configuration

pub mod config_key;
pub mod remote;
pub mod validation;
