//! HTTP adapter for the config endpoint

mod config_client;

pub use config_client::HttpConfigProvider;
