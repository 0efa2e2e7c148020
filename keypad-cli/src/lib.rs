pub mod commands;
pub mod config;
pub mod logging;

pub use config::{ConfigError, KeypadConfig};
