// Runtime - configuration persistence and request-time parsing
// Sits between the engine and the CLI; owns everything that touches disk or user input

pub mod config;
mod error;
pub mod request;

pub use config::{ConfigStore, parse_timezones, resolve_config_path};
pub use error::{Error, Result};
pub use request::{parse_request_time, parse_request_time_at};
