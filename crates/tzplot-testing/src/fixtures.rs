//! Fixtures for configuration files.
//!
//! Provides ready-made configurations for common scenarios and helpers to
//! place them (or deliberately broken variants) on disk.

use anyhow::Result;
use std::fs;
use std::path::Path;
use tzplot_types::{Config, Location};

/// Only the local row plus Berlin, hours aligned to whole columns.
pub fn berlin_only() -> Config {
    Config::minimal().with_timezones(vec![Location::new("Berlin", "Europe/Berlin")])
}

/// Local row only.
pub fn local_only() -> Config {
    Config::minimal()
}

/// Config file declaring an unsupported version.
pub fn future_version_text() -> &'static str {
    "config_version = \"2.0\"\n"
}

/// Config file whose zone is not in the timezone database.
pub fn unknown_zone_text() -> &'static str {
    r#"config_version = "1.0"

[[timezones]]
name = "Atlantis"
tz = "Ocean/Atlantis"
"#
}

pub fn write_config(path: &Path, config: &Config) -> Result<()> {
    write_text(path, &toml::to_string_pretty(config)?)
}

pub fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;
    Ok(())
}
