use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tzplot_engine::{Zone, resolve_zones};
use tzplot_types::{CONFIG_VERSION, Config, Location};

/// Environment variable pointing at an alternative configuration file.
pub const CONFIG_ENV: &str = "TZPLOT_CONFIG";

const CONFIG_FILE: &str = "config.toml";

/// Resolve the configuration file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. TZPLOT_CONFIG environment variable (with tilde expansion)
/// 3. Platform config directory
/// 4. ~/.tzplot (fallback for systems without one)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV)
        && !env_path.is_empty()
    {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("tzplot").join(CONFIG_FILE));
    }

    if let Some(home) = dirs::home_dir() {
        return Ok(home.join(".tzplot").join(CONFIG_FILE));
    }

    Err(Error::Config(
        "Could not determine config path: no home or config directory found".to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// A configuration file on disk.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the path chosen by `resolve_config_path`.
    pub fn resolve(explicit_path: Option<&str>) -> Result<Self> {
        Ok(Self::new(resolve_config_path(explicit_path)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate the configuration, writing the default one first
    /// if the file does not exist yet.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            let config = Config::default();
            save_to(&config, &self.path)?;
            tracing::info!(path = %self.path.display(), "created default configuration");
            return Ok(config);
        }
        load_from(&self.path)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        validate(config)?;
        save_to(config, &self.path)?;
        tracing::debug!(path = %self.path.display(), "saved configuration");
        Ok(())
    }
}

/// Read and validate a configuration file.
pub fn load_from(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    tracing::debug!(path = %path.display(), zones = config.timezones.len(), "loaded configuration");

    if config.config_version != CONFIG_VERSION {
        let version = if config.config_version.is_empty() {
            "unknown".to_string()
        } else {
            config.config_version.clone()
        };
        return Err(Error::UnsupportedVersion(version));
    }

    validate(&config)?;
    Ok(config)
}

pub fn save_to(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Value checks plus timezone lookup for every configured zone.
pub fn validate(config: &Config) -> Result<()> {
    config.validate()?;
    resolve_zones(config, Zone::System)?;
    Ok(())
}

/// Parse a comma-separated zone list such as
/// `Office:America/New_York,Europe/London`.
///
/// Bare zone names double as display names. Empty items are skipped.
pub fn parse_timezones(list: &str) -> Result<Vec<Location>> {
    let mut locations = Vec::new();
    for item in list.split(',').map(str::trim) {
        if item.is_empty() {
            continue;
        }

        let location = match item.split_once(':') {
            Some((name, tz)) => {
                if tz.contains(':') {
                    return Err(Error::InvalidTimezone(item.to_string()));
                }
                Location::new(name.trim(), tz.trim())
            }
            None => Location::new(item, item),
        };

        if Zone::parse(&location.tz).is_none() {
            return Err(Error::InvalidTimezone(item.to_string()));
        }
        locations.push(location);
    }
    Ok(locations)
}
