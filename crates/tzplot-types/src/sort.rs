use crate::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Order in which zone rows are plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Keep the configured order.
    #[default]
    None,
    /// Ascending UTC offset at the plotted instant.
    Offset,
    /// Alphabetical by display name.
    Name,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::None, SortMode::Offset, SortMode::Name];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::None => "none",
            SortMode::Offset => "offset",
            SortMode::Name => "name",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == needle)
            .ok_or_else(|| Error::UnknownSortMode(s.to_string()))
    }
}

impl Serialize for SortMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SortMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_else(|_| {
            tracing::warn!(sort = %raw, "invalid sort mode in configuration, using none");
            SortMode::None
        }))
    }
}

/// Sorting settings: the mode plus whether the local zone stays on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sorting {
    #[serde(default)]
    pub mode: SortMode,
    #[serde(default = "default_pin_local")]
    pub pin_local: bool,
}

fn default_pin_local() -> bool {
    true
}

impl Default for Sorting {
    fn default() -> Self {
        Self {
            mode: SortMode::None,
            pin_local: true,
        }
    }
}
