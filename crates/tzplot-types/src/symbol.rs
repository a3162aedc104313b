use crate::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Glyph set used to draw the hour bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolMode {
    /// Shaded rectangles, one shade per day segment.
    #[default]
    Rectangles,
    /// Sun and moon glyphs per day segment.
    SunMoon,
    /// A single `#` for every hour; relies on coloring.
    Mono,
    /// Block elements of increasing density per day segment.
    Blocks,
    /// One clock face per hour of the day.
    Clocks,
    /// User supplied table of 24 glyphs, one per hour.
    Custom,
}

impl SymbolMode {
    pub const ALL: [SymbolMode; 6] = [
        SymbolMode::Rectangles,
        SymbolMode::SunMoon,
        SymbolMode::Mono,
        SymbolMode::Blocks,
        SymbolMode::Clocks,
        SymbolMode::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolMode::Rectangles => "rectangles",
            SymbolMode::SunMoon => "sun-moon",
            SymbolMode::Mono => "mono",
            SymbolMode::Blocks => "blocks",
            SymbolMode::Clocks => "clocks",
            SymbolMode::Custom => "custom",
        }
    }
}

impl fmt::Display for SymbolMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SymbolMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        SymbolMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == needle)
            .ok_or_else(|| Error::UnknownSymbolMode(s.to_string()))
    }
}

impl Serialize for SymbolMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Unknown names load as the default mode instead of failing the whole file.
impl<'de> Deserialize<'de> for SymbolMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_else(|_| {
            let fallback = SymbolMode::default();
            tracing::warn!(
                symbols = %raw,
                fallback = %fallback,
                "invalid symbol mode in configuration, using default"
            );
            fallback
        }))
    }
}
