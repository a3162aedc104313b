use crate::{DaySegment, DaySegments, Error, Result, Sorting, SymbolMode};
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

/// Version tag written to and expected in configuration files.
pub const CONFIG_VERSION: &str = "1.0";

/// Display name of the implicit local zone row.
pub const LOCAL_NAME: &str = "Local";

/// A zone the user wants to see, e.g. `Berlin` / `Europe/Berlin`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub tz: String,
}

impl Location {
    pub fn new(name: impl Into<String>, tz: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tz: tz.into(),
        }
    }
}

/// Which half of the palette applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteTarget {
    /// Plain printed output.
    Static,
    /// Interactive screen in live mode.
    Live,
}

/// Color specifications per day segment; empty strings mean "no color".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub static_morning: String,
    pub static_day: String,
    pub static_evening: String,
    pub static_night: String,
    pub static_foreground: String,

    pub dynamic_morning: String,
    pub dynamic_day: String,
    pub dynamic_evening: String,
    pub dynamic_night: String,
    pub dynamic_foreground: String,
    pub dynamic_background: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            static_morning: "red".to_string(),
            static_day: "yellow".to_string(),
            static_evening: "red".to_string(),
            static_night: "blue".to_string(),
            static_foreground: String::new(),
            dynamic_morning: "red".to_string(),
            dynamic_day: "yellow".to_string(),
            dynamic_evening: "red".to_string(),
            dynamic_night: "blue".to_string(),
            dynamic_foreground: String::new(),
            dynamic_background: String::new(),
        }
    }
}

impl Palette {
    pub fn segment(&self, target: PaletteTarget, segment: DaySegment) -> &str {
        match (target, segment) {
            (PaletteTarget::Static, DaySegment::Morning) => &self.static_morning,
            (PaletteTarget::Static, DaySegment::Day) => &self.static_day,
            (PaletteTarget::Static, DaySegment::Evening) => &self.static_evening,
            (PaletteTarget::Static, DaySegment::Night) => &self.static_night,
            (PaletteTarget::Live, DaySegment::Morning) => &self.dynamic_morning,
            (PaletteTarget::Live, DaySegment::Day) => &self.dynamic_day,
            (PaletteTarget::Live, DaySegment::Evening) => &self.dynamic_evening,
            (PaletteTarget::Live, DaySegment::Night) => &self.dynamic_night,
        }
    }

    pub fn foreground(&self, target: PaletteTarget) -> &str {
        match target {
            PaletteTarget::Static => &self.static_foreground,
            PaletteTarget::Live => &self.dynamic_foreground,
        }
    }

    /// Background only exists on the interactive screen.
    pub fn background(&self, target: PaletteTarget) -> &str {
        match target {
            PaletteTarget::Static => "",
            PaletteTarget::Live => &self.dynamic_background,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    #[serde(default)]
    pub symbols: SymbolMode,
    /// Glyph per hour, only used with `SymbolMode::Custom`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_symbols: Vec<String>,
    #[serde(default)]
    pub colorize: bool,
    #[serde(default)]
    pub day_segments: DaySegments,
    #[serde(default)]
    pub coloring: Palette,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            symbols: SymbolMode::default(),
            custom_symbols: Vec::new(),
            colorize: false,
            day_segments: DaySegments::default(),
            coloring: Palette::default(),
        }
    }
}

impl Style {
    pub fn validate(&self) -> Result<()> {
        self.day_segments.validate()?;
        if self.symbols != SymbolMode::Custom {
            return Ok(());
        }
        if self.custom_symbols.len() != 24 {
            return Err(Error::InvalidSymbolTable(self.custom_symbols.len()));
        }
        // Every cell of a row is one column, or the now marker drifts
        if let Some((hour, symbol)) = self
            .custom_symbols
            .iter()
            .enumerate()
            .find(|(_, symbol)| symbol.width() != 1)
        {
            return Err(Error::InvalidSymbol {
                hour,
                symbol: symbol.clone(),
            });
        }
        Ok(())
    }
}

/// Everything that shapes a plot, as persisted by the configuration layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Empty when the file does not declare one.
    #[serde(default)]
    pub config_version: String,
    /// Hour tics below the bars.
    #[serde(default)]
    pub tics: bool,
    /// Use the full terminal width, even if hours no longer map to whole columns.
    #[serde(default)]
    pub stretch: bool,
    #[serde(default)]
    pub hours12: bool,
    #[serde(default)]
    pub live: bool,
    #[serde(default)]
    pub sorting: Sorting,
    #[serde(default)]
    pub style: Style,
    #[serde(default)]
    pub timezones: Vec<Location>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_version: CONFIG_VERSION.to_string(),
            tics: false,
            stretch: true,
            hours12: false,
            live: false,
            sorting: Sorting::default(),
            style: Style::default(),
            timezones: vec![
                Location::new("New York", "America/New_York"),
                Location::new("Berlin", "Europe/Berlin"),
                Location::new("Shanghai", "Asia/Shanghai"),
                Location::new("Sydney", "Australia/Sydney"),
            ],
        }
    }
}

impl Config {
    /// Empty zone list, all flags off; handy as a base for explicit setups.
    pub fn minimal() -> Self {
        Self {
            timezones: Vec::new(),
            stretch: false,
            ..Self::default()
        }
    }

    pub fn with_timezones(mut self, timezones: Vec<Location>) -> Self {
        self.timezones = timezones;
        self
    }

    /// Value-level checks; zone identifiers are checked by the engine.
    pub fn validate(&self) -> Result<()> {
        self.style.validate()
    }
}
