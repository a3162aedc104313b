use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Character of an hour within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DaySegment {
    Night,
    Morning,
    Day,
    Evening,
}

impl DaySegment {
    pub fn as_str(&self) -> &'static str {
        match self {
            DaySegment::Night => "night",
            DaySegment::Morning => "morning",
            DaySegment::Day => "day",
            DaySegment::Evening => "evening",
        }
    }
}

impl fmt::Display for DaySegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hours at which each segment of the day starts.
///
/// The four half-open ranges `[morning, day)`, `[day, evening)`,
/// `[evening, night)` and `[night, morning)` (wrapping across midnight)
/// partition the 24 hours of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySegments {
    pub morning: u32,
    pub day: u32,
    pub evening: u32,
    pub night: u32,
}

impl Default for DaySegments {
    fn default() -> Self {
        Self {
            morning: 6,
            day: 8,
            evening: 18,
            night: 22,
        }
    }
}

impl DaySegments {
    pub fn new(morning: u32, day: u32, evening: u32, night: u32) -> Result<Self> {
        let segments = Self {
            morning,
            day,
            evening,
            night,
        };
        segments.validate()?;
        Ok(segments)
    }

    /// Check that all boundaries lie within a day and are strictly increasing.
    pub fn validate(&self) -> Result<()> {
        let bounds = [self.morning, self.day, self.evening, self.night];
        if let Some(hour) = bounds.iter().find(|h| **h >= 24) {
            return Err(Error::InvalidSegments(format!(
                "hour {} is outside of 0-23",
                hour
            )));
        }
        if !bounds.windows(2).all(|w| w[0] < w[1]) {
            return Err(Error::InvalidSegments(format!(
                "expected morning < day < evening < night, got {} / {} / {} / {}",
                self.morning, self.day, self.evening, self.night
            )));
        }
        Ok(())
    }
}
