use chrono::{DateTime, Utc};

/// The instant a plot is centered on, and whether the user asked for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotRequest {
    pub instant: DateTime<Utc>,
    pub explicit: bool,
}

impl PlotRequest {
    /// Track the real-world clock.
    pub fn now() -> Self {
        Self::now_at(Utc::now())
    }

    /// A "now" request with a given clock reading.
    pub fn now_at(instant: DateTime<Utc>) -> Self {
        Self {
            instant,
            explicit: false,
        }
    }

    /// A request for a specific instant.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            instant,
            explicit: true,
        }
    }

    pub fn from_option(instant: Option<DateTime<Utc>>) -> Self {
        match instant {
            Some(instant) => Self::at(instant),
            None => Self::now(),
        }
    }

    /// Word shown in the top header above the marker column.
    pub fn label(&self) -> &'static str {
        if self.explicit { "time" } else { "now" }
    }

    /// Live mode follows the wall clock, so it is off for explicit requests.
    pub fn allows_live(&self) -> bool {
        !self.explicit
    }
}
