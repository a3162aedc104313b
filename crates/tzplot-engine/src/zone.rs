use crate::{Error, Result};
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use tzplot_types::{Config, LOCAL_NAME, SortMode, Sorting};

/// A timezone instants can be converted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// Whatever the operating system considers local.
    System,
    Named(Tz),
}

impl Zone {
    /// Look up a tz database name such as `Europe/Berlin`.
    pub fn parse(name: &str) -> Option<Zone> {
        name.trim().parse::<Tz>().ok().map(Zone::Named)
    }

    pub fn local_time(&self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Zone::System => instant.with_timezone(&Local).fixed_offset(),
            Zone::Named(tz) => instant.with_timezone(tz).fixed_offset(),
        }
    }

    /// Seconds east of UTC at the given instant.
    pub fn utc_offset(&self, instant: DateTime<Utc>) -> i32 {
        self.local_time(instant).offset().local_minus_utc()
    }

    /// Instant of a wall-clock reading in this zone.
    ///
    /// Readings that occur twice resolve to the earlier instant; readings
    /// skipped by a transition give `None`.
    pub fn instant_of(&self, local: NaiveDateTime) -> Option<DateTime<Utc>> {
        match self {
            Zone::System => Local
                .from_local_datetime(&local)
                .earliest()
                .map(|t| t.with_timezone(&Utc)),
            Zone::Named(tz) => tz
                .from_local_datetime(&local)
                .earliest()
                .map(|t| t.with_timezone(&Utc)),
        }
    }
}

/// One row of the plot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotZone {
    pub name: String,
    pub zone: Zone,
    pub is_local: bool,
}

/// Local row first, then the configured zones in configured order.
///
/// A zone missing from the database means the configuration is corrupt, so
/// it fails the whole call instead of being skipped.
pub fn resolve_zones(config: &Config, local: Zone) -> Result<Vec<PlotZone>> {
    let mut zones = Vec::with_capacity(config.timezones.len() + 1);
    zones.push(PlotZone {
        name: LOCAL_NAME.to_string(),
        zone: local,
        is_local: true,
    });

    for location in &config.timezones {
        let zone = Zone::parse(&location.tz).ok_or_else(|| Error::UnknownZone {
            name: location.name.clone(),
            zone: location.tz.clone(),
        })?;
        zones.push(PlotZone {
            name: location.name.clone(),
            zone,
            is_local: false,
        });
    }

    Ok(zones)
}

/// Reorder rows according to the sorting settings. Sorting is stable, so
/// equal keys keep their configured order.
pub fn sort_zones(zones: &mut [PlotZone], sorting: Sorting, instant: DateTime<Utc>) {
    let mut start = 0;
    if sorting.pin_local
        && let Some(pos) = zones.iter().position(|z| z.is_local)
    {
        zones[..=pos].rotate_right(1);
        start = 1;
    }
    let rest = &mut zones[start..];

    match sorting.mode {
        SortMode::None => {}
        SortMode::Offset => rest.sort_by_key(|z| z.zone.utc_offset(instant)),
        SortMode::Name => rest.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};
    use tzplot_types::Location;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1985, 8, 24, 14, 0, 0).unwrap()
    }

    fn config() -> Config {
        Config::minimal().with_timezones(vec![
            Location::new("Sydney", "Australia/Sydney"),
            Location::new("Berlin", "Europe/Berlin"),
            Location::new("New York", "America/New_York"),
        ])
    }

    fn names(zones: &[PlotZone]) -> Vec<&str> {
        zones.iter().map(|z| z.name.as_str()).collect()
    }

    #[test]
    fn test_local_time_in_named_zone() {
        let berlin = Zone::parse("Europe/Berlin").unwrap();
        let local = berlin.local_time(instant());
        assert_eq!(local.hour(), 16);
        assert_eq!(berlin.utc_offset(instant()), 7200);
    }

    #[test]
    fn test_instant_of_around_transitions() {
        let berlin = Zone::parse("Europe/Berlin").unwrap();
        let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();

        // Last Sunday of October 2024: 02:30 happens twice
        let ambiguous = berlin.instant_of(at("2024-10-27 02:30")).unwrap();
        assert_eq!(ambiguous, Utc.with_ymd_and_hms(2024, 10, 27, 0, 30, 0).unwrap());

        // Last Sunday of March 2024: 02:30 never happens
        assert_eq!(berlin.instant_of(at("2024-03-31 02:30")), None);
    }

    #[test]
    fn test_resolve_keeps_configured_order() {
        let zones = resolve_zones(&config(), Zone::Named(Tz::UTC)).unwrap();
        assert_eq!(names(&zones), vec!["Local", "Sydney", "Berlin", "New York"]);
        assert!(zones[0].is_local);
    }

    #[test]
    fn test_unknown_zone_is_an_error() {
        let config = Config::minimal().with_timezones(vec![Location::new("Nowhere", "Mars/Olympus")]);
        let err = resolve_zones(&config, Zone::System).unwrap_err();
        assert!(matches!(err, Error::UnknownZone { ref zone, .. } if zone == "Mars/Olympus"));
    }

    #[test]
    fn test_sort_by_offset_with_pinned_local() {
        let mut zones = resolve_zones(&config(), Zone::Named(Tz::UTC)).unwrap();
        let sorting = Sorting {
            mode: SortMode::Offset,
            pin_local: true,
        };
        sort_zones(&mut zones, sorting, instant());
        assert_eq!(names(&zones), vec!["Local", "New York", "Berlin", "Sydney"]);
    }

    #[test]
    fn test_sort_by_offset_without_pin() {
        let mut zones = resolve_zones(&config(), Zone::Named(Tz::UTC)).unwrap();
        let sorting = Sorting {
            mode: SortMode::Offset,
            pin_local: false,
        };
        sort_zones(&mut zones, sorting, instant());
        assert_eq!(names(&zones), vec!["New York", "Local", "Berlin", "Sydney"]);
    }

    #[test]
    fn test_sort_by_name() {
        let mut zones = resolve_zones(&config(), Zone::Named(Tz::UTC)).unwrap();
        let sorting = Sorting {
            mode: SortMode::Name,
            pin_local: false,
        };
        sort_zones(&mut zones, sorting, instant());
        assert_eq!(names(&zones), vec!["Berlin", "Local", "New York", "Sydney"]);
    }
}
