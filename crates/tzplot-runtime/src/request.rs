use crate::{Error, Result};
use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc};
use tzplot_engine::Zone;
use tzplot_types::Config;

const ZONE_SEPARATOR: char = '@';

/// Parse a requested time such as `7pm`, `19:30`, `1930@2` or
/// `2024-03-01T09:00:00@Asia/Tokyo` into an instant.
///
/// Without a suffix the time is read in `local`. Time-only forms use
/// today's date in the zone they are read in.
pub fn parse_request_time(config: &Config, text: &str, local: Zone) -> Result<DateTime<Utc>> {
    parse_request_time_at(config, text, local, Utc::now())
}

/// Like `parse_request_time`, with an explicit "now" for the date.
pub fn parse_request_time_at(
    config: &Config,
    text: &str,
    local: Zone,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>> {
    let text = text.trim();
    let (time_text, zone) = match text.split_once(ZONE_SEPARATOR) {
        Some((time, target)) => {
            if target.contains(ZONE_SEPARATOR) {
                return Err(Error::InvalidTime(text.to_string()));
            }
            (time.trim(), target_zone(config, target.trim(), local)?)
        }
        None => (text, local),
    };

    if let Ok(instant) = DateTime::parse_from_rfc3339(time_text) {
        return Ok(instant.with_timezone(&Utc));
    }

    let naive = match NaiveDateTime::parse_from_str(time_text, "%Y-%m-%dT%H:%M:%S") {
        Ok(naive) => naive,
        Err(_) => {
            let time = parse_time_of_day(time_text)
                .ok_or_else(|| Error::InvalidTime(text.to_string()))?;
            zone.local_time(now).date_naive().and_time(time)
        }
    };

    zone.instant_of(naive).ok_or_else(|| {
        tracing::debug!(%naive, "requested time does not exist in target zone");
        Error::InvalidTime(text.to_string())
    })
}

/// Zone named by the part after `@`: a 1-based index into the configured
/// zones (0 is local) or a timezone database name.
fn target_zone(config: &Config, target: &str, local: Zone) -> Result<Zone> {
    if let Ok(index) = target.parse::<i64>() {
        let available = config.timezones.len();
        return match index {
            0 => Ok(local),
            i if i > 0 && (i as usize) <= available => {
                let tz = &config.timezones[i as usize - 1].tz;
                Zone::parse(tz).ok_or_else(|| Error::InvalidTimezone(tz.clone()))
            }
            _ => Err(Error::ZoneIndexOutOfRange { index, available }),
        };
    }
    Zone::parse(target).ok_or_else(|| Error::InvalidTimezone(target.to_string()))
}

/// Time-of-day forms: `H`, `HH:MM`, `HH:MM:SS`, `HHMM`, `HHMMSS`, and the
/// 12-hour `Ham`, `H:MMpm`, `H:MM:SSpm`.
fn parse_time_of_day(text: &str) -> Option<NaiveTime> {
    if !text.is_ascii() {
        return None;
    }
    let lower = text.to_ascii_lowercase();
    let (clock, meridiem) = if let Some(rest) = lower.strip_suffix("am") {
        (rest, Some(false))
    } else if let Some(rest) = lower.strip_suffix("pm") {
        (rest, Some(true))
    } else {
        (lower.as_str(), None)
    };

    let (hour, minute, second) = if clock.contains(':') {
        let mut parts = clock.split(':');
        let hour = number(parts.next()?, 1, 2)?;
        let minute = number(parts.next()?, 2, 2)?;
        let second = match parts.next() {
            Some(part) => number(part, 2, 2)?,
            None => 0,
        };
        if parts.next().is_some() {
            return None;
        }
        (hour, minute, second)
    } else if meridiem.is_some() {
        (number(clock, 1, 2)?, 0, 0)
    } else {
        match clock.len() {
            1 | 2 => (number(clock, 1, 2)?, 0, 0),
            4 => (number(&clock[..2], 2, 2)?, number(&clock[2..], 2, 2)?, 0),
            6 => (
                number(&clock[..2], 2, 2)?,
                number(&clock[2..4], 2, 2)?,
                number(&clock[4..], 2, 2)?,
            ),
            _ => return None,
        }
    };

    let hour = match meridiem {
        Some(pm) => {
            if !(1..=12).contains(&hour) {
                return None;
            }
            hour % 12 + if pm { 12 } else { 0 }
        }
        None => hour,
    };
    NaiveTime::from_hms_opt(hour, minute, second)
}

/// Unsigned decimal with `min..=max` digits.
fn number(text: &str, min: usize, max: usize) -> Option<u32> {
    if text.len() < min || text.len() > max || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
