use chrono::{DateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use tzplot_engine::Zone;
use tzplot_runtime::{Error, parse_request_time_at};
use tzplot_types::Config;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1985, 8, 24, 10, 0, 0).unwrap()
}

fn utc() -> Zone {
    Zone::Named(Tz::UTC)
}

#[test]
fn test_named_zone_suffix() {
    let config = Config::default();
    let instant = parse_request_time_at(&config, "7pm@Europe/Berlin", utc(), now()).unwrap();

    assert_eq!(instant.with_timezone(&chrono_tz::Europe::Berlin).hour(), 19);
    assert_eq!(instant, Utc.with_ymd_and_hms(1985, 8, 24, 17, 0, 0).unwrap());
}

#[test]
fn test_index_suffix_matches_named_zone() {
    let config = Config::default();
    assert_eq!(config.timezones[1].tz, "Europe/Berlin");

    let by_index = parse_request_time_at(&config, "7pm@2", utc(), now()).unwrap();
    let by_name = parse_request_time_at(&config, "7pm@Europe/Berlin", utc(), now()).unwrap();
    assert_eq!(by_index, by_name);
}

#[test]
fn test_index_zero_is_local() {
    let config = Config::default();
    let instant = parse_request_time_at(&config, "19:30@0", utc(), now()).unwrap();
    assert_eq!(instant, Utc.with_ymd_and_hms(1985, 8, 24, 19, 30, 0).unwrap());

    let plain = parse_request_time_at(&config, "1930", utc(), now()).unwrap();
    assert_eq!(plain, instant);
}

#[test]
fn test_index_out_of_range() {
    let config = Config::default();
    let err = parse_request_time_at(&config, "7pm@5", utc(), now()).unwrap_err();
    assert!(matches!(
        err,
        Error::ZoneIndexOutOfRange {
            index: 5,
            available: 4
        }
    ));

    let err = parse_request_time_at(&config, "7pm@-1", utc(), now()).unwrap_err();
    assert!(matches!(err, Error::ZoneIndexOutOfRange { index: -1, .. }));
}

#[test]
fn test_unknown_zone_suffix() {
    let err = parse_request_time_at(&Config::default(), "7pm@Mars/Base", utc(), now()).unwrap_err();
    assert!(matches!(err, Error::InvalidTimezone(ref zone) if zone == "Mars/Base"));
}

#[test]
fn test_today_is_taken_in_target_zone() {
    let late = Utc.with_ymd_and_hms(1985, 8, 24, 23, 30, 0).unwrap();
    let instant =
        parse_request_time_at(&Config::default(), "9@Australia/Sydney", utc(), late).unwrap();

    // Already the 25th in Sydney (UTC+10)
    assert_eq!(instant, Utc.with_ymd_and_hms(1985, 8, 24, 23, 0, 0).unwrap());
}

#[test]
fn test_full_date_time_forms() {
    let config = Config::default();
    let expected = Utc.with_ymd_and_hms(1985, 8, 24, 14, 0, 0).unwrap();

    let rfc = parse_request_time_at(&config, "1985-08-24T16:00:00+02:00", utc(), now()).unwrap();
    assert_eq!(rfc, expected);

    let zoned =
        parse_request_time_at(&config, "1985-08-24T16:00:00@Europe/Berlin", utc(), now()).unwrap();
    assert_eq!(zoned, expected);
}

#[test]
fn test_skipped_local_time_is_invalid() {
    let err = parse_request_time_at(
        &Config::default(),
        "2024-03-31T02:30:00@Europe/Berlin",
        utc(),
        now(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidTime(_)));
}

#[test]
fn test_repeated_local_time_picks_earliest() {
    let instant = parse_request_time_at(
        &Config::default(),
        "2024-10-27T02:30:00@Europe/Berlin",
        utc(),
        now(),
    )
    .unwrap();
    assert_eq!(instant, Utc.with_ymd_and_hms(2024, 10, 27, 0, 30, 0).unwrap());
}

#[test]
fn test_garbage_is_invalid() {
    for text in ["noon", "25", "7pm@1@2", "12:60"] {
        let err = parse_request_time_at(&Config::default(), text, utc(), now()).unwrap_err();
        assert!(matches!(err, Error::InvalidTime(_)), "{:?}", text);
    }
}
