use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use unicode_width::UnicodeWidthStr;

/// Clock reading such as `14:05` or `2:05PM`.
pub fn format_time<Tz: TimeZone>(hours12: bool, time: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    if hours12 {
        time.format("%-I:%M%p").to_string()
    } else {
        time.format("%H:%M").to_string()
    }
}

/// Calendar day such as `Sat 24 Aug 1985`.
pub fn format_day<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    time.format("%a %d %b %Y").to_string()
}

/// Hour label below a tic mark: `15` or `3PM`.
pub fn format_tic(hours12: bool, hour: u32) -> String {
    if !hours12 {
        return hour.to_string();
    }
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let clock = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}{}", clock, suffix)
}

/// Display columns taken by `text`.
pub fn text_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Left-align `text` in a field of `width` display columns.
pub fn pad_right(text: &str, width: usize) -> String {
    let used = text_width(text);
    let mut out = String::with_capacity(text.len() + width.saturating_sub(used));
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    out
}
