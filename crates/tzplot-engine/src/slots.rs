use chrono::{DateTime, Duration, Utc};

pub const HOURS_PER_DAY: usize = 24;
pub const MINUTES_PER_DAY: i64 = 1440;

/// Sample instants for one render pass, one per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotPlan {
    /// Number of columns actually used.
    pub width: usize,
    /// Column of the reference instant.
    pub now_slot: usize,
    pub slot_minutes: i64,
    pub offset_minutes: i64,
    pub samples: Vec<DateTime<Utc>>,
}

/// Columns used for a given terminal width.
///
/// Without stretching the width is cut down to a multiple of 24 so every
/// hour covers the same whole number of columns.
pub fn effective_width(terminal_width: usize, stretch: bool) -> usize {
    if stretch {
        terminal_width
    } else {
        terminal_width / HOURS_PER_DAY * HOURS_PER_DAY
    }
}

/// Spread `width` samples over 24 hours around `reference`.
///
/// Slot length is `1440 / width` minutes in integer math, so widths that do
/// not divide a day evenly cover slightly less than 24 hours. The sample at
/// `now_slot` is always exactly `reference`.
pub fn compute_slots(reference: DateTime<Utc>, terminal_width: usize, stretch: bool) -> SlotPlan {
    let width = effective_width(terminal_width, stretch);
    let now_slot = width / 2;
    if width == 0 {
        return SlotPlan {
            width,
            now_slot,
            slot_minutes: 0,
            offset_minutes: 0,
            samples: Vec::new(),
        };
    }

    let slot_minutes = MINUTES_PER_DAY / width as i64;
    let offset_minutes = slot_minutes * now_slot as i64;
    let samples = (0..width as i64)
        .map(|i| reference + Duration::minutes(i * slot_minutes - offset_minutes))
        .collect();

    SlotPlan {
        width,
        now_slot,
        slot_minutes,
        offset_minutes,
        samples,
    }
}
