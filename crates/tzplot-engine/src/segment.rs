use tzplot_types::{DaySegment, DaySegments};

/// Classify an hour of the day.
///
/// # Panics
///
/// Panics if `hour` is not in `0..24`. Hours always come from a valid
/// timestamp, so anything else is a caller bug.
pub fn segment(bounds: &DaySegments, hour: u32) -> DaySegment {
    assert!(hour < 24, "invalid hour: {}", hour);
    if hour < bounds.morning || hour >= bounds.night {
        DaySegment::Night
    } else if hour < bounds.day {
        DaySegment::Morning
    } else if hour < bounds.evening {
        DaySegment::Day
    } else if hour < bounds.night {
        DaySegment::Evening
    } else {
        unreachable!("day segments {:?} leave hour {} uncovered", bounds, hour)
    }
}
