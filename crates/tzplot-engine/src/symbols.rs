use crate::segment::segment;
use tzplot_types::{Color, DaySegment, PaletteTarget, Style, SymbolMode};

/// Glyph drawn at the "now" column of every row.
pub const NOW_MARKER: &str = "|";

const RECTANGLES: [&str; 4] = [" ", "▒", "█", "▒"];
const SUN_MOON: [&str; 4] = ["☾", "☼", "☀", "☼"];
const BLOCKS: [&str; 4] = ["░", "▒", "█", "▓"];
const MONO: &str = "#";

/// Circled hours from 12 to 11, used for both halves of the day.
///
/// Every row cell must be one column; clock-face emoji take two.
const CLOCKS: [&str; 12] = [
    "⑫", "①", "②", "③", "④", "⑤", "⑥", "⑦", "⑧", "⑨", "⑩", "⑪",
];

fn by_segment(table: &'static [&'static str; 4], segment: DaySegment) -> &'static str {
    match segment {
        DaySegment::Night => table[0],
        DaySegment::Morning => table[1],
        DaySegment::Day => table[2],
        DaySegment::Evening => table[3],
    }
}

/// Glyph for an hour of the day; independent of the colorize flag.
///
/// `Custom` reads `style.custom_symbols`, which configuration validation
/// guarantees to hold 24 single-column entries.
///
/// # Panics
///
/// Panics if `hour` is not in `0..24`.
pub fn resolve_symbol(style: &Style, hour: u32) -> &str {
    assert!(hour < 24, "invalid hour: {}", hour);
    match style.symbols {
        SymbolMode::Rectangles => by_segment(&RECTANGLES, segment(&style.day_segments, hour)),
        SymbolMode::SunMoon => by_segment(&SUN_MOON, segment(&style.day_segments, hour)),
        SymbolMode::Blocks => by_segment(&BLOCKS, segment(&style.day_segments, hour)),
        SymbolMode::Mono => MONO,
        SymbolMode::Clocks => CLOCKS[(hour % 12) as usize],
        SymbolMode::Custom => &style.custom_symbols[hour as usize],
    }
}

/// Color of a day segment, or `None` when coloring is off or the
/// configured value cannot be resolved.
pub fn resolve_color(style: &Style, segment: DaySegment, target: PaletteTarget) -> Option<Color> {
    if !style.colorize {
        return None;
    }
    Color::parse(style.coloring.segment(target, segment))
}

/// Color for headers and other plain text.
pub fn resolve_foreground(style: &Style, target: PaletteTarget) -> Option<Color> {
    if !style.colorize {
        return None;
    }
    Color::parse(style.coloring.foreground(target))
}

pub fn resolve_background(style: &Style, target: PaletteTarget) -> Option<Color> {
    if !style.colorize {
        return None;
    }
    Color::parse(style.coloring.background(target))
}
