//! Display drivers: a single static pass or a live refreshing screen.

pub mod live;
pub mod static_plot;

/// Narrowest width a frame is rendered at.
pub const MIN_WIDTH: usize = 24;

/// Width used when the terminal is narrower than `MIN_WIDTH` or unknown.
pub const FALLBACK_WIDTH: usize = 72;

pub fn clamp_width(width: Option<usize>) -> usize {
    match width {
        Some(width) if width >= MIN_WIDTH => width,
        _ => FALLBACK_WIDTH,
    }
}
