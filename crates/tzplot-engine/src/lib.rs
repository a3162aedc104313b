// Engine - slot math, day segmentation and frame rendering
// Draws through the DrawSurface trait only; terminals live in the CLI layer

pub mod display;
mod error;
pub mod format;
pub mod frame;
pub mod segment;
pub mod slots;
pub mod surface;
pub mod symbols;
pub mod zone;

pub use display::live::{
    Clock, EventSource, Key, LiveDriver, LiveState, POLL_INTERVAL, Screen, ScreenEvent,
    SystemClock,
};
pub use display::static_plot::plot_static;
pub use display::{FALLBACK_WIDTH, MIN_WIDTH, clamp_width};
pub use error::{Error, Result};
pub use frame::{FrameSummary, Plotter};
pub use segment::segment;
pub use slots::{SlotPlan, compute_slots, effective_width};
pub use surface::{Cell, CellStyle, Context, DrawSurface, RecordingSurface};
pub use symbols::{NOW_MARKER, resolve_color, resolve_symbol};
pub use zone::{PlotZone, Zone, resolve_zones, sort_zones};
