//! Value types shared by every tzplot layer.
//!
//! Everything in here is plain data: configuration as persisted, the
//! requested instant, day segmentation and symbol/color selectors.

mod color;
mod config;
mod error;
mod request;
mod segment;
mod sort;
mod symbol;

pub use color::{Color, NamedColor};
pub use config::{CONFIG_VERSION, Config, LOCAL_NAME, Location, Palette, PaletteTarget, Style};
pub use error::{Error, Result};
pub use request::PlotRequest;
pub use segment::{DaySegment, DaySegments};
pub use sort::{SortMode, Sorting};
pub use symbol::SymbolMode;
