pub mod console;
pub mod screen;

pub use console::ConsoleSurface;
pub use screen::{TerminalEvents, TerminalScreen};
