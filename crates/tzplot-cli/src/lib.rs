mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod types;
pub mod ui;

pub use args::Cli;
pub use commands::run;
