use crate::types::LogLevel;
use clap::Parser;
use tzplot_types::{SortMode, SymbolMode};

#[derive(Parser, Debug)]
#[command(name = "tzplot")]
#[command(about = "Plot the day across timezones, centered on now or a given time", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: TZPLOT_CONFIG or the platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,

    /// Zones to display, comma-separated: 'Europe/London' or named 'Office:America/New_York'
    #[arg(long, value_name = "LIST")]
    pub timezones: Option<String>,

    /// Symbols for the day bars (rectangles, sun-moon, mono, blocks, clocks, custom)
    #[arg(long, value_name = "MODE", value_parser = parse_symbols)]
    pub symbols: Option<SymbolMode>,

    /// Show local hour tics below the bars
    #[arg(long, value_name = "BOOL", value_parser = parse_bool)]
    pub tics: Option<bool>,

    /// Use the full terminal width at the cost of hour alignment
    #[arg(long, value_name = "BOOL", value_parser = parse_bool)]
    pub stretch: Option<bool>,

    /// Color the symbols by time of day
    #[arg(long, value_name = "BOOL", value_parser = parse_bool)]
    pub colorize: Option<bool>,

    /// Use a 12-hour clock
    #[arg(long, value_name = "BOOL", value_parser = parse_bool)]
    pub hours12: Option<bool>,

    /// Keep refreshing the plot (quit with q, Esc or Ctrl+C)
    #[arg(long, value_name = "BOOL", value_parser = parse_bool)]
    pub live: Option<bool>,

    /// Row order (none, offset, name)
    #[arg(long, value_name = "MODE", value_parser = parse_sort)]
    pub sort: Option<SortMode>,

    /// Keep the local zone on top when sorting
    #[arg(long, value_name = "BOOL", value_parser = parse_bool)]
    pub pin_local: Option<bool>,

    /// Time to plot instead of now, e.g. 20:00, 2000, 8pm or 8pm@Europe/Berlin
    #[arg(long, value_name = "TIME")]
    pub time: Option<String>,

    /// Same as --time when it starts with a digit
    #[arg(value_name = "TIME")]
    pub time_arg: Option<String>,
}

impl Cli {
    /// Requested time, `--time` first.
    pub fn requested_time(&self) -> Option<&str> {
        if let Some(time) = &self.time {
            return Some(time);
        }
        match self.time_arg.as_deref() {
            Some(arg) if arg.starts_with(|c: char| c.is_ascii_digit()) => Some(arg),
            Some(arg) => {
                tracing::warn!(argument = arg, "ignoring argument that is not a time");
                None
            }
            None => None,
        }
    }
}

fn parse_bool(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(format!("expected true or false, got '{}'", value)),
    }
}

fn parse_symbols(value: &str) -> Result<SymbolMode, String> {
    value.parse().map_err(|e: tzplot_types::Error| e.to_string())
}

fn parse_sort(value: &str) -> Result<SortMode, String> {
    value.parse().map_err(|e: tzplot_types::Error| e.to_string())
}
