use crate::ui::{TerminalEvents, TerminalScreen};
use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use std::io;
use tzplot_engine::{LiveDriver, Plotter, SystemClock, Zone};
use tzplot_types::{Config, PaletteTarget};

pub fn handle(config: &Config) -> Result<()> {
    if !io::stdout().is_terminal() {
        bail!("live mode needs an interactive terminal (run with --live false to print once)");
    }

    let plotter = Plotter::new(config, Zone::System, PaletteTarget::Live)?;
    let screen = TerminalScreen::enter()?;
    let mut driver = LiveDriver::new(plotter, screen, TerminalEvents, SystemClock);

    // Terminal is restored when the driver and its screen drop
    driver.run()?;
    Ok(())
}
