use crate::ui::ConsoleSurface;
use anyhow::Result;
use std::io;
use terminal_size::{Width, terminal_size};
use tzplot_engine::{Zone, plot_static};
use tzplot_types::{Config, PlotRequest};

pub fn handle(config: &Config, request: &PlotRequest) -> Result<()> {
    let width = terminal_size().map(|(Width(w), _)| usize::from(w));
    let mut surface = ConsoleSurface::new(io::stdout().lock());

    plot_static(config, Zone::System, request, width, &mut surface)?;
    surface.flush()?;
    Ok(())
}
