use super::clamp_width;
use crate::Result;
use crate::frame::{FrameSummary, Plotter};
use crate::surface::DrawSurface;
use crate::zone::Zone;
use tzplot_types::{Config, PaletteTarget, PlotRequest};

/// Render one frame with the static palette and return.
///
/// `width` is the terminal width if it could be determined.
pub fn plot_static<S: DrawSurface + ?Sized>(
    config: &Config,
    local: Zone,
    request: &PlotRequest,
    width: Option<usize>,
    surface: &mut S,
) -> Result<FrameSummary> {
    let plotter = Plotter::new(config, local, PaletteTarget::Static)?;
    let width = clamp_width(width);
    tracing::debug!(width, instant = %request.instant, "plotting static frame");
    plotter.render(request, width, surface)
}
