use crate::format::{format_day, format_tic, format_time, pad_right, text_width};
use crate::segment::segment;
use crate::slots::{SlotPlan, compute_slots};
use crate::surface::{CellStyle, Context, DrawSurface};
use crate::symbols::{NOW_MARKER, resolve_background, resolve_color, resolve_foreground, resolve_symbol};
use crate::zone::{PlotZone, Zone, resolve_zones, sort_zones};
use crate::Result;
use chrono::{DateTime, Timelike, Utc};
use tzplot_types::{Config, PaletteTarget, PlotRequest};

/// Shape of a rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSummary {
    /// Columns used by the symbol rows.
    pub width: usize,
    pub now_slot: usize,
    /// Rows drawn, headers and tics included.
    pub rows: usize,
}

/// Renders frames for one configuration.
///
/// Rendering is a pure function of the configuration, the request and the
/// width: the same inputs always produce the same draw calls.
#[derive(Debug, Clone)]
pub struct Plotter<'a> {
    config: &'a Config,
    local: Zone,
    target: PaletteTarget,
}

impl<'a> Plotter<'a> {
    pub fn new(config: &'a Config, local: Zone, target: PaletteTarget) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            local,
            target,
        })
    }

    /// Rows in display order for the given instant.
    pub fn zones(&self, instant: DateTime<Utc>) -> Result<Vec<PlotZone>> {
        let mut zones = resolve_zones(self.config, self.local)?;
        sort_zones(&mut zones, self.config.sorting, instant);
        Ok(zones)
    }

    /// Style for filling screen area the frame does not cover.
    pub fn background_style(&self) -> CellStyle {
        CellStyle::new(
            Context::Background,
            None,
            resolve_background(&self.config.style, self.target),
        )
    }

    fn text_style(&self) -> CellStyle {
        CellStyle::new(
            Context::Foreground,
            resolve_foreground(&self.config.style, self.target),
            resolve_background(&self.config.style, self.target),
        )
    }

    /// Draw one frame onto `surface`.
    ///
    /// Zones are resolved before anything is drawn, so a broken zone never
    /// leaves a partial frame behind.
    pub fn render<S: DrawSurface + ?Sized>(
        &self,
        request: &PlotRequest,
        terminal_width: usize,
        surface: &mut S,
    ) -> Result<FrameSummary> {
        let zones = self.zones(request.instant)?;
        let plan = compute_slots(request.instant, terminal_width, self.config.stretch);
        let text = self.text_style();

        surface.draw_line(&self.top_header(request, &plan), &text)?;

        let name_width = zones.iter().map(|z| text_width(&z.name)).max().unwrap_or(0);
        for zone in &zones {
            surface.draw_line(&self.zone_header(zone, name_width, request, &plan), &text)?;
            self.draw_row(zone, &plan, surface)?;
        }

        let mut rows = 1 + zones.len() * 2;
        if self.config.tics {
            let (marks, labels) = self.tic_lines(&plan);
            surface.draw_line(&marks, &text)?;
            surface.draw_line(&labels, &text)?;
            rows += 2;
        }

        Ok(FrameSummary {
            width: plan.width,
            now_slot: plan.now_slot,
            rows,
        })
    }

    /// `now v 14:00` with the `v` right above the marker column.
    fn top_header(&self, request: &PlotRequest, plan: &SlotPlan) -> String {
        let label = request.label();
        let pad = plan.now_slot.saturating_sub(label.len() + 1);
        let time = self.local.local_time(request.instant);
        format!(
            "{}{} v {}",
            " ".repeat(pad),
            label,
            format_time(self.config.hours12, &time)
        )
    }

    fn zone_header(
        &self,
        zone: &PlotZone,
        name_width: usize,
        request: &PlotRequest,
        plan: &SlotPlan,
    ) -> String {
        let time = zone.zone.local_time(request.instant);
        let header = format!(
            "{}: {} {}",
            pad_right(&zone.name, name_width),
            format_day(&time),
            format_time(self.config.hours12, &time)
        );
        if text_width(&header) <= plan.now_slot {
            format!("{}{}", pad_right(&header, plan.now_slot), NOW_MARKER)
        } else {
            header
        }
    }

    fn draw_row<S: DrawSurface + ?Sized>(
        &self,
        zone: &PlotZone,
        plan: &SlotPlan,
        surface: &mut S,
    ) -> Result<()> {
        let style = &self.config.style;
        let bg = resolve_background(style, self.target);
        let marker = CellStyle::new(Context::Foreground, None, bg.clone());

        for (column, sample) in plan.samples.iter().enumerate() {
            if column == plan.now_slot {
                surface.draw_cell(NOW_MARKER, &marker)?;
                continue;
            }
            let hour = zone.zone.local_time(*sample).hour();
            let seg = segment(&style.day_segments, hour);
            let cell = CellStyle::new(
                Context::Segment(seg),
                resolve_color(style, seg, self.target),
                bg.clone(),
            );
            surface.draw_cell(resolve_symbol(style, hour), &cell)?;
        }
        surface.draw_line("", &CellStyle::new(Context::Foreground, None, bg))
    }

    /// Tic marks and their labels, in the local zone.
    fn tic_lines(&self, plan: &SlotPlan) -> (String, String) {
        let mut tics: Vec<Option<String>> = vec![None; plan.width];
        let mut last_hour = None;
        for (column, sample) in plan.samples.iter().enumerate() {
            let hour = self.local.local_time(*sample).hour();
            if hour % 3 == 0 && last_hour != Some(hour) {
                tics[column] = Some(format_tic(self.config.hours12, hour));
                last_hour = Some(hour);
            }
        }

        let marks = tics
            .iter()
            .map(|tic| if tic.is_some() { '^' } else { ' ' })
            .collect();

        let mut labels = String::with_capacity(plan.width);
        let mut column = 0;
        while column < plan.width {
            match &tics[column] {
                Some(label) if column + text_width(label) < plan.width => {
                    labels.push_str(label);
                    column += text_width(label).max(1);
                }
                _ => {
                    labels.push(' ');
                    column += 1;
                }
            }
        }

        (marks, labels)
    }
}
