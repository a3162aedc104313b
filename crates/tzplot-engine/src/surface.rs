use crate::Result;
use tzplot_types::{Color, DaySegment};

/// What a piece of text represents, so a surface can style it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Context {
    /// Headers, markers and tics.
    #[default]
    Foreground,
    /// Filler for rows without content.
    Background,
    /// A symbol standing for an hour in the given segment.
    Segment(DaySegment),
}

/// Styling attached to a draw call. Colors are already resolved against
/// the palette; `None` means the surface default.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub context: Context,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl CellStyle {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn new(context: Context, fg: Option<Color>, bg: Option<Color>) -> Self {
        Self { context, fg, bg }
    }
}

/// Where the frame renderer sends its output.
pub trait DrawSurface {
    /// Draw `text` and move to the start of the next row.
    fn draw_line(&mut self, text: &str, style: &CellStyle) -> Result<()>;

    /// Draw `text` at the current position without leaving the row.
    fn draw_cell(&mut self, text: &str, style: &CellStyle) -> Result<()>;
}

/// One draw call as seen by a `RecordingSurface`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub style: CellStyle,
}

/// In-memory surface that keeps every draw call, grouped by row.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub rows: Vec<Vec<Cell>>,
    current: Vec<Cell>,
    pub line_calls: usize,
    pub cell_calls: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed rows as plain text.
    pub fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.text.as_str()).collect())
            .collect()
    }

    /// Total number of draw calls received.
    pub fn calls(&self) -> usize {
        self.line_calls + self.cell_calls
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.current.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn draw_line(&mut self, text: &str, style: &CellStyle) -> Result<()> {
        self.line_calls += 1;
        if !text.is_empty() {
            self.current.push(Cell {
                text: text.to_string(),
                style: style.clone(),
            });
        }
        self.rows.push(std::mem::take(&mut self.current));
        Ok(())
    }

    fn draw_cell(&mut self, text: &str, style: &CellStyle) -> Result<()> {
        self.cell_calls += 1;
        self.current.push(Cell {
            text: text.to_string(),
            style: style.clone(),
        });
        Ok(())
    }
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    fn draw_line(&mut self, text: &str, style: &CellStyle) -> Result<()> {
        (**self).draw_line(text, style)
    }

    fn draw_cell(&mut self, text: &str, style: &CellStyle) -> Result<()> {
        (**self).draw_cell(text, style)
    }
}
