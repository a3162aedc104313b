use owo_colors::{AnsiColors, OwoColorize, Rgb, XtermColors};
use std::io::Write;
use tzplot_engine::{CellStyle, DrawSurface, Result};
use tzplot_types::{Color, NamedColor};

const RESET: &str = "\u{1b}[0m";

/// Draw surface writing plain or ANSI-colored text to a stream.
pub struct ConsoleSurface<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DrawSurface for ConsoleSurface<W> {
    fn draw_line(&mut self, text: &str, style: &CellStyle) -> Result<()> {
        writeln!(self.out, "{}", paint(text, style))?;
        Ok(())
    }

    fn draw_cell(&mut self, text: &str, style: &CellStyle) -> Result<()> {
        write!(self.out, "{}", paint(text, style))?;
        Ok(())
    }
}

fn ansi(color: NamedColor) -> AnsiColors {
    match color {
        NamedColor::Black => AnsiColors::Black,
        NamedColor::White => AnsiColors::White,
        NamedColor::Red => AnsiColors::Red,
        NamedColor::Yellow => AnsiColors::Yellow,
        NamedColor::Magenta => AnsiColors::Magenta,
        NamedColor::Green => AnsiColors::Green,
        NamedColor::Blue => AnsiColors::Blue,
        NamedColor::Cyan => AnsiColors::Cyan,
    }
}

/// Foreground only; printed output has no background color.
fn paint(text: &str, style: &CellStyle) -> String {
    if text.is_empty() {
        return String::new();
    }
    match &style.fg {
        None => text.to_string(),
        Some(Color::Named(named)) => text.color(ansi(*named)).to_string(),
        Some(Color::Rgb(r, g, b)) => text.color(Rgb(*r, *g, *b)).to_string(),
        Some(Color::Indexed(index)) => text.color(XtermColors::from(*index)).to_string(),
        Some(Color::Raw(escape)) => format!("{}{}{}", escape, text, RESET),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tzplot_engine::Context;
    use tzplot_types::DaySegment;

    fn styled(fg: Color) -> CellStyle {
        CellStyle::new(Context::Segment(DaySegment::Day), Some(fg), None)
    }

    fn output(surface: ConsoleSurface<Vec<u8>>) -> String {
        String::from_utf8(surface.into_inner()).unwrap()
    }

    #[test]
    fn test_plain_text_is_untouched() {
        let mut surface = ConsoleSurface::new(Vec::new());
        surface.draw_cell("#", &CellStyle::plain()).unwrap();
        surface.draw_line("", &CellStyle::plain()).unwrap();
        surface.draw_line("Local: Sat 24 Aug 1985 14:00", &CellStyle::plain()).unwrap();
        assert_eq!(output(surface), "#\nLocal: Sat 24 Aug 1985 14:00\n");
    }

    #[test]
    fn test_named_color_uses_ansi_codes() {
        let mut surface = ConsoleSurface::new(Vec::new());
        surface
            .draw_cell("#", &styled(Color::Named(NamedColor::Yellow)))
            .unwrap();
        assert_eq!(output(surface), "\u{1b}[33m#\u{1b}[39m");
    }

    #[test]
    fn test_truecolor_and_xterm() {
        let mut surface = ConsoleSurface::new(Vec::new());
        surface.draw_cell("#", &styled(Color::Rgb(255, 128, 0))).unwrap();
        surface.draw_cell("#", &styled(Color::Indexed(208))).unwrap();
        let text = output(surface);
        assert!(text.contains("\u{1b}[38;2;255;128;0m#"));
        assert!(text.contains("\u{1b}[38;5;208m#"));
    }

    #[test]
    fn test_raw_escape_is_written_verbatim() {
        let mut surface = ConsoleSurface::new(Vec::new());
        surface
            .draw_cell("#", &styled(Color::Raw("\u{1b}[35m".to_string())))
            .unwrap();
        assert_eq!(output(surface), "\u{1b}[35m#\u{1b}[0m");
    }
}
