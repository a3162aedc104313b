use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{cursor, execute, queue};
use std::io::{self, Stdout, Write};
use std::time::Duration;
use tzplot_engine::{CellStyle, DrawSurface, Error, EventSource, Key, Result, Screen, ScreenEvent};
use tzplot_types::{Color, NamedColor};

/// Alternate-screen terminal in raw mode.
///
/// Dropping it restores the terminal, whichever way the live loop ends.
pub struct TerminalScreen {
    out: Stdout,
    row: u16,
}

impl TerminalScreen {
    pub fn enter() -> Result<Self> {
        enable_raw_mode().map_err(|e| Error::Screen(format!("cannot enable raw mode: {}", e)))?;
        let mut out = io::stdout();
        if let Err(e) = execute!(out, EnterAlternateScreen, cursor::Hide) {
            let _ = disable_raw_mode();
            return Err(Error::Screen(format!("cannot enter alternate screen: {}", e)));
        }
        Ok(Self { out, row: 0 })
    }

    fn apply(&mut self, style: &CellStyle) -> Result<()> {
        queue!(self.out, ResetColor)?;
        if let Some(fg) = style.fg.as_ref().and_then(term_color) {
            queue!(self.out, SetForegroundColor(fg))?;
        }
        if let Some(bg) = style.bg.as_ref().and_then(term_color) {
            queue!(self.out, SetBackgroundColor(bg))?;
        }
        Ok(())
    }
}

impl Drop for TerminalScreen {
    fn drop(&mut self) {
        let _ = execute!(self.out, ResetColor, cursor::Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

impl DrawSurface for TerminalScreen {
    fn draw_line(&mut self, text: &str, style: &CellStyle) -> Result<()> {
        self.draw_cell(text, style)?;
        self.row = self.row.saturating_add(1);
        queue!(self.out, cursor::MoveTo(0, self.row))?;
        Ok(())
    }

    fn draw_cell(&mut self, text: &str, style: &CellStyle) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.apply(style)?;
        queue!(self.out, Print(text), ResetColor)?;
        Ok(())
    }
}

impl Screen for TerminalScreen {
    fn size(&mut self) -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }

    fn clear(&mut self, style: &CellStyle) -> Result<()> {
        self.apply(style)?;
        queue!(self.out, Clear(ClearType::All), cursor::MoveTo(0, 0), ResetColor)?;
        self.row = 0;
        Ok(())
    }

    fn fill_rows(&mut self, first_row: usize, style: &CellStyle) -> Result<()> {
        let Some(bg) = style.bg.as_ref().and_then(term_color) else {
            return Ok(());
        };
        let (_, rows) = terminal::size()?;
        let first = u16::try_from(first_row).unwrap_or(u16::MAX);
        for row in first..rows {
            queue!(
                self.out,
                cursor::MoveTo(0, row),
                SetBackgroundColor(bg),
                Clear(ClearType::UntilNewLine),
                ResetColor
            )?;
        }
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Crossterm equivalent of a palette color. Raw escape sequences have none.
fn term_color(color: &Color) -> Option<TermColor> {
    match color {
        Color::Named(named) => Some(match named {
            NamedColor::Black => TermColor::Black,
            NamedColor::White => TermColor::Grey,
            NamedColor::Red => TermColor::DarkRed,
            NamedColor::Yellow => TermColor::DarkYellow,
            NamedColor::Magenta => TermColor::DarkMagenta,
            NamedColor::Green => TermColor::DarkGreen,
            NamedColor::Blue => TermColor::DarkBlue,
            NamedColor::Cyan => TermColor::DarkCyan,
        }),
        Color::Rgb(r, g, b) => Some(TermColor::Rgb {
            r: *r,
            g: *g,
            b: *b,
        }),
        Color::Indexed(index) => Some(TermColor::AnsiValue(*index)),
        Color::Raw(_) => None,
    }
}

/// Non-blocking reader for crossterm input events.
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll_event(&mut self) -> Result<Option<ScreenEvent>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        Ok(match event::read()? {
            Event::Resize(columns, rows) => Some(ScreenEvent::Resize(columns, rows)),
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(ScreenEvent::Key(map_key(key))),
            _ => None,
        })
    }
}

fn map_key(key: KeyEvent) -> Key {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Key::Esc,
        KeyCode::Char('c') if ctrl => Key::CtrlC,
        KeyCode::Char('l') if ctrl => Key::CtrlL,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}
