use std::fmt;

/// Colors addressable by name in the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Black,
    White,
    Red,
    Yellow,
    Magenta,
    Green,
    Blue,
    Cyan,
}

impl NamedColor {
    pub const ALL: [NamedColor; 8] = [
        NamedColor::Black,
        NamedColor::White,
        NamedColor::Red,
        NamedColor::Yellow,
        NamedColor::Magenta,
        NamedColor::Green,
        NamedColor::Blue,
        NamedColor::Cyan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::White => "white",
            NamedColor::Red => "red",
            NamedColor::Yellow => "yellow",
            NamedColor::Magenta => "magenta",
            NamedColor::Green => "green",
            NamedColor::Blue => "blue",
            NamedColor::Cyan => "cyan",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        NamedColor::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
    }
}

/// A resolved color, ready to be applied by a draw surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    Named(NamedColor),
    Rgb(u8, u8, u8),
    /// Entry of the 256-color xterm palette.
    Indexed(u8),
    /// Raw terminal escape sequence, written as-is by surfaces that can.
    Raw(String),
}

impl Color {
    /// Resolve a color value from the configuration.
    ///
    /// Named colors win over every other form. Returns `None` for empty or
    /// unrecognized values so rendering can fall back to no color.
    pub fn parse(value: &str) -> Option<Color> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        if let Some(named) = NamedColor::from_name(value) {
            return Some(Color::Named(named));
        }
        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex);
        }
        if let Ok(index) = value.parse::<u8>() {
            return Some(Color::Indexed(index));
        }
        if value.starts_with('\u{1b}') {
            return Some(Color::Raw(value.to_string()));
        }
        None
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(named) => f.write_str(named.as_str()),
            Color::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            Color::Indexed(index) => write!(f, "{}", index),
            Color::Raw(raw) => write!(f, "{:?}", raw),
        }
    }
}
