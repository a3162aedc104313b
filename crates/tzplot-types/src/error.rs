use std::fmt;

/// Result type for tzplot-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while validating configuration values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Day segment boundaries are out of range or not strictly increasing
    InvalidSegments(String),

    /// Custom symbol table does not hold one glyph per hour
    InvalidSymbolTable(usize),

    /// Custom symbol does not fill exactly one terminal column
    InvalidSymbol { hour: usize, symbol: String },

    /// Symbol mode name is not recognized
    UnknownSymbolMode(String),

    /// Sort mode name is not recognized
    UnknownSortMode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSegments(msg) => write!(f, "Invalid day segments: {}", msg),
            Error::InvalidSymbolTable(len) => write!(
                f,
                "Invalid custom symbols: expected 24 entries (one per hour), got {}",
                len
            ),
            Error::InvalidSymbol { hour, symbol } => write!(
                f,
                "Invalid custom symbol for hour {}: {:?} must be one column wide",
                hour, symbol
            ),
            Error::UnknownSymbolMode(mode) => write!(f, "Unknown symbol mode: {}", mode),
            Error::UnknownSortMode(mode) => write!(f, "Unknown sort mode: {}", mode),
        }
    }
}

impl std::error::Error for Error {}
