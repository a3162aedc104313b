use std::fmt;

/// Result type for tzplot-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rendering
#[derive(Debug)]
pub enum Error {
    /// A configured zone is not in the timezone database
    UnknownZone { name: String, zone: String },

    /// Configuration values failed validation
    Config(tzplot_types::Error),

    /// Writing to the draw surface failed
    Draw(std::io::Error),

    /// Interactive screen could not be used
    Screen(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownZone { name, zone } => {
                write!(f, "Unknown timezone '{}' (configured as '{}')", zone, name)
            }
            Error::Config(err) => write!(f, "Configuration error: {}", err),
            Error::Draw(err) => write!(f, "Draw error: {}", err),
            Error::Screen(msg) => write!(f, "Screen error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(err) => Some(err),
            Error::Draw(err) => Some(err),
            Error::UnknownZone { .. } | Error::Screen(_) => None,
        }
    }
}

impl From<tzplot_types::Error> for Error {
    fn from(err: tzplot_types::Error) -> Self {
        Error::Config(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Draw(err)
    }
}
