use std::fmt;

/// Result type for tzplot-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Configuration file could not be read, written or located
    Config(String),

    /// Configuration file declares a version this build does not understand
    UnsupportedVersion(String),

    /// Zone name not found in the timezone database
    InvalidTimezone(String),

    /// Requested time could not be parsed or does not exist
    InvalidTime(String),

    /// `time@index` referenced a zone that is not configured
    ZoneIndexOutOfRange { index: i64, available: usize },

    /// Configuration values failed validation
    Types(tzplot_types::Error),

    /// Rendering layer rejected the configuration
    Engine(tzplot_engine::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::UnsupportedVersion(version) => {
                write!(f, "Config file version {} is not supported", version)
            }
            Error::InvalidTimezone(zone) => write!(f, "Invalid timezone: {}", zone),
            Error::InvalidTime(text) => write!(f, "Invalid time: {}", text),
            Error::ZoneIndexOutOfRange { index, available } => write!(
                f,
                "Timezone index {} out of range (0 is local, 1-{} are configured zones)",
                index, available
            ),
            Error::Types(err) => write!(f, "{}", err),
            Error::Engine(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Types(err) => Some(err),
            Error::Engine(err) => Some(err),
            Error::Config(_)
            | Error::UnsupportedVersion(_)
            | Error::InvalidTimezone(_)
            | Error::InvalidTime(_)
            | Error::ZoneIndexOutOfRange { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<tzplot_types::Error> for Error {
    fn from(err: tzplot_types::Error) -> Self {
        Error::Types(err)
    }
}

impl From<tzplot_engine::Error> for Error {
    fn from(err: tzplot_engine::Error) -> Self {
        Error::Engine(err)
    }
}
