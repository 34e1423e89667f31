use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ExtractError {
    /// Reading a config file (or the directory) failed
    Io { path: PathBuf, source: io::Error },
    /// Extractor settings could not be loaded
    Config(String),
    /// Input path is missing or not a directory
    InvalidInput(String),
}

impl ExtractError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ExtractError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::Io { path, source } => {
                write!(f, "Error reading '{}': {}", path.display(), source)
            }
            ExtractError::Config(reason) => write!(f, "ConfigError: {}", reason),
            ExtractError::InvalidInput(reason) => write!(f, "InvalidInput: {}", reason),
        }
    }
}

impl Error for ExtractError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ExtractError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for ExtractError {
    fn from(error: toml::de::Error) -> Self {
        ExtractError::Config(error.to_string())
    }
}
