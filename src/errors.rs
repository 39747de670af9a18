use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors produced while configuring or running a deduplication pass.
#[derive(Debug)]
pub enum DedupeError {
    /// The requested `type` is not one of the recognized mode aliases
    UnknownMode(String),
    /// A separator was configured as the empty string
    EmptySeparator { name: &'static str },
    /// Input could not be read
    Read(io::Error),
    /// A configuration file could not be read or parsed
    Config { path: PathBuf, message: String },
}

impl DedupeError {
    /// Create a Config error from anything displayable
    pub fn config(path: impl Into<PathBuf>, message: impl fmt::Display) -> Self {
        DedupeError::Config {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for DedupeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DedupeError::UnknownMode(mode) => {
                write!(
                    f,
                    "unknown type '{}' (expected one of: item, i, key, k, key-value, kv)",
                    mode
                )
            }
            DedupeError::EmptySeparator { name } => {
                write!(f, "{} must not be empty", name)
            }
            DedupeError::Read(err) => write!(f, "failed to read input: {}", err),
            DedupeError::Config { path, message } => {
                write!(f, "invalid config {}: {}", path.display(), message)
            }
        }
    }
}

impl std::error::Error for DedupeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DedupeError::Read(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for DedupeError {
    fn from(err: io::Error) -> Self {
        DedupeError::Read(err)
    }
}
