use std::fmt;

use star_system::{BodyIndex, SystemError};

/// Why a system could not be generated.
///
/// Generation is a pure function of its seed, so every one of these is
/// reproducible: retrying the same path fails the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    Structure(SystemError),
    NameExhausted { body: BodyIndex, attempts: u32 },
    MissingPrimary { body: BodyIndex },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::Structure(err) => write!(f, "malformed system tree: {}", err),
            GenerationError::NameExhausted { body, attempts } => write!(
                f,
                "no unique name for body {} after {} attempts",
                body, attempts
            ),
            GenerationError::MissingPrimary { body } => {
                write!(f, "body {} has no star to orbit", body)
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerationError::Structure(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SystemError> for GenerationError {
    fn from(err: SystemError) -> Self {
        GenerationError::Structure(err)
    }
}

/// Failure to read or parse a generator configuration file.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: String, source: std::io::Error },
    Parse { reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read config {}: {}", path, source)
            }
            ConfigError::Parse { reason } => write!(f, "invalid config: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { .. } => None,
        }
    }
}
