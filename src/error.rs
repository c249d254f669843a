//! Centralized error handling for hypervisor-nics
//!
//! Every fallible operation in the crate returns [`Result`], whose error
//! side is [`NicsError`]. The per-concern enums convert into it with `?`.

use std::fmt;

/// Main error type for the application
#[derive(Debug)]
pub enum NicsError {
    /// Configuration-related errors
    Config(ConfigError),
    /// Failures while querying interface state from the OS
    Snapshot(SnapshotError),
    /// Rendering errors
    Output(OutputError),
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    FileNotFound(String),
    ParseError(String),
    InvalidValue { field: String, value: String, reason: String },
}

#[derive(Debug, PartialEq)]
pub enum SnapshotError {
    CommandFailed { command: String, reason: String },
    ParseFailed(String),
    VirtualListFailed { path: String, reason: String },
}

#[derive(Debug, PartialEq)]
pub enum OutputError {
    SerializationFailed(String),
}

impl fmt::Display for NicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NicsError::Config(e) => write!(f, "Configuration error: {}", e),
            NicsError::Snapshot(e) => write!(f, "Snapshot error: {}", e),
            NicsError::Output(e) => write!(f, "Output error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Configuration file not found: {}", path),
            ConfigError::ParseError(msg) => write!(f, "Failed to parse configuration: {}", msg),
            ConfigError::InvalidValue { field, value, reason } => {
                write!(f, "Invalid value '{}' for field '{}': {}", value, field, reason)
            }
        }
    }
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::CommandFailed { command, reason } => {
                write!(f, "Failed to run '{}': {}", command, reason)
            }
            SnapshotError::ParseFailed(msg) => {
                write!(f, "Failed to parse interface list: {}", msg)
            }
            SnapshotError::VirtualListFailed { path, reason } => {
                write!(f, "Failed to list virtual interfaces in {}: {}", path, reason)
            }
        }
    }
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::SerializationFailed(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for NicsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NicsError::Config(e) => Some(e),
            NicsError::Snapshot(e) => Some(e),
            NicsError::Output(e) => Some(e),
        }
    }
}

impl std::error::Error for ConfigError {}
impl std::error::Error for SnapshotError {}
impl std::error::Error for OutputError {}

impl From<ConfigError> for NicsError {
    fn from(error: ConfigError) -> Self {
        NicsError::Config(error)
    }
}

impl From<SnapshotError> for NicsError {
    fn from(error: SnapshotError) -> Self {
        NicsError::Snapshot(error)
    }
}

impl From<OutputError> for NicsError {
    fn from(error: OutputError) -> Self {
        NicsError::Output(error)
    }
}

/// Type alias for Results used throughout the application
pub type Result<T> = std::result::Result<T, NicsError>;

/// Helper trait for converting foreign errors to the matching error kind
pub trait MapError<T> {
    fn map_parse_error(self, context: &str) -> Result<T>;
    fn map_output_error(self) -> Result<T>;
}

impl<T, E: fmt::Display> MapError<T> for std::result::Result<T, E> {
    fn map_parse_error(self, context: &str) -> Result<T> {
        self.map_err(|e| SnapshotError::ParseFailed(format!("{}: {}", context, e)).into())
    }

    fn map_output_error(self) -> Result<T> {
        self.map_err(|e| OutputError::SerializationFailed(e.to_string()).into())
    }
}
