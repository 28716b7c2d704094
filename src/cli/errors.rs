//! CLI-specific error types
//!
//! Every CLI error terminates the command with exit code 2; invalid data is
//! not a CLI error (it is a report with exit code 1).

use std::fmt;
use std::io;

use crate::validation::ValidationError;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Instance file could not be read
    IoError,
    /// Instance file is not valid JSON
    InvalidInstance,
    /// The validation engine rejected the call (configuration defect)
    EngineError,
    /// Server boot failure
    ServeFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::IoError => "FIELD_CLI_IO_ERROR",
            Self::InvalidInstance => "FIELD_CLI_INVALID_INSTANCE",
            Self::EngineError => "FIELD_CLI_ENGINE_ERROR",
            Self::ServeFailed => "FIELD_CLI_SERVE_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Invalid instance file
    pub fn invalid_instance(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidInstance, msg)
    }

    /// Server boot failure
    pub fn serve_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ServeFailed, msg)
    }

    /// Returns the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        // The engine error's own code and invariant ride along in the message
        Self::new(CliErrorCode::EngineError, err.to_string())
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::io_error(err.to_string())
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
