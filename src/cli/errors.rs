//! CLI-specific error types
//!
//! Every failure that reaches the CLI ends the command with a JSON error
//! object and a non-zero exit status.

use std::fmt;
use std::io;

use crate::query::QueryError;
use crate::review::ParseError;
use crate::service::ServiceError;
use crate::store::StoreError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdout, input files)
    IoError,
    /// Flag value could not be parsed
    InvalidArgument,
    /// Already initialized
    AlreadyInitialized,
    /// Not initialized
    NotInitialized,
    /// Review id unknown
    NotFound,
    /// Response refused
    ResponseRejected,
    /// Stored data failed verification
    StoreCorrupted,
    /// Any other storage failure
    StoreFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "REVIEWHUB_CLI_CONFIG_ERROR",
            Self::IoError => "REVIEWHUB_CLI_IO_ERROR",
            Self::InvalidArgument => "REVIEWHUB_CLI_INVALID_ARGUMENT",
            Self::AlreadyInitialized => "REVIEWHUB_CLI_ALREADY_INITIALIZED",
            Self::NotInitialized => "REVIEWHUB_CLI_NOT_INITIALIZED",
            Self::NotFound => "REVIEWHUB_CLI_NOT_FOUND",
            Self::ResponseRejected => "REVIEWHUB_CLI_RESPONSE_REJECTED",
            Self::StoreCorrupted => "REVIEWHUB_CLI_STORE_CORRUPTED",
            Self::StoreFailed => "REVIEWHUB_CLI_STORE_FAILED",
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

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidArgument, msg)
    }

    /// Already initialized
    pub fn already_initialized() -> Self {
        Self::new(
            CliErrorCode::AlreadyInitialized,
            "Data directory already initialized",
        )
    }

    /// Not initialized
    pub fn not_initialized() -> Self {
        Self::new(
            CliErrorCode::NotInitialized,
            "Data directory not initialized. Run 'reviewhub init' first.",
        )
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<ParseError> for CliError {
    fn from(e: ParseError) -> Self {
        Self::invalid_argument(format!("{} ({})", e, e.code()))
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        let code = match &e {
            StoreError::AlreadyInitialized(_) => CliErrorCode::AlreadyInitialized,
            e if e.is_corruption() => CliErrorCode::StoreCorrupted,
            _ => CliErrorCode::StoreFailed,
        };
        Self::new(code, format!("{} ({})", e, e.code()))
    }
}

impl From<ServiceError> for CliError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Store(e) => e.into(),
            ServiceError::Query(e) => {
                let code = if matches!(e, QueryError::NotFound(_)) {
                    CliErrorCode::NotFound
                } else {
                    CliErrorCode::ResponseRejected
                };
                Self::new(code, format!("{} ({})", e, e.code()))
            }
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
