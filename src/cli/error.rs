//! CLI-level errors (wraps application errors)

use std::io::ErrorKind;

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Render(_) => crate::exitcode::SOFTWARE,
            CliError::Application(e) => match e {
                ApplicationError::Domain(DomainError::UnknownProfile(_)) => crate::exitcode::USAGE,
                ApplicationError::Domain(_) => crate::exitcode::DATAERR,
                ApplicationError::DatasetRead { source, .. }
                    if source.kind() == ErrorKind::NotFound =>
                {
                    crate::exitcode::NOINPUT
                }
                ApplicationError::DatasetRead { .. } => crate::exitcode::IOERR,
                ApplicationError::DatasetParse { .. } | ApplicationError::DatasetEmpty(_) => {
                    crate::exitcode::DATAERR
                }
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
            },
        }
    }
}
