//! CLI-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::TreeError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config { .. } => crate::exitcode::CONFIG,
            CliError::Tree(e) => match e {
                TreeError::NotFound(_) | TreeError::OutOfRange { .. } => crate::exitcode::DATAERR,
                TreeError::InvalidIteratorState | TreeError::Duplicate(_) => {
                    crate::exitcode::SOFTWARE
                }
            },
        }
    }
}
