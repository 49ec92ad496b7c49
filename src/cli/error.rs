//! CLI-level errors (wraps library errors)

use thiserror::Error;

use crate::domain::TreeError;
use crate::errors::SettingsError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("{0}")]
    Settings(#[from] SettingsError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("output failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Tree(_) => crate::exitcode::DATAERR,
            CliError::Settings(_) => crate::exitcode::CONFIG,
            CliError::Io(_) => crate::exitcode::IOERR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exitcode;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::InvalidArgs("x".into()).exit_code(), exitcode::USAGE);
        assert_eq!(
            CliError::from(TreeError::SlotOccupied(0)).exit_code(),
            exitcode::DATAERR
        );
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert_eq!(CliError::from(io).exit_code(), exitcode::IOERR);
    }
}
