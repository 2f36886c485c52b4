#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use avro_openapi_core::AppError;
use derive_more::{Display, From};

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// IO Error wrapper.
    #[display("IO Error: {}", _0)]
    Io(std::io::Error),

    /// Generation or schema error from the core library.
    #[display("{}", _0)]
    App(AppError),

    /// The logger could not be installed.
    #[display("Logger Error: {}", _0)]
    Logger(log::SetLoggerError),

    /// General failure message.
    #[display("Operation failed: {}", _0)]
    General(String),
}

/// `General` carries a bare `String`, so `source()` is left at its default.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_passes_through_unchanged() {
        let err: CliError = AppError::NameCollision("Response".into()).into();
        assert_eq!(
            err.to_string(),
            "Schema record name clashes with the generated response record name Response"
        );
    }

    #[test]
    fn test_general_message() {
        let err: CliError = String::from("no routes").into();
        assert_eq!(err.to_string(), "Operation failed: no routes");
    }

    #[test]
    fn test_is_std_error() {
        use std::error::Error;
        let err: CliError = String::from("no routes").into();
        assert!(err.source().is_none());
    }
}
