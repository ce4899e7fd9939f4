//! Error types for the automata-search crate

use thiserror::Error;

/// Main error type for the automata-search crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error(
        "search strategies disagree: minimax returned {minimax}, alpha-beta returned {alpha_beta}"
    )]
    ResultMismatch { minimax: i32, alpha_beta: i32 },

    #[error("failed to initialise logger: {message}")]
    Logger { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<flexi_logger::FlexiLoggerError> for Error {
    fn from(source: flexi_logger::FlexiLoggerError) -> Self {
        Error::Logger {
            message: source.to_string(),
        }
    }
}
