use std::path::PathBuf;

/// Globtrot error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Pattern was empty.
    #[error("empty pattern")]
    EmptyPattern,

    /// Pattern ends with a separator but only files were requested.
    #[error("pattern `{0}` ends with a separator but only files were requested")]
    TrailingSeparator(String),

    /// Pattern ends with `**` but only files were requested.
    #[error("pattern `{0}` ends with `**` but only files were requested")]
    TrailingRecursive(String),

    /// A `**` token that does not span a whole path component.
    #[error("`**` must span a whole path component in `{0}`")]
    UnboundedRecursive(String),

    /// A bracket expression with no closing `]`.
    #[error("unterminated bracket expression in `{0}`")]
    UnterminatedBracket(String),

    /// A bracket expression that matches nothing.
    #[error("bracket expression matches nothing in `{0}`")]
    EmptyBracket(String),

    /// An unrecognized POSIX class name inside a bracket expression.
    #[error("unknown character class `[:{class}:]` in `{segment}`")]
    UnknownClass { segment: String, class: String },

    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::Internal(format!("segment regex: {err}"))
    }
}

/// Result type using globtrot Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes per CLI contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// At least one path matched
    Success = 0,
    /// Clean run, nothing matched
    NoMatches = 1,
    /// Pattern, configuration, or argument error
    UsageError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::EmptyPattern
            | Error::TrailingSeparator(_)
            | Error::TrailingRecursive(_)
            | Error::UnboundedRecursive(_)
            | Error::UnterminatedBracket(_)
            | Error::EmptyBracket(_)
            | Error::UnknownClass { .. }
            | Error::Config { .. }
            | Error::Argument(_) => ExitCode::UsageError,
            Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
