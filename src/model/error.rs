//! Error types for corpus-browser.
//!
//! Errors use `thiserror` and compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all domain-specific failures
//!   - [`InputError`] - Rank/corpus artifact resolution and reading failures
//!   - [`ConfigError`](crate::config::ConfigError) - Config file failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Log file setup failures
//!   - [`TuiError`](crate::view::TuiError) - Terminal failures
//!
//! # Error Recovery Strategy
//!
//! Malformed rank-file lines are not errors at all: they are dropped while
//! loading. Every variant here is fatal and is reported before (or after) the
//! interactive loop, never inside it.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to locate or read one of the input artifacts.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// Configuration could not be loaded or holds an invalid value.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// The log file could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or rendering error.
    ///
    /// Without a working terminal the browser cannot function, so these are
    /// always fatal.
    #[error("Terminal error: {0}")]
    Terminal(#[from] crate::view::TuiError),
}

/// Errors encountered when locating or reading the rank and corpus files.
#[derive(Debug, Error)]
pub enum InputError {
    /// The artifact does not exist at the given path.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use corpus_browser::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/messages.txt")
    /// };
    /// assert!(err.to_string().contains("/tmp/messages.txt"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// The artifact exists but could not be read (permissions, invalid UTF-8, ...).
    #[error("Failed to read {path}: {source}")]
    Read {
        /// The path being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Neither an init directory nor explicit rank/corpus paths were given.
    #[error("No input provided: pass an init directory or both --rank and --corpus")]
    NoInput,

    /// Only one of the two artifacts could be resolved.
    #[error("Missing {artifact} path: pass it explicitly or provide an init directory")]
    MissingArtifact {
        /// Which artifact is missing ("rank" or "corpus").
        artifact: &'static str,
    },
}
