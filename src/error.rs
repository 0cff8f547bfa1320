//! Error handling for apigen.
//! Defines the error type and result alias used throughout the generator.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error types for apigen operations.
///
/// Every variant is fatal to a run: errors are propagated up to `main` and
/// reported by [`default_error_handler`].
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read, create or write a file or directory.
    #[error("IO error on '{}': {source}.", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The API definition is not valid JSON or does not match the expected shape.
    #[error("Failed to decode '{}': {source}.", .path.display())]
    DecodeError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid generator configuration.
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Template could not be parsed, or referenced an unknown function, filter or field.
    #[error("Template error in '{template}': {source}")]
    TemplateError {
        template: String,
        #[source]
        source: minijinja::Error,
    },

    /// Template failed while executing.
    #[error("Execution error in '{template}': {source}")]
    ExecutionError {
        template: String,
        #[source]
        source: minijinja::Error,
    },

    /// Substring offsets outside of the string or not on a character boundary.
    #[error("Index error: {0}.")]
    IndexError(String),

    /// An endpoint could not be turned into an identifier.
    #[error("Naming error: {0}.")]
    NamingError(String),

    /// Generated source was rejected by the formatter.
    #[error("Format error in '{}' at line {line}, column {column}: {message}.", .output.display())]
    FormatError {
        output: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// A generation task failed; wraps the underlying error.
    #[error("Task {index} ('{}') failed: {source}", .output.display())]
    TaskError {
        index: usize,
        output: PathBuf,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wraps a file system error together with the path it occurred on.
    pub fn io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Error::IoError { path: path.into(), source }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
