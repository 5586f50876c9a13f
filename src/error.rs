//! Error types for the tracker

use thiserror::Error;

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between reading a command and printing its result
#[derive(Error, Debug)]
pub enum Error {
    /// A single-row lookup matched nothing
    #[error("Not found: {0}")]
    NotFound(String),

    /// First token is not a known verb
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Known verb, wrong number of arguments
    #[error("Usage: {usage}")]
    Usage { verb: &'static str, usage: &'static str },

    /// Argument that must be a whole number
    #[error("Invalid number for {field}: {value}")]
    InvalidNumber { field: &'static str, value: String },

    /// Errors reported by SQLite
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Line editor errors
    #[error("Console error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
