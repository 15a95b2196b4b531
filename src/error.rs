//! Error handling for the csv2yaml application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for csv2yaml operations.
///
/// Every variant is fatal: the run stops at the first error and files
/// written before it stay on disk.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The table or template path does not exist or is not a regular file
    #[error("Missing input: {0}.")]
    MissingInput(String),

    /// The output path exists but is not a directory
    #[error("Invalid output: {0}.")]
    InvalidOutput(String),

    /// The table is empty, has no headers or has a malformed row
    #[error("Invalid input: {0}.")]
    InvalidInput(String),

    /// A computed output file path is taken by a directory
    #[error("Conflict: {0}.")]
    Conflict(String),
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
