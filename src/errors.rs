/*!
 * Error types for the storylens application.
 *
 * The parsing/display core is infallible by design (malformed text degrades
 * to empty output), so these types cover the edges that can actually fail:
 * the story store and line navigation. Defined with the thiserror crate for
 * ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading story data from disk
#[derive(Error, Debug)]
pub enum StoreError {
    /// A required story file is missing
    #[error("Story file not found: {0}")]
    FileNotFound(PathBuf),

    /// A story file could not be read
    #[error("Failed to read story file {path}: {reason}")]
    ReadFailed {
        /// File that failed to read
        path: PathBuf,
        /// Underlying I/O failure
        reason: String,
    },

    /// A story file did not parse as the expected JSON shape
    #[error("Malformed story file {path}: {reason}")]
    Malformed {
        /// File that failed to parse
        path: PathBuf,
        /// Parse failure detail
        reason: String,
    },

    /// The requested story is not present in the index
    #[error("Unknown story: {0}")]
    UnknownStory(String),

    /// The aligned file parsed but held no lines
    #[error("Story '{0}' has no aligned lines")]
    EmptyStory(String),
}

/// Errors that can occur while navigating within a story
#[derive(Error, Debug)]
pub enum NavigationError {
    /// Requested 1-based line index fell outside the story
    #[error("Line {requested} out of range (1..={total})")]
    OutOfRange {
        /// Line asked for
        requested: usize,
        /// Number of lines in the story
        total: usize,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the story store
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Error from navigation
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
