// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the error types that can occur when working with the
//! backing INI store. All errors use `thiserror` for proper error handling
//! and conversion.
//!
//! Note that the caller-facing accessor surface never returns these errors
//! directly: reads substitute the caller-supplied default and writes collapse
//! to a success flag. The typed errors exist for the store boundary and for
//! the log events emitted when a failure is swallowed.

use crate::domain::kind::Kind;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for store operations.
///
/// This enum represents all possible errors that can occur when reading or
/// writing the backing INI file. It is marked as `#[non_exhaustive]` to allow
/// for future additions without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use inicfg::domain::errors::ConfigError;
/// use std::path::PathBuf;
///
/// let error = ConfigError::Parse {
///     path: PathBuf::from("settings.ini"),
///     message: "unexpected token".to_string(),
/// };
/// assert!(error.to_string().contains("settings.ini"));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The backing file exists but could not be parsed as an INI document.
    #[error("failed to parse INI file '{}': {message}", path.display())]
    Parse {
        /// Path of the file that failed to parse.
        path: PathBuf,
        /// The parser's description of the failure.
        message: String,
    },

    /// A value cannot be represented in the store's width for its kind.
    #[error("value '{value}' cannot be stored as an INI {kind}")]
    Unrepresentable {
        /// The value as it would have been written.
        value: String,
        /// The kind whose storage width was exceeded.
        kind: Kind,
    },

    /// No OS-appropriate configuration directory could be determined.
    #[error("could not determine a configuration directory: {message}")]
    NoConfigDir {
        /// Description of why resolution failed.
        message: String,
    },

    /// An I/O error occurred while reading or writing the backing file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for store operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
