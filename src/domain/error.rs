//! Error types for the picklist crate.
//!
//! This module defines the centralized error type [`PicklistError`] and a type alias
//! [`Result`] for convenient error handling. Only the configuration and style
//! loading paths can fail; list operations treat bad input as a no-op and never
//! return errors.

use thiserror::Error;

/// The main error type for picklist operations.
///
/// Covers failures while loading style tables and configuration. The
/// selection engine itself never produces errors.
///
/// # Examples
///
/// ```
/// use picklist::PicklistError;
///
/// fn validate_config() -> Result<(), PicklistError> {
///     Err(PicklistError::Config("Missing required field".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum PicklistError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Style table parsing failed.
    ///
    /// Occurs when a style table is malformed, names an unknown built-in, or
    /// contains an invalid color. The string describes what went wrong.
    #[error("Style error: {0}")]
    Style(String),

    /// Configuration is invalid.
    ///
    /// Occurs when a configuration document cannot be parsed or holds a value
    /// outside its domain.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for picklist operations.
pub type Result<T> = std::result::Result<T, PicklistError>;
