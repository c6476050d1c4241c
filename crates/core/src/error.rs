//! Error types for the picker core.
//!
//! The color math and transform arithmetic are total and never fail. These
//! errors only arise at the edges: parsing user input, sizing a raster, and
//! loading or writing session state.

use thiserror::Error;

/// Errors produced by picker operations.
#[derive(Debug, Error)]
pub enum PickerError {
    /// Width or height was zero (or overflowed) when sizing a raster.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A transform expression could not be parsed.
    #[error("invalid transform: {0}")]
    InvalidTransform(String),

    /// A component name was not one of `l`, `c`, `h`, `a`.
    #[error("unknown component: {0}")]
    UnknownComponent(String),

    /// No preset origin color has the requested name.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// Session JSON was malformed.
    #[error("invalid session: {0}")]
    InvalidSession(String),

    /// Writing output (e.g. a PNG snapshot) failed.
    #[error("I/O error: {0}")]
    Io(String),
}
