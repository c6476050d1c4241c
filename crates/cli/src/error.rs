//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: picker error (unrenderable dimensions)
//! - 11: I/O error (session file read, PNG write)
//! - 12: input error (bad color, transform, component, preset, session, params)
//! - 13: serialization error

use oklch_picker_core::PickerError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A picker-level error that is not the user's input.
    Picker(PickerError),
    /// An I/O error (file read or write).
    Io(String),
    /// A user input error.
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Picker(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Picker(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<PickerError> for CliError {
    fn from(e: PickerError) -> Self {
        match e {
            PickerError::Io(msg) => CliError::Io(msg),
            PickerError::InvalidColor(_)
            | PickerError::InvalidTransform(_)
            | PickerError::UnknownComponent(_)
            | PickerError::UnknownPreset(_)
            | PickerError::InvalidSession(_) => CliError::Input(e.to_string()),
            other => CliError::Picker(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
