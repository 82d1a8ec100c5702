//! Error types for the inspection report library.
//!
//! Validation failures are expected user-facing conditions; render failures
//! indicate a record that breaks the layout contract or text the report fonts
//! cannot encode.

use std::fmt;

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Mandatory form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    /// Owner Name
    OwnerName,
    /// Car Model
    CarModel,
}

impl RequiredField {
    /// Form label of the field.
    pub fn label(&self) -> &'static str {
        match self {
            RequiredField::OwnerName => "Owner Name",
            RequiredField::CarModel => "Car Model",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors raised while collecting form state into a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A mandatory field is empty after trimming whitespace
    #[error("Missing required field: {0}")]
    MissingRequiredField(RequiredField),

    /// Year outside the accepted range
    #[error("Year {year} is outside the accepted range {min}..={max}")]
    YearOutOfRange {
        /// Submitted year
        year: i32,
        /// Smallest accepted year
        min: i32,
        /// Largest accepted year
        max: i32,
    },
}

/// Errors raised while turning a record into a document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// Record shape does not match the report layout
    #[error("Malformed record entry '{entry}': {reason}")]
    MalformedRecord {
        /// Top-level entry name
        entry: String,
        /// What is wrong with it
        reason: String,
    },

    /// Character has no WinAnsi code
    #[error("Character {ch:?} cannot be encoded in line '{line}'")]
    UnsupportedCharacter {
        /// Offending character
        ch: char,
        /// Report line containing it
        line: String,
    },
}

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Form validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Report rendering failed
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration or form state document
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// Layout settings that cannot place a line inside the margins
    #[error("Invalid report configuration: {0}")]
    InvalidConfig(String),
}
