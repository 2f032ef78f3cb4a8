//! Centralized error handling
//! Defines the error categories and codes surfaced to host widgets

use std::fmt;

/// Category of the error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// Cursor or character index outside `[0, len]`
    Range,
    /// Pixel offsets or width tables the snapping query cannot use
    Geometry,
    /// Configuration value rejected by a setter
    Settings,
    /// Configuration text that could not be parsed
    Parse,
    /// Internal logic or invariant violations
    Internal,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range => write!(f, "Range"),
            Self::Geometry => write!(f, "Geometry"),
            Self::Settings => write!(f, "Settings"),
            Self::Parse => write!(f, "Parse"),
            Self::Internal => write!(f, "Internal"),
        }
    }
}

/// A structured error reported to the caller
///
/// Only contract violations end up here. Running off either end of the
/// buffer while scanning a token is not an error; the scan stops at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionError {
    /// What kind of error occurred
    pub kind: ErrorType,
    /// Machine-readable error code (e.g., "INDEX_OUT_OF_RANGE")
    pub code: String,
    /// Human-readable description
    pub message: String,
}

impl SelectionError {
    pub fn new(kind: ErrorType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// A cursor index that does not lie in `[0, len]`
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::new(
            ErrorType::Range,
            "INDEX_OUT_OF_RANGE",
            format!("cursor index {index} is outside 0..={len}"),
        )
    }

    /// A click offset left of the text origin
    pub fn negative_offset(x: i32) -> Self {
        Self::new(
            ErrorType::Geometry,
            "NEGATIVE_OFFSET",
            format!("target offset {x} is negative"),
        )
    }

    /// Check if the message contains a substring (useful for tests)
    pub fn contains_msg(&self, sub: &str) -> bool {
        self.message.contains(sub)
    }
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}): {}", self.kind, self.code, self.message)
    }
}

impl std::error::Error for SelectionError {}

/// Result alias for selection operations
pub type Result<T> = std::result::Result<T, SelectionError>;
