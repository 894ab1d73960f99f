//! Error types for Course Card

use thiserror::Error;

/// Errors raised while loading course data
#[derive(Error, Debug)]
pub enum CourseError {
    /// Catalog file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog text is not valid JSON or does not match the course shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog JSON parsed but has an unsupported top-level layout
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

/// Why a course's `lessons` field could not be read as a list.
///
/// Never escapes the card; see [`crate::lessons::lessons_or_empty`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LessonsError {
    /// Field absent or `null`
    #[error("lessons field is missing")]
    Missing,

    /// Field present but not a sequence of displayable entries
    #[error("invalid lessons JSON: {0}")]
    Malformed(String),
}

/// Result type alias for Course Card operations
pub type Result<T> = std::result::Result<T, CourseError>;
