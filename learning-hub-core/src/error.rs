//! Unified error type definition

use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// Lesson file not found at the expected path
    #[error("Lesson not found: {0}")]
    LessonNotFound(String),

    /// Lesson file exists but could not be read
    #[error("Lesson unreadable: {path}: {reason}")]
    LessonUnreadable { path: String, reason: String },

    /// Source-level failure (transport, permissions, ...)
    #[error("Source error: {0}")]
    SourceError(String),
}

/// Core layer result type
pub type CoreResult<T> = Result<T, CoreError>;
