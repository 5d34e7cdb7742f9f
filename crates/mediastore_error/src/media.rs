//! Media file error types.

/// Kinds of media file errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum MediaErrorKind {
    /// The path's extension does not map to any media variant
    #[display("Unsupported file type: {}", path)]
    UnsupportedFileType {
        /// Path that was rejected
        path: String,
    },
}

/// Media error with location tracking.
///
/// # Examples
///
/// ```
/// use mediastore_error::{MediaError, MediaErrorKind};
///
/// let err = MediaError::new(MediaErrorKind::UnsupportedFileType {
///     path: "docs/readme.txt".to_string(),
/// });
/// assert!(matches!(err.kind(), MediaErrorKind::UnsupportedFileType { .. }));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Media Error: {} at line {} in {}", kind, line, file)]
pub struct MediaError {
    /// The kind of error that occurred
    pub kind: MediaErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl MediaError {
    /// Create a new media error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: MediaErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MediaErrorKind {
        &self.kind
    }
}
