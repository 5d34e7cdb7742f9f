//! Top-level error wrapper types.

use crate::{ConfigError, MediaError, VehicleError};

/// Every error the mediastore crates can produce.
///
/// # Examples
///
/// ```
/// use mediastore_error::{ConfigError, ConfigErrorKind, MediastoreError};
///
/// let err: MediastoreError =
///     ConfigError::new(ConfigErrorKind::Parse("missing default_backend".into())).into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MediastoreErrorKind {
    /// Media file error
    #[from(MediaError)]
    Media(MediaError),
    /// Vehicle simulation error
    #[from(VehicleError)]
    Vehicle(VehicleError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Mediastore error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Mediastore Error: {}", _0)]
pub struct MediastoreError(Box<MediastoreErrorKind>);

impl MediastoreError {
    /// Create a new error from a kind.
    pub fn new(kind: MediastoreErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MediastoreErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to MediastoreErrorKind
impl<T> From<T> for MediastoreError
where
    T: Into<MediastoreErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for mediastore operations.
///
/// # Examples
///
/// ```
/// use mediastore_error::{ConfigError, ConfigErrorKind, MediastoreResult};
///
/// fn backend(name: &str) -> MediastoreResult<()> {
///     Err(ConfigError::new(ConfigErrorKind::UnknownBackend {
///         name: name.to_string(),
///         available: Vec::new(),
///     }))?
/// }
///
/// assert!(backend("tape").is_err());
/// ```
pub type MediastoreResult<T> = std::result::Result<T, MediastoreError>;
