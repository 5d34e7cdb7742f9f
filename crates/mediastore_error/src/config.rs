//! Configuration error types.

/// Kinds of configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// Configuration sources could not be read or merged
    #[display("Failed to build configuration: {}", _0)]
    Load(String),
    /// Configuration was read but does not match the expected schema
    #[display("Failed to parse configuration: {}", _0)]
    Parse(String),
    /// A backend name was requested that is not configured
    #[display("Unknown storage backend '{}' (configured: {})", name, available.join(", "))]
    UnknownBackend {
        /// Requested backend name
        name: String,
        /// Backend names that are configured
        available: Vec<String>,
    },
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use mediastore_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::UnknownBackend {
///     name: "archive".to_string(),
///     available: vec!["local".to_string()],
/// });
/// assert!(err.to_string().contains("Unknown storage backend 'archive' (configured: local)"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    kind: ConfigErrorKind,
    line: u32,
    file: &'static str,
}

impl ConfigError {
    /// Create a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }
}
