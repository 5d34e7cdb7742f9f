//! Error types for the mediastore workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Kinds carry structured payloads (amounts, paths) rather than pre-formatted
//! messages, so callers can inspect them or format them through `Display`.
//!
//! # Examples
//!
//! ```
//! use mediastore_error::{MediaError, MediaErrorKind, MediastoreResult};
//!
//! fn open(path: &str) -> MediastoreResult<()> {
//!     Err(MediaError::new(MediaErrorKind::UnsupportedFileType {
//!         path: path.to_string(),
//!     }))?
//! }
//!
//! let err = open("notes.txt").unwrap_err();
//! assert!(err.to_string().contains("Unsupported file type: notes.txt"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod media;
mod vehicle;

pub use config::{ConfigError, ConfigErrorKind};
pub use error::{MediastoreError, MediastoreErrorKind, MediastoreResult};
pub use media::{MediaError, MediaErrorKind};
pub use vehicle::{VehicleError, VehicleErrorKind, VehicleResult};
