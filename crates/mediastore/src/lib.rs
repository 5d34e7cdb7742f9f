//! Media file modeling, pluggable storage backends and a fuel/cargo
//! simulation.
//!
//! This crate re-exports the workspace crates:
//!
//! - [`mediastore_core`]: media files, metadata, the path-based factory
//! - [`mediastore_storage`]: storage backends and their configuration
//! - [`mediastore_vehicle`]: vehicles and planes
//! - [`mediastore_error`]: error types
//!
//! [`demo`] walks through all of them and backs the `mediastore demo` command.
//! [`report`] backs the remaining commands.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod demo;
pub mod report;

pub use mediastore_core::{
    AudioAttributes, AudioFile, Features, Media, MediaFile, MediaFileFactory, MediaInfo,
    MediaOptions, MediaType, Metadata, PhotoAttributes, PhotoFile, VideoAttributes, VideoFile,
    file_name,
};
pub use mediastore_error::{
    ConfigError, ConfigErrorKind, MediaError, MediaErrorKind, MediastoreError, MediastoreErrorKind,
    MediastoreResult, VehicleError, VehicleErrorKind, VehicleResult,
};
pub use mediastore_storage::{
    BackendConfig, CloudStorage, LocalStorage, MediaStorage, RemoteStorage, S3Storage,
    StorageBackend, StorageConfig,
};
pub use mediastore_vehicle::{Plane, Vehicle};
