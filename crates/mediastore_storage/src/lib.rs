//! Pluggable media storage backends for mediastore.
//!
//! Every backend implements [`MediaStorage`]: save, load, delete and list.
//! The four backends differ only in the connection details they hold:
//!
//! - [`LocalStorage`]: local disk, no settings
//! - [`CloudStorage`]: a cloud drive provider plus credentials
//! - [`RemoteStorage`]: a remote server reached by host/port/user/password
//! - [`S3Storage`]: an S3-style bucket with region and access keys
//!
//! None of them touch a disk or a network. Operations log what they would
//! do; `load` builds the media file from the path's extension.
//!
//! # Example
//!
//! ```rust
//! use mediastore_storage::{LocalStorage, MediaStorage};
//! use mediastore_core::{Media, MediaType};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = LocalStorage::new();
//! let file = storage.load("/music/another_song.mp3", 1_000_000)?;
//! assert_eq!(file.media_type(), MediaType::Audio);
//! assert!(storage.save(&file, "/music/song.mp3"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod cloud;
mod local;
mod remote;
mod s3;
mod settings;
mod storage;

pub use backend::StorageBackend;
pub use cloud::CloudStorage;
pub use local::LocalStorage;
pub use remote::RemoteStorage;
pub use s3::S3Storage;
pub use settings::{BackendConfig, StorageConfig};
pub use storage::MediaStorage;
