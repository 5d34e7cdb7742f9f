//! Closed set of storage backends.

use crate::{CloudStorage, LocalStorage, MediaStorage, RemoteStorage, S3Storage};
use mediastore_core::MediaFile;
use mediastore_error::MediastoreResult;

/// One of the supported backends, chosen at runtime (usually from config).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From)]
pub enum StorageBackend {
    /// Local disk
    Local(LocalStorage),
    /// Cloud drive
    Cloud(CloudStorage),
    /// Remote server
    Remote(RemoteStorage),
    /// S3-style bucket
    S3(S3Storage),
}

impl StorageBackend {
    fn inner(&self) -> &dyn MediaStorage {
        match self {
            StorageBackend::Local(storage) => storage,
            StorageBackend::Cloud(storage) => storage,
            StorageBackend::Remote(storage) => storage,
            StorageBackend::S3(storage) => storage,
        }
    }
}

impl MediaStorage for StorageBackend {
    fn backend_name(&self) -> &'static str {
        self.inner().backend_name()
    }

    fn location(&self) -> String {
        self.inner().location()
    }

    fn list_files(&self, directory: &str) -> Vec<String> {
        self.inner().list_files(directory)
    }

    fn save(&self, file: &MediaFile, path: &str) -> bool {
        self.inner().save(file, path)
    }

    fn load(&self, path: &str, size: u64) -> MediastoreResult<MediaFile> {
        self.inner().load(path, size)
    }

    fn delete(&self, path: &str) -> bool {
        self.inner().delete(path)
    }
}
