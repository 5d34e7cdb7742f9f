//! Storage trait definition.

use mediastore_core::{Media, MediaFile, MediaFileFactory, MediaOptions};
use mediastore_error::MediastoreResult;

/// File names every backend reports for a directory, before its prefix.
const EXAMPLE_LISTING: [&str; 3] = ["example1.mp3", "example2.mp4", "example3.jpg"];

/// Trait for pluggable media storage backends.
///
/// `save`, `load` and `delete` behave the same for every backend and only
/// differ in the location they log; backends provide their name, location
/// and directory listing.
pub trait MediaStorage: Send + Sync {
    /// Short backend identifier (`local`, `cloud`, `remote`, `s3`).
    fn backend_name(&self) -> &'static str;

    /// Human-readable description of where files go.
    fn location(&self) -> String;

    /// List the files in `directory`.
    ///
    /// # Arguments
    ///
    /// * `directory` - Directory to list
    ///
    /// # Returns
    ///
    /// A fixed set of example file names for this backend
    fn list_files(&self, directory: &str) -> Vec<String>;

    /// Store a media file at `path`.
    ///
    /// # Returns
    ///
    /// `true` once the file is stored
    fn save(&self, file: &MediaFile, path: &str) -> bool {
        tracing::info!(
            backend = self.backend_name(),
            location = %self.location(),
            name = %file.name(),
            path,
            "Saving media file"
        );
        true
    }

    /// Load the media file at `path`.
    ///
    /// The variant is chosen from the path's extension and the file is named
    /// after the last path segment.
    ///
    /// # Arguments
    ///
    /// * `path` - Location of the file in this backend
    /// * `size` - Size of the file in bytes
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedFileType` if the extension is not a supported
    /// audio, video or photo extension.
    fn load(&self, path: &str, size: u64) -> MediastoreResult<MediaFile> {
        tracing::info!(
            backend = self.backend_name(),
            location = %self.location(),
            path,
            "Loading media file"
        );
        MediaFileFactory::create_from_path(path, size, MediaOptions::default())
    }

    /// Delete the media file at `path`.
    ///
    /// # Returns
    ///
    /// `true` once the file is gone
    fn delete(&self, path: &str) -> bool {
        tracing::info!(
            backend = self.backend_name(),
            location = %self.location(),
            path,
            "Deleting media file"
        );
        true
    }
}

/// Example listing with each name prefixed by `prefix`.
pub(crate) fn example_listing(prefix: &str) -> Vec<String> {
    EXAMPLE_LISTING
        .iter()
        .map(|name| format!("{}{}", prefix, name))
        .collect()
}
