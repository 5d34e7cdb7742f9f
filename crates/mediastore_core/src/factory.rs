//! Build media files from paths.

use crate::{
    AudioAttributes, AudioFile, Media, MediaFile, MediaOptions, MediaType, PhotoAttributes,
    PhotoFile, VideoAttributes, VideoFile, file_name,
};
use mediastore_error::{MediaError, MediaErrorKind, MediastoreResult};

/// Chooses the media variant from a path's extension.
///
/// | extensions | variant |
/// |------------|---------|
/// | `mp3`, `wav`, `flac` | [`AudioFile`] |
/// | `mp4`, `avi`, `mov` | [`VideoFile`] |
/// | `jpg`, `png`, `gif` | [`PhotoFile`] |
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaFileFactory;

impl MediaFileFactory {
    /// Create a media file named after the last segment of `path`.
    ///
    /// Variant keys start out `null`; `options.metadata` is merged afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`MediaErrorKind::UnsupportedFileType`] when the extension is not
    /// in any of the supported groups.
    ///
    /// ```
    /// use mediastore_core::{MediaFileFactory, MediaOptions};
    ///
    /// let err = MediaFileFactory::create_from_path("notes/todo.txt", 10, MediaOptions::default());
    /// assert!(err.is_err());
    /// ```
    #[tracing::instrument(skip(options))]
    pub fn create_from_path(
        path: &str,
        size: u64,
        options: MediaOptions,
    ) -> MediastoreResult<MediaFile> {
        let Some(media_type) = MediaType::from_path(path) else {
            tracing::debug!("No media type for extension");
            return Err(MediaError::new(MediaErrorKind::UnsupportedFileType {
                path: path.to_string(),
            })
            .into());
        };

        let (info, extra) = options.into_parts(file_name(path), size);
        let mut file: MediaFile = match media_type {
            MediaType::Audio => AudioFile::new(info, AudioAttributes::default()).into(),
            MediaType::Video => VideoFile::new(info, VideoAttributes::default()).into(),
            MediaType::Photo => PhotoFile::new(info, PhotoAttributes::default()).into(),
        };
        if !extra.is_empty() {
            file.update_metadata(extra);
        }

        tracing::debug!(media_type = %media_type, "Created media file from path");
        Ok(file)
    }
}
