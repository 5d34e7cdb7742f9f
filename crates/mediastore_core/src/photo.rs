//! Photo files.

use crate::media_type::{extension, replace_extension, stem};
use crate::{Media, MediaInfo, MediaType, PhotoAttributes};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// A photo file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MediaInfo", into = "MediaInfo")]
pub struct PhotoFile {
    info: MediaInfo,
}

impl PhotoFile {
    /// Create a photo file; the photo keys overwrite any in `info`'s metadata.
    pub fn new(mut info: MediaInfo, attributes: PhotoAttributes) -> Self {
        info.merge_metadata(attributes.to_metadata());
        tracing::debug!(name = %info.name(), size = info.size(), "Created photo file");
        Self { info }
    }

    /// Width in pixels, if recorded.
    pub fn width(&self) -> Option<u32> {
        self.dimension("width")
    }

    /// Height in pixels, if recorded.
    pub fn height(&self) -> Option<u32> {
        self.dimension("height")
    }

    fn dimension(&self, key: &str) -> Option<u32> {
        self.info
            .metadata()
            .get(key)?
            .as_u64()
            .and_then(|value| u32::try_from(value).ok())
    }

    /// Produce a resized copy named `{stem}_resized.{ext}`.
    ///
    /// Metadata is copied with `width` and `height` replaced.
    ///
    /// ```
    /// use mediastore_core::{MediaInfo, PhotoAttributes, PhotoFile, Media};
    ///
    /// let photo = PhotoFile::new(MediaInfo::new("image.jpg", 2_000_000), PhotoAttributes::default());
    /// let resized = photo.resize(800, 600);
    /// assert_eq!(resized.name(), "image_resized.jpg");
    /// assert_eq!((resized.width(), resized.height()), (Some(800), Some(600)));
    /// ```
    #[tracing::instrument(skip(self), fields(name = %self.info.name()))]
    pub fn resize(&self, width: u32, height: u32) -> PhotoFile {
        tracing::info!("Resizing photo");
        let current = self.info.name();
        let name = match extension(current) {
            Some(ext) => format!("{}_resized.{}", stem(current), ext),
            None => format!("{}_resized", current),
        };
        let mut info = self.info.renamed(name);
        let mut dimensions = crate::Metadata::new();
        dimensions.insert("width".to_string(), json!(width));
        dimensions.insert("height".to_string(), json!(height));
        info.merge_metadata(dimensions);
        Self { info }
    }
}

impl From<MediaInfo> for PhotoFile {
    fn from(info: MediaInfo) -> Self {
        Self {
            info: info.with_variant_keys(MediaType::Photo),
        }
    }
}

impl From<PhotoFile> for MediaInfo {
    fn from(file: PhotoFile) -> Self {
        file.info
    }
}

impl Media for PhotoFile {
    fn info(&self) -> &MediaInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut MediaInfo {
        &mut self.info
    }

    fn media_type(&self) -> MediaType {
        MediaType::Photo
    }

    #[tracing::instrument(skip(self), fields(name = %self.info.name()))]
    fn convert(&self, target_format: &str) -> Self {
        tracing::info!("Converting photo file");
        let name = replace_extension(self.info.name(), target_format);
        Self {
            info: self.info.renamed(name),
        }
    }
}

impl std::fmt::Display for PhotoFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ({} bytes)", self.file_type(), self.name(), self.size())
    }
}
