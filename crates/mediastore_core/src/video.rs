//! Video files.

use crate::media_type::{replace_extension, stem};
use crate::{Media, MediaInfo, MediaType, PhotoAttributes, PhotoFile, VideoAttributes};
use serde::{Deserialize, Serialize};

/// Size assumed for a frame pulled out of a video.
const FRAME_SIZE_BYTES: u64 = 100_000;
/// Frame dimensions used when the video has no parseable resolution.
const DEFAULT_FRAME_DIMENSIONS: (u32, u32) = (1920, 1080);

/// A video file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MediaInfo", into = "MediaInfo")]
pub struct VideoFile {
    info: MediaInfo,
}

impl VideoFile {
    /// Create a video file; the video keys overwrite any in `info`'s metadata.
    pub fn new(mut info: MediaInfo, attributes: VideoAttributes) -> Self {
        info.merge_metadata(attributes.to_metadata());
        tracing::debug!(name = %info.name(), size = info.size(), "Created video file");
        Self { info }
    }

    /// Frame dimensions from the `resolution` metadata (`WIDTHxHEIGHT`).
    pub fn frame_dimensions(&self) -> Option<(u32, u32)> {
        let resolution = self.info.metadata().get("resolution")?.as_str()?;
        let (width, height) = resolution.split_once('x')?;
        Some((width.trim().parse().ok()?, height.trim().parse().ok()?))
    }

    /// Take a still frame at `timestamp` seconds.
    ///
    /// The frame is named `{stem}_{timestamp}.jpg` with a fixed placeholder
    /// size of 100 000 bytes. Its dimensions come from the video's resolution.
    ///
    /// ```
    /// use mediastore_core::{Media, MediaInfo, VideoAttributes, VideoFile};
    ///
    /// let video = VideoFile::new(
    ///     MediaInfo::new("movie.mp4", 50_000_000),
    ///     VideoAttributes { resolution: Some("1280x720".into()), ..Default::default() },
    /// );
    /// let frame = video.extract_frame(120.5);
    /// assert_eq!(frame.name(), "movie_120.5.jpg");
    /// assert_eq!(frame.size(), 100_000);
    /// assert_eq!(frame.width(), Some(1280));
    /// ```
    #[tracing::instrument(skip(self), fields(name = %self.info.name()))]
    pub fn extract_frame(&self, timestamp: f64) -> PhotoFile {
        tracing::info!("Extracting frame");
        let (width, height) = self.frame_dimensions().unwrap_or(DEFAULT_FRAME_DIMENSIONS);
        let name = format!("{}_{}.jpg", stem(self.info.name()), timestamp);
        PhotoFile::new(
            MediaInfo::new(name, FRAME_SIZE_BYTES),
            PhotoAttributes {
                width: Some(width),
                height: Some(height),
                ..Default::default()
            },
        )
    }
}

impl From<MediaInfo> for VideoFile {
    fn from(info: MediaInfo) -> Self {
        Self {
            info: info.with_variant_keys(MediaType::Video),
        }
    }
}

impl From<VideoFile> for MediaInfo {
    fn from(file: VideoFile) -> Self {
        file.info
    }
}

impl Media for VideoFile {
    fn info(&self) -> &MediaInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut MediaInfo {
        &mut self.info
    }

    fn media_type(&self) -> MediaType {
        MediaType::Video
    }

    #[tracing::instrument(skip(self), fields(name = %self.info.name()))]
    fn convert(&self, target_format: &str) -> Self {
        tracing::info!("Converting video file");
        let name = replace_extension(self.info.name(), target_format);
        Self {
            info: self.info.renamed(name),
        }
    }
}

impl std::fmt::Display for VideoFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ({} bytes)", self.file_type(), self.name(), self.size())
    }
}
