//! Audio files.

use crate::media_type::replace_extension;
use crate::{AudioAttributes, Media, MediaInfo, MediaType};
use serde::{Deserialize, Serialize};

/// An audio file.
///
/// ```
/// use mediastore_core::{AudioAttributes, AudioFile, Media, MediaInfo};
///
/// let audio = AudioFile::new(
///     MediaInfo::new("song.mp3", 5_000_000),
///     AudioAttributes { bitrate: Some(320), ..Default::default() },
/// );
/// assert_eq!(audio.metadata()["bitrate"], 320);
/// assert!(audio.metadata()["channels"].is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MediaInfo", into = "MediaInfo")]
pub struct AudioFile {
    info: MediaInfo,
}

impl AudioFile {
    /// Create an audio file; the audio keys overwrite any in `info`'s metadata.
    pub fn new(mut info: MediaInfo, attributes: AudioAttributes) -> Self {
        info.merge_metadata(attributes.to_metadata());
        tracing::debug!(name = %info.name(), size = info.size(), "Created audio file");
        Self { info }
    }

    /// Adjust the playback volume. Nothing is re-encoded.
    pub fn adjust_volume(&self, level: f64) {
        tracing::info!(name = %self.info.name(), level, "Adjusting volume");
    }
}

impl From<MediaInfo> for AudioFile {
    fn from(info: MediaInfo) -> Self {
        Self {
            info: info.with_variant_keys(MediaType::Audio),
        }
    }
}

impl From<AudioFile> for MediaInfo {
    fn from(file: AudioFile) -> Self {
        file.info
    }
}

impl Media for AudioFile {
    fn info(&self) -> &MediaInfo {
        &self.info
    }

    fn info_mut(&mut self) -> &mut MediaInfo {
        &mut self.info
    }

    fn media_type(&self) -> MediaType {
        MediaType::Audio
    }

    #[tracing::instrument(skip(self), fields(name = %self.info.name()))]
    fn convert(&self, target_format: &str) -> Self {
        tracing::info!("Converting audio file");
        let name = replace_extension(self.info.name(), target_format);
        Self {
            info: self.info.renamed(name),
        }
    }
}

impl std::fmt::Display for AudioFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ({} bytes)", self.file_type(), self.name(), self.size())
    }
}
