//! Media type enumeration and extension dispatch.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "flac"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov"];
const PHOTO_EXTENSIONS: &[&str] = &["jpg", "png", "gif"];

/// Type of media content.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Audio content (MP3, WAV, FLAC)
    #[display("Audio")]
    Audio,
    /// Video content (MP4, AVI, MOV)
    #[display("Video")]
    Video,
    /// Still images (JPG, PNG, GIF)
    #[display("Photo")]
    Photo,
}

impl MediaType {
    /// Human-readable file type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Audio => "Audio",
            MediaType::Video => "Video",
            MediaType::Photo => "Photo",
        }
    }

    /// Extensions (without the dot) that map to this type.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            MediaType::Audio => AUDIO_EXTENSIONS,
            MediaType::Video => VIDEO_EXTENSIONS,
            MediaType::Photo => PHOTO_EXTENSIONS,
        }
    }

    /// Metadata keys every file of this type carries.
    pub fn metadata_keys(&self) -> &'static [&'static str] {
        match self {
            MediaType::Audio => &["duration", "bitrate", "sample_rate", "channels"],
            MediaType::Video => &["duration", "resolution", "frame_rate", "codec"],
            MediaType::Photo => &["width", "height", "color_space", "camera_model"],
        }
    }

    /// Look up the media type for an extension.
    ///
    /// Matching is case-sensitive: `mp3` is audio, `MP3` is not supported.
    ///
    /// ```
    /// use mediastore_core::MediaType;
    ///
    /// assert_eq!(MediaType::from_extension("flac"), Some(MediaType::Audio));
    /// assert_eq!(MediaType::from_extension("txt"), None);
    /// ```
    pub fn from_extension(extension: &str) -> Option<Self> {
        MediaType::iter().find(|media_type| media_type.extensions().contains(&extension))
    }

    /// Look up the media type for a `/`-separated path by its final extension.
    ///
    /// ```
    /// use mediastore_core::MediaType;
    ///
    /// assert_eq!(MediaType::from_path("/videos/movie.mov"), Some(MediaType::Video));
    /// assert_eq!(MediaType::from_path("photos/README"), None);
    /// ```
    pub fn from_path(path: &str) -> Option<Self> {
        file_name(path)
            .rsplit_once('.')
            .and_then(|(_, extension)| Self::from_extension(extension))
    }
}

impl std::str::FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "audio" | "Audio" => Ok(MediaType::Audio),
            "video" | "Video" => Ok(MediaType::Video),
            "photo" | "Photo" => Ok(MediaType::Photo),
            _ => Err(format!("Unknown media type: {}", s)),
        }
    }
}

/// Last `/`-separated segment of a path.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Name with its final extension removed.
pub(crate) fn stem(name: &str) -> &str {
    name.rsplit_once('.').map_or(name, |(stem, _)| stem)
}

/// Final extension of a name, if any.
pub(crate) fn extension(name: &str) -> Option<&str> {
    name.rsplit_once('.').map(|(_, extension)| extension)
}

/// Replace the final extension of a name, appending one if there is none.
pub(crate) fn replace_extension(name: &str, target_format: &str) -> String {
    format!("{}.{}", stem(name), target_format.trim_start_matches('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_extension_keeps_inner_dots() {
        assert_eq!(replace_extension("live.2024.mp3", "wav"), "live.2024.wav");
        assert_eq!(replace_extension("song", ".flac"), "song.flac");
    }

    #[test]
    fn file_name_takes_last_segment() {
        assert_eq!(file_name("/music/song.mp3"), "song.mp3");
        assert_eq!(file_name("song.mp3"), "song.mp3");
    }
}
