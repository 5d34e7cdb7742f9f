//! Tagged union over the media variants.

use crate::{AudioFile, Media, MediaInfo, MediaType, PhotoFile, VideoFile};
use serde::{Deserialize, Serialize};

/// Any media file.
///
/// Returned wherever the variant is only known at runtime, such as
/// [`MediaFileFactory`](crate::MediaFileFactory) or a storage backend's `load`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_more::From)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MediaFile {
    /// Audio file
    Audio(AudioFile),
    /// Video file
    Video(VideoFile),
    /// Photo file
    Photo(PhotoFile),
}

impl MediaFile {
    /// Borrow as an audio file, if it is one.
    pub fn as_audio(&self) -> Option<&AudioFile> {
        match self {
            MediaFile::Audio(audio) => Some(audio),
            _ => None,
        }
    }

    /// Borrow as a video file, if it is one.
    pub fn as_video(&self) -> Option<&VideoFile> {
        match self {
            MediaFile::Video(video) => Some(video),
            _ => None,
        }
    }

    /// Borrow as a photo file, if it is one.
    pub fn as_photo(&self) -> Option<&PhotoFile> {
        match self {
            MediaFile::Photo(photo) => Some(photo),
            _ => None,
        }
    }
}

impl Media for MediaFile {
    fn info(&self) -> &MediaInfo {
        match self {
            MediaFile::Audio(audio) => audio.info(),
            MediaFile::Video(video) => video.info(),
            MediaFile::Photo(photo) => photo.info(),
        }
    }

    fn info_mut(&mut self) -> &mut MediaInfo {
        match self {
            MediaFile::Audio(audio) => audio.info_mut(),
            MediaFile::Video(video) => video.info_mut(),
            MediaFile::Photo(photo) => photo.info_mut(),
        }
    }

    fn media_type(&self) -> MediaType {
        match self {
            MediaFile::Audio(_) => MediaType::Audio,
            MediaFile::Video(_) => MediaType::Video,
            MediaFile::Photo(_) => MediaType::Photo,
        }
    }

    fn convert(&self, target_format: &str) -> Self {
        match self {
            MediaFile::Audio(audio) => MediaFile::Audio(audio.convert(target_format)),
            MediaFile::Video(video) => MediaFile::Video(video.convert(target_format)),
            MediaFile::Photo(photo) => MediaFile::Photo(photo.convert(target_format)),
        }
    }
}

impl std::fmt::Display for MediaFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaFile::Audio(audio) => std::fmt::Display::fmt(audio, f),
            MediaFile::Video(video) => std::fmt::Display::fmt(video, f),
            MediaFile::Photo(photo) => std::fmt::Display::fmt(photo, f),
        }
    }
}
