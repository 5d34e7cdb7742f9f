//! Media file types for mediastore.
//!
//! A media file is a value object: common fields (name, size, creation time,
//! owner) plus an open metadata map. Each variant guarantees its own metadata
//! keys are present, possibly as `null`.
//!
//! - [`AudioFile`]: `duration`, `bitrate`, `sample_rate`, `channels`
//! - [`VideoFile`]: `duration`, `resolution`, `frame_rate`, `codec`
//! - [`PhotoFile`]: `width`, `height`, `color_space`, `camera_model`
//!
//! Operations such as conversion or feature extraction only log what they
//! would do and build new values; no media data is decoded.
//!
//! # Example
//!
//! ```
//! use mediastore_core::{Media, MediaFileFactory, MediaOptions, MediaType};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = MediaFileFactory::create_from_path(
//!     "music/new_song.mp3",
//!     3_000_000,
//!     MediaOptions::default().with_owner("John"),
//! )?;
//! assert_eq!(file.media_type(), MediaType::Audio);
//! assert_eq!(file.to_string(), "Audio: new_song.mp3 (3000000 bytes)");
//!
//! let converted = file.convert("wav");
//! assert_eq!(converted.name(), "new_song.wav");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod audio;
mod factory;
mod file;
mod info;
mod media;
mod media_type;
mod metadata;
mod photo;
mod video;

pub use audio::AudioFile;
pub use factory::MediaFileFactory;
pub use file::MediaFile;
pub use info::{MediaInfo, MediaOptions};
pub use media::{Features, Media};
pub use media_type::{MediaType, file_name};
pub use metadata::{AudioAttributes, Metadata, PhotoAttributes, VideoAttributes};
pub use photo::PhotoFile;
pub use video::VideoFile;

pub use mediastore_error::{MediaError, MediaErrorKind};
