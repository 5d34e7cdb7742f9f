//! Metadata map and the typed attributes each variant contributes to it.

use serde::{Deserialize, Serialize};
use serde_json::json;

/// Open mapping of descriptive fields attached to a media file.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Audio-specific metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioAttributes {
    /// Duration in seconds
    pub duration: Option<f64>,
    /// Bitrate in kbit/s
    pub bitrate: Option<u32>,
    /// Sample rate in Hz
    pub sample_rate: Option<u32>,
    /// Channel count
    pub channels: Option<u8>,
}

impl AudioAttributes {
    /// Metadata entries for every audio key, `null` when unset.
    pub fn to_metadata(&self) -> Metadata {
        let mut metadata = Metadata::new();
        metadata.insert("duration".to_string(), json!(self.duration));
        metadata.insert("bitrate".to_string(), json!(self.bitrate));
        metadata.insert("sample_rate".to_string(), json!(self.sample_rate));
        metadata.insert("channels".to_string(), json!(self.channels));
        metadata
    }
}

/// Video-specific metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoAttributes {
    /// Duration in seconds
    pub duration: Option<f64>,
    /// Frame size as `WIDTHxHEIGHT`, e.g. `1920x1080`
    pub resolution: Option<String>,
    /// Frames per second
    pub frame_rate: Option<f64>,
    /// Codec name, e.g. `h264`
    pub codec: Option<String>,
}

impl VideoAttributes {
    /// Metadata entries for every video key, `null` when unset.
    pub fn to_metadata(&self) -> Metadata {
        let mut metadata = Metadata::new();
        metadata.insert("duration".to_string(), json!(self.duration));
        metadata.insert("resolution".to_string(), json!(self.resolution));
        metadata.insert("frame_rate".to_string(), json!(self.frame_rate));
        metadata.insert("codec".to_string(), json!(self.codec));
        metadata
    }
}

/// Photo-specific metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoAttributes {
    /// Width in pixels
    pub width: Option<u32>,
    /// Height in pixels
    pub height: Option<u32>,
    /// Color space, e.g. `RGB`
    pub color_space: Option<String>,
    /// Camera that took the photo
    pub camera_model: Option<String>,
}

impl PhotoAttributes {
    /// Metadata entries for every photo key, `null` when unset.
    pub fn to_metadata(&self) -> Metadata {
        let mut metadata = Metadata::new();
        metadata.insert("width".to_string(), json!(self.width));
        metadata.insert("height".to_string(), json!(self.height));
        metadata.insert("color_space".to_string(), json!(self.color_space));
        metadata.insert("camera_model".to_string(), json!(self.camera_model));
        metadata
    }
}
