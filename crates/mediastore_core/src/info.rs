//! Fields shared by every media variant.

use crate::{MediaType, Metadata};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Common media file fields.
///
/// # Examples
///
/// ```
/// use mediastore_core::MediaInfo;
///
/// let info = MediaInfo::new("song.mp3", 5_000_000).with_owner("John");
/// assert_eq!(info.name(), "song.mp3");
/// assert_eq!(info.owner().as_deref(), Some("John"));
/// assert!(info.metadata().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct MediaInfo {
    /// File name, without directories
    name: String,
    /// Size in bytes
    size: u64,
    /// When this value was created
    created_at: DateTime<Utc>,
    /// Owning user, if known
    #[serde(default)]
    owner: Option<String>,
    /// Descriptive fields, including the variant-specific keys
    #[serde(default)]
    metadata: Metadata,
}

impl MediaInfo {
    /// Create info for a new file stamped with the current time.
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            created_at: Utc::now(),
            owner: None,
            metadata: Metadata::new(),
        }
    }

    /// Set the owner.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Set the creation time.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Start from the given metadata.
    ///
    /// Variant constructors write their own keys on top of this map.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Merge entries into the metadata; incoming keys win.
    pub(crate) fn merge_metadata(&mut self, metadata: Metadata) {
        self.metadata.extend(metadata);
    }

    /// Add `null` entries for any of `media_type`'s keys that are absent.
    pub(crate) fn with_variant_keys(mut self, media_type: MediaType) -> Self {
        for key in media_type.metadata_keys() {
            self.metadata
                .entry(key.to_string())
                .or_insert(serde_json::Value::Null);
        }
        self
    }

    /// Copy of this info under a new name, created now.
    pub(crate) fn renamed(&self, name: String) -> Self {
        Self {
            name,
            size: self.size,
            created_at: Utc::now(),
            owner: self.owner.clone(),
            metadata: self.metadata.clone(),
        }
    }
}

/// Optional fields for building a file from a path.
///
/// `metadata` is merged after the variant keys are written, so it may set
/// them (for example `duration` on an audio file).
#[derive(Debug, Clone, Default, PartialEq, Getters)]
pub struct MediaOptions {
    owner: Option<String>,
    created_at: Option<DateTime<Utc>>,
    metadata: Metadata,
}

impl MediaOptions {
    /// Set the owner.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Set the creation time instead of using the current time.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Extra metadata to merge into the new file.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Split into the common info for `name`/`size` and the extra metadata.
    pub(crate) fn into_parts(self, name: &str, size: u64) -> (MediaInfo, Metadata) {
        let mut info = MediaInfo::new(name, size);
        info.owner = self.owner;
        if let Some(created_at) = self.created_at {
            info.created_at = created_at;
        }
        (info, self.metadata)
    }
}
