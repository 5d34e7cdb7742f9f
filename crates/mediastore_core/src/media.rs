//! The capability set shared by all media variants.

use crate::{MediaInfo, MediaType, Metadata};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Placeholder feature record returned by [`Media::extract_features`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Features {
    /// Which kind of analysis produced the record
    feature_type: MediaType,
    /// Name of the analysed file
    source: String,
}

/// Operations every media file supports.
pub trait Media {
    /// Common fields.
    fn info(&self) -> &MediaInfo;

    /// Mutable access to the common fields.
    fn info_mut(&mut self) -> &mut MediaInfo;

    /// Variant of this file.
    fn media_type(&self) -> MediaType;

    /// Produce a copy in another format.
    ///
    /// Only the final extension of the name changes; size, owner and metadata
    /// are copied. No transcoding happens.
    fn convert(&self, target_format: &str) -> Self
    where
        Self: Sized;

    /// File name.
    fn name(&self) -> &str {
        self.info().name()
    }

    /// Size in bytes.
    fn size(&self) -> u64 {
        *self.info().size()
    }

    /// Descriptive metadata.
    fn metadata(&self) -> &Metadata {
        self.info().metadata()
    }

    /// Fixed type name: `Audio`, `Video` or `Photo`.
    fn file_type(&self) -> &'static str {
        self.media_type().as_str()
    }

    /// Run the (placeholder) feature extraction for this variant.
    fn extract_features(&self) -> Features {
        let feature_type = self.media_type();
        tracing::info!(
            name = %self.name(),
            feature_type = %feature_type,
            "Extracting features"
        );
        Features {
            feature_type,
            source: self.name().to_string(),
        }
    }

    /// Merge entries into the metadata.
    ///
    /// Keys in `metadata` overwrite existing ones; all other keys are kept.
    fn update_metadata(&mut self, metadata: Metadata) {
        tracing::debug!(name = %self.name(), keys = metadata.len(), "Updating metadata");
        self.info_mut().merge_metadata(metadata);
    }
}
