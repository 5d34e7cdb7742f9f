//! S3-compatible object store backend.

use crate::MediaStorage;
use crate::storage::example_listing;
use derive_getters::Getters;

/// Storage in an S3-style bucket.
#[derive(Clone, PartialEq, Eq, Getters)]
pub struct S3Storage {
    bucket: String,
    region: String,
    access_key: String,
    secret_key: String,
}

impl S3Storage {
    /// Create a bucket backend.
    pub fn new(
        bucket: impl Into<String>,
        region: impl Into<String>,
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            bucket: bucket.into(),
            region: region.into(),
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }
}

impl std::fmt::Debug for S3Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3Storage")
            .field("bucket", &self.bucket)
            .field("region", &self.region)
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

impl MediaStorage for S3Storage {
    fn backend_name(&self) -> &'static str {
        "s3"
    }

    fn location(&self) -> String {
        format!("s3://{} ({})", self.bucket, self.region)
    }

    #[tracing::instrument(skip(self), fields(bucket = %self.bucket))]
    fn list_files(&self, directory: &str) -> Vec<String> {
        tracing::info!("Listing files in bucket");
        example_listing("s3_")
    }
}
