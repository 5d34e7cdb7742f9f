//! Cloud drive backend (Google Drive, Dropbox and the like).

use crate::MediaStorage;
use crate::storage::example_listing;
use derive_getters::Getters;
use std::collections::HashMap;

/// Storage in a cloud drive.
///
/// Credential values never appear in `Debug` output.
#[derive(Clone, PartialEq, Eq, Getters)]
pub struct CloudStorage {
    provider: String,
    credentials: HashMap<String, String>,
}

impl CloudStorage {
    /// Create a cloud backend for `provider`.
    pub fn new(provider: impl Into<String>, credentials: HashMap<String, String>) -> Self {
        Self {
            provider: provider.into(),
            credentials,
        }
    }
}

impl std::fmt::Debug for CloudStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<&String> = self.credentials.keys().collect();
        keys.sort();
        f.debug_struct("CloudStorage")
            .field("provider", &self.provider)
            .field("credentials", &keys)
            .finish()
    }
}

impl MediaStorage for CloudStorage {
    fn backend_name(&self) -> &'static str {
        "cloud"
    }

    fn location(&self) -> String {
        format!("{} cloud", self.provider)
    }

    #[tracing::instrument(skip(self), fields(provider = %self.provider))]
    fn list_files(&self, directory: &str) -> Vec<String> {
        tracing::info!("Listing files in cloud drive");
        example_listing("cloud_")
    }
}
