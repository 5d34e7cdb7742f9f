//! Local disk backend.

use crate::MediaStorage;
use crate::storage::example_listing;

/// Storage on the local disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalStorage;

impl LocalStorage {
    /// Create a local disk backend.
    pub fn new() -> Self {
        Self
    }
}

impl MediaStorage for LocalStorage {
    fn backend_name(&self) -> &'static str {
        "local"
    }

    fn location(&self) -> String {
        "local disk".to_string()
    }

    #[tracing::instrument(skip(self))]
    fn list_files(&self, directory: &str) -> Vec<String> {
        tracing::info!("Listing files on local disk");
        example_listing("")
    }
}
