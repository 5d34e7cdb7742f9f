//! Remote server backend (FTP, SFTP).

use crate::MediaStorage;
use crate::storage::example_listing;
use derive_getters::Getters;

/// Storage on a remote server.
#[derive(Clone, PartialEq, Eq, Getters)]
pub struct RemoteStorage {
    host: String,
    port: u16,
    username: String,
    password: String,
}

impl RemoteStorage {
    /// Create a remote server backend.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for RemoteStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteStorage")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl MediaStorage for RemoteStorage {
    fn backend_name(&self) -> &'static str {
        "remote"
    }

    fn location(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    #[tracing::instrument(skip(self), fields(host = %self.host, port = self.port))]
    fn list_files(&self, directory: &str) -> Vec<String> {
        tracing::info!("Listing files on remote server");
        example_listing("remote_")
    }
}
