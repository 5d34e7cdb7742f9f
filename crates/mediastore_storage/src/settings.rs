//! Named storage backends loaded from TOML.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from mediastore.toml)
//! - User overrides (./mediastore.toml or ~/.config/mediastore/mediastore.toml)
//! - Automatic merging with user values taking precedence

use crate::{CloudStorage, LocalStorage, RemoteStorage, S3Storage, StorageBackend};
use config::{Config, File, FileFormat};
use mediastore_error::{ConfigError, ConfigErrorKind, MediastoreError, MediastoreResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Settings for a single backend, tagged by `kind`.
///
/// ```toml
/// [backends.media_bucket]
/// kind = "s3"
/// bucket = "media-bucket"
/// region = "us-west-2"
/// access_key = "access_key"
/// secret_key = "secret_key"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BackendConfig {
    /// Local disk
    Local,
    /// Cloud drive
    Cloud {
        /// Provider name, e.g. "Dropbox"
        provider: String,
        /// Provider credentials
        #[serde(default)]
        credentials: HashMap<String, String>,
    },
    /// Remote server
    Remote {
        /// Host name
        host: String,
        /// Port
        port: u16,
        /// Login user
        username: String,
        /// Login password
        password: String,
    },
    /// S3-style bucket
    S3 {
        /// Bucket name
        bucket: String,
        /// Bucket region
        region: String,
        /// Access key id
        access_key: String,
        /// Secret access key
        secret_key: String,
    },
}

impl BackendConfig {
    /// Build the backend these settings describe.
    pub fn build(&self) -> StorageBackend {
        match self {
            BackendConfig::Local => LocalStorage::new().into(),
            BackendConfig::Cloud {
                provider,
                credentials,
            } => CloudStorage::new(provider.clone(), credentials.clone()).into(),
            BackendConfig::Remote {
                host,
                port,
                username,
                password,
            } => RemoteStorage::new(host.clone(), *port, username.clone(), password.clone()).into(),
            BackendConfig::S3 {
                bucket,
                region,
                access_key,
                secret_key,
            } => S3Storage::new(
                bucket.clone(),
                region.clone(),
                access_key.clone(),
                secret_key.clone(),
            )
            .into(),
        }
    }
}

/// Top-level storage configuration.
///
/// # Example
///
/// ```no_run
/// use mediastore_storage::{MediaStorage, StorageConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StorageConfig::load()?;
/// let storage = config.backend(None)?;
/// println!("Default backend: {}", storage.location());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Backend used when none is named
    #[serde(default = "default_backend_name")]
    pub default_backend: String,

    /// Map of backend name to backend settings
    #[serde(default)]
    pub backends: HashMap<String, BackendConfig>,
}

fn default_backend_name() -> String {
    "local".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            default_backend: default_backend_name(),
            backends: HashMap::from([(default_backend_name(), BackendConfig::Local)]),
        }
    }
}

impl StorageConfig {
    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed, does not match the schema,
    /// or names a `default_backend` that is not configured.
    pub fn from_toml(contents: &str) -> MediastoreResult<Self> {
        Self::deserialize_from(
            Config::builder().add_source(File::from_str(contents, FileFormat::Toml)),
        )
    }

    /// Load configuration from a specific TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> MediastoreResult<Self> {
        debug!("Loading storage configuration from file");

        Self::deserialize_from(
            Config::builder().add_source(File::from(path.as_ref()).format(FileFormat::Toml)),
        )
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (mediastore.toml shipped with the library)
    /// 2. User config in home directory (~/.config/mediastore/mediastore.toml)
    /// 3. User config in current directory (./mediastore.toml)
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> MediastoreResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../mediastore.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/mediastore/mediastore.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("mediastore").required(false));

        Self::deserialize_from(builder)
    }

    fn deserialize_from(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> MediastoreResult<Self> {
        builder
            .build()
            .map_err(|e| MediastoreError::from(ConfigError::new(ConfigErrorKind::Load(e.to_string()))))?
            .try_deserialize::<Self>()
            .map_err(|e| MediastoreError::from(ConfigError::new(ConfigErrorKind::Parse(e.to_string()))))?
            .validated()
    }

    /// Reject a `default_backend` that names no configured backend.
    fn validated(self) -> MediastoreResult<Self> {
        if !self.backends.contains_key(&self.default_backend) {
            return Err(self.unknown_backend(&self.default_backend).into());
        }
        Ok(self)
    }

    fn unknown_backend(&self, name: &str) -> ConfigError {
        ConfigError::new(ConfigErrorKind::UnknownBackend {
            name: name.to_string(),
            available: self.backend_names().into_iter().map(String::from).collect(),
        })
    }

    /// Configured backend names, sorted.
    pub fn backend_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.backends.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Build a backend by name, or the default backend when `name` is `None`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if no backend has that name.
    #[instrument(skip(self))]
    pub fn backend(&self, name: Option<&str>) -> MediastoreResult<StorageBackend> {
        let name = name.unwrap_or(self.default_backend.as_str());
        let backend = self
            .backends
            .get(name)
            .ok_or_else(|| self.unknown_backend(name))?;
        debug!(backend = name, "Building storage backend");
        Ok(backend.build())
    }
}
