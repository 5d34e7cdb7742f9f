//! Reports behind the `inspect`, `load`, `list` and `backends` commands.
//!
//! Each function writes to a caller-supplied sink so the binary can use
//! stdout and tests can use a buffer.

use crate::{
    Media, MediaFile, MediaFileFactory, MediaOptions, MediaStorage, MediastoreResult,
    StorageConfig,
};
use std::io::Write;
use std::path::Path;

/// Output format for media files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One-line summary plus metadata
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
}

/// Load `path` as configuration, or use the layered defaults when `None`.
pub fn load_config(path: Option<&Path>) -> MediastoreResult<StorageConfig> {
    match path {
        Some(path) => StorageConfig::from_file(path),
        None => StorageConfig::load(),
    }
}

/// Build a media file from `path` and write it.
///
/// # Errors
///
/// Fails with `UnsupportedFileType` for unknown extensions, or if writing fails.
#[tracing::instrument(skip(out))]
pub fn inspect(
    out: &mut impl Write,
    path: &str,
    size: u64,
    owner: Option<String>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = MediaOptions::default();
    if let Some(owner) = owner {
        options = options.with_owner(owner);
    }

    let file = MediaFileFactory::create_from_path(path, size, options)?;
    write_file(out, &file, format)
}

/// Load a file through a configured backend and write it.
///
/// # Errors
///
/// Fails with a `ConfigError` if the backend is unknown, or with
/// `UnsupportedFileType` if the path's extension is not a media type.
#[tracing::instrument(skip(out, config))]
pub fn load(
    out: &mut impl Write,
    config: &StorageConfig,
    path: &str,
    size: u64,
    backend: Option<&str>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let storage = config.backend(backend)?;
    let file = storage.load(path, size)?;
    write_file(out, &file, format)
}

/// List a directory through a configured backend, one name per line.
///
/// # Errors
///
/// Fails with a `ConfigError` if the backend is unknown.
#[tracing::instrument(skip(out, config))]
pub fn list(
    out: &mut impl Write,
    config: &StorageConfig,
    directory: &str,
    backend: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let storage = config.backend(backend)?;
    for name in storage.list_files(directory) {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

/// Write every configured backend, marking the default with `*`.
pub fn backends(
    out: &mut impl Write,
    config: &StorageConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    for name in config.backend_names() {
        let storage = config.backend(Some(name))?;
        let marker = if name == config.default_backend { "*" } else { " " };
        writeln!(
            out,
            "{} {:<16} {:<8} {}",
            marker,
            name,
            storage.backend_name(),
            storage.location()
        )?;
    }
    Ok(())
}

fn write_file(
    out: &mut impl Write,
    file: &MediaFile,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => {
            writeln!(out, "{}", file)?;
            if let Some(owner) = file.info().owner() {
                writeln!(out, "  owner: {}", owner)?;
            }
            writeln!(out, "  created: {}", file.info().created_at().to_rfc3339())?;
            for (key, value) in file.metadata() {
                writeln!(out, "  {}: {}", key, value)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(file)?)?;
        }
    }
    Ok(())
}
