//! Tests for the inspect, load, list and backends reports.

use mediastore::report::{self, OutputFormat};
use mediastore::{
    ConfigErrorKind, MediaErrorKind, MediastoreError, MediastoreErrorKind, StorageConfig,
};
use std::process::Command;

const CONFIG: &str = r#"
default_backend = "bucket"

[backends.disk]
kind = "local"

[backends.bucket]
kind = "s3"
bucket = "media-bucket"
region = "us-west-2"
access_key = "access"
secret_key = "secret"
"#;

fn config() -> StorageConfig {
    StorageConfig::from_toml(CONFIG).unwrap()
}

fn mediastore_error<'a>(err: &'a (dyn std::error::Error + 'static)) -> &'a MediastoreErrorKind {
    err.downcast_ref::<MediastoreError>()
        .expect("expected a MediastoreError")
        .kind()
}

#[test]
fn test_inspect_human() {
    let mut out = Vec::new();
    report::inspect(&mut out, "music/song.mp3", 42, Some("John".into()), OutputFormat::Human)
        .unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(output.starts_with("Audio: song.mp3 (42 bytes)\n"));
    assert!(output.contains("  owner: John\n"));
    assert!(output.contains("  bitrate: null\n"));
}

#[test]
fn test_inspect_json() {
    let mut out = Vec::new();
    report::inspect(&mut out, "clip.mov", 7, None, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(value["type"], "video");
    assert_eq!(value["name"], "clip.mov");
    assert_eq!(value["size"], 7);
    assert!(value["metadata"]["codec"].is_null());
}

#[test]
fn test_inspect_unsupported_extension_fails() {
    let mut out = Vec::new();
    let err = report::inspect(&mut out, "notes.txt", 1, None, OutputFormat::Human).unwrap_err();

    match mediastore_error(err.as_ref()) {
        MediastoreErrorKind::Media(media) => assert_eq!(
            media.kind(),
            &MediaErrorKind::UnsupportedFileType {
                path: "notes.txt".to_string()
            }
        ),
        other => panic!("expected media error, got {other:?}"),
    }
    assert!(out.is_empty());
}

#[test]
fn test_load_through_default_backend() {
    let mut out = Vec::new();
    report::load(&mut out, &config(), "photos/cat.png", 9, None, OutputFormat::Human).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(output.starts_with("Photo: cat.png (9 bytes)\n"));
}

#[test]
fn test_load_unknown_backend_fails() {
    let mut out = Vec::new();
    let err = report::load(
        &mut out,
        &config(),
        "song.mp3",
        1,
        Some("tape"),
        OutputFormat::Human,
    )
    .unwrap_err();

    match mediastore_error(err.as_ref()) {
        MediastoreErrorKind::Config(config_err) => assert_eq!(
            config_err.kind(),
            &ConfigErrorKind::UnknownBackend {
                name: "tape".to_string(),
                available: vec!["bucket".to_string(), "disk".to_string()],
            }
        ),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn test_list_named_backend() {
    let mut out = Vec::new();
    report::list(&mut out, &config(), "/music", Some("disk")).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "example1.mp3\nexample2.mp4\nexample3.jpg\n"
    );
}

#[test]
fn test_backends_marks_default() {
    let mut out = Vec::new();
    report::backends(&mut out, &config()).unwrap();
    let output = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("* bucket"));
    assert!(lines[0].ends_with("s3://media-bucket (us-west-2)"));
    assert!(lines[1].starts_with("  disk"));
    assert!(lines[1].ends_with("local disk"));
}

#[test]
fn test_binary_exit_status() {
    let ok = Command::new(env!("CARGO_BIN_EXE_mediastore"))
        .args(["inspect", "song.mp3", "--size", "10"])
        .output()
        .unwrap();
    assert!(ok.status.success());
    assert!(String::from_utf8_lossy(&ok.stdout).starts_with("Audio: song.mp3 (10 bytes)"));

    let failed = Command::new(env!("CARGO_BIN_EXE_mediastore"))
        .args(["inspect", "notes.txt", "--size", "10"])
        .output()
        .unwrap();
    assert!(!failed.status.success());
    assert!(String::from_utf8_lossy(&failed.stderr).contains("Unsupported file type: notes.txt"));
}
