//! Tests for the storage backends.

use mediastore_core::{Media, MediaFile, MediaFileFactory, MediaOptions, MediaType};
use mediastore_error::{MediaErrorKind, MediastoreErrorKind};
use mediastore_storage::{
    CloudStorage, LocalStorage, MediaStorage, RemoteStorage, S3Storage, StorageBackend,
};
use std::collections::HashMap;

fn all_backends() -> Vec<StorageBackend> {
    vec![
        LocalStorage::new().into(),
        CloudStorage::new(
            "Dropbox",
            HashMap::from([("api_key".to_string(), "your_api_key".to_string())]),
        )
        .into(),
        RemoteStorage::new("example.com", 22, "user", "password").into(),
        S3Storage::new("media-bucket", "us-west-2", "access_key", "secret_key").into(),
    ]
}

fn sample_file() -> MediaFile {
    MediaFileFactory::create_from_path("music/song.mp3", 5_000_000, MediaOptions::default())
        .unwrap()
}

#[test]
fn test_load_selects_variant_by_extension() {
    let cases = [
        ("/music/a.mp3", MediaType::Audio),
        ("/music/a.wav", MediaType::Audio),
        ("/music/a.flac", MediaType::Audio),
        ("/videos/a.mp4", MediaType::Video),
        ("/videos/a.avi", MediaType::Video),
        ("/videos/a.mov", MediaType::Video),
        ("photos/a.jpg", MediaType::Photo),
        ("photos/a.png", MediaType::Photo),
        ("photos/a.gif", MediaType::Photo),
    ];

    for storage in all_backends() {
        for (path, expected) in cases {
            let file = storage.load(path, 1_000).unwrap();
            assert_eq!(file.media_type(), expected, "{} {}", storage.backend_name(), path);
            assert_eq!(file.name(), path.rsplit('/').next().unwrap());
        }
    }
}

#[test]
fn test_load_uses_caller_size() {
    let storage = LocalStorage::new();
    let file = storage.load("/videos/another_movie.mp4", 7_340_032).unwrap();
    assert_eq!(file.size(), 7_340_032);
}

#[test]
fn test_load_rejects_unsupported_extension() {
    for storage in all_backends() {
        let err = storage.load("/docs/report.pdf", 10).unwrap_err();
        match err.kind() {
            MediastoreErrorKind::Media(media) => assert!(matches!(
                media.kind(),
                MediaErrorKind::UnsupportedFileType { path } if path == "/docs/report.pdf"
            )),
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn test_save_and_delete_succeed() {
    let file = sample_file();
    for storage in all_backends() {
        assert!(storage.save(&file, "/music/song.mp3"));
        assert!(storage.delete("/music/old_song.mp3"));
    }
}

#[test]
fn test_list_files_per_backend() {
    let listings: Vec<(String, Vec<String>)> = all_backends()
        .iter()
        .map(|storage| (storage.backend_name().to_string(), storage.list_files("/music")))
        .collect();

    assert_eq!(
        listings,
        vec![
            (
                "local".to_string(),
                vec!["example1.mp3", "example2.mp4", "example3.jpg"]
                    .into_iter()
                    .map(String::from)
                    .collect()
            ),
            (
                "cloud".to_string(),
                vec!["cloud_example1.mp3", "cloud_example2.mp4", "cloud_example3.jpg"]
                    .into_iter()
                    .map(String::from)
                    .collect()
            ),
            (
                "remote".to_string(),
                vec!["remote_example1.mp3", "remote_example2.mp4", "remote_example3.jpg"]
                    .into_iter()
                    .map(String::from)
                    .collect()
            ),
            (
                "s3".to_string(),
                vec!["s3_example1.mp3", "s3_example2.mp4", "s3_example3.jpg"]
                    .into_iter()
                    .map(String::from)
                    .collect()
            ),
        ]
    );
}

#[test]
fn test_locations() {
    let locations: Vec<String> = all_backends().iter().map(|s| s.location()).collect();
    assert_eq!(
        locations,
        vec![
            "local disk",
            "Dropbox cloud",
            "example.com:22",
            "s3://media-bucket (us-west-2)",
        ]
    );
}

#[test]
fn test_debug_redacts_secrets() {
    let remote = RemoteStorage::new("example.com", 22, "user", "hunter2");
    let s3 = S3Storage::new("media-bucket", "us-west-2", "AKIA", "topsecret");
    let cloud = CloudStorage::new(
        "Dropbox",
        HashMap::from([("api_key".to_string(), "sk-live".to_string())]),
    );

    assert!(!format!("{:?}", remote).contains("hunter2"));
    assert!(!format!("{:?}", s3).contains("topsecret"));
    let cloud_debug = format!("{:?}", cloud);
    assert!(cloud_debug.contains("api_key"));
    assert!(!cloud_debug.contains("sk-live"));
}

#[test]
fn test_backends_keep_connection_details() {
    let remote = RemoteStorage::new("example.com", 2222, "user", "password");
    assert_eq!(remote.host(), "example.com");
    assert_eq!(*remote.port(), 2222);
    assert_eq!(remote.username(), "user");

    let s3 = S3Storage::new("media-bucket", "eu-central-1", "ak", "sk");
    assert_eq!(s3.bucket(), "media-bucket");
    assert_eq!(s3.region(), "eu-central-1");
}

#[test]
fn test_trait_objects_dispatch() {
    let storages: Vec<Box<dyn MediaStorage>> = vec![
        Box::new(LocalStorage::new()),
        Box::new(S3Storage::new("b", "r", "a", "s")),
    ];
    let names: Vec<&str> = storages.iter().map(|s| s.backend_name()).collect();
    assert_eq!(names, vec!["local", "s3"]);
}
