//! Guided tour of the media, storage and vehicle APIs.

use crate::{
    AudioAttributes, AudioFile, CloudStorage, LocalStorage, Media, MediaFile, MediaFileFactory,
    MediaInfo, MediaOptions, MediaStorage, Metadata, PhotoAttributes, PhotoFile, Plane,
    RemoteStorage, S3Storage, Vehicle, VideoAttributes, VideoFile,
};
use serde_json::json;
use std::collections::HashMap;
use std::io::Write;

/// Run every example scenario, writing a human-readable report to `out`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails or a scenario step fails
/// unexpectedly.
#[tracing::instrument(skip(out))]
pub fn run(out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    media_files(out)?;
    storage_backends(out)?;
    factory(out)?;
    vehicles(out)?;
    Ok(())
}

fn media_files(out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let mut audio = AudioFile::new(
        MediaInfo::new("song.mp3", 5_000_000).with_owner("John"),
        AudioAttributes {
            duration: Some(240.0),
            bitrate: Some(320),
            sample_rate: Some(44_100),
            channels: Some(2),
        },
    );
    let video = VideoFile::new(
        MediaInfo::new("movie.mp4", 50_000_000).with_owner("Alice"),
        VideoAttributes {
            duration: Some(3600.0),
            resolution: Some("1920x1080".to_string()),
            frame_rate: Some(30.0),
            codec: Some("h264".to_string()),
        },
    );
    let photo = PhotoFile::new(
        MediaInfo::new("image.jpg", 2_000_000).with_owner("Bob"),
        PhotoAttributes {
            width: Some(1920),
            height: Some(1080),
            color_space: Some("RGB".to_string()),
            camera_model: Some("Canon EOS".to_string()),
        },
    );

    writeln!(out, "\n--- Created media files ---")?;
    writeln!(out, "{}", audio)?;
    writeln!(out, "{}", video)?;
    writeln!(out, "{}", photo)?;

    let mut update = Metadata::new();
    update.insert("genre".to_string(), json!("Rock"));
    update.insert("artist".to_string(), json!("Unknown"));
    audio.update_metadata(update);

    writeln!(out, "\n--- Updated audio metadata ---")?;
    writeln!(out, "Audio metadata: {}", serde_json::to_string(audio.metadata())?)?;

    writeln!(out, "\n--- Converted files ---")?;
    writeln!(out, "{}", audio.convert("wav"))?;
    writeln!(out, "{}", video.convert("avi"))?;
    writeln!(out, "{}", photo.convert("png"))?;

    writeln!(out, "\n--- Extracted features ---")?;
    for features in [
        audio.extract_features(),
        video.extract_features(),
        photo.extract_features(),
    ] {
        writeln!(out, "{}: {}", features.source(), serde_json::to_string(&features)?)?;
    }

    audio.adjust_volume(0.8);
    let frame = video.extract_frame(120.5);
    let resized = photo.resize(800, 600);

    writeln!(out, "\n--- Specific operations ---")?;
    writeln!(out, "Extracted frame: {}", frame)?;
    writeln!(out, "Resized photo: {}", resized)?;
    Ok(())
}

fn storage_backends(out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let local = LocalStorage::new();
    let cloud = CloudStorage::new(
        "Dropbox",
        HashMap::from([("api_key".to_string(), "your_api_key".to_string())]),
    );
    let remote = RemoteStorage::new("example.com", 22, "user", "password");
    let s3 = S3Storage::new("media-bucket", "us-west-2", "access_key", "secret_key");

    let song: MediaFile = MediaFileFactory::create_from_path(
        "/music/song.mp3",
        5_000_000,
        MediaOptions::default(),
    )?;
    let movie = MediaFileFactory::create_from_path(
        "/videos/movie.mp4",
        50_000_000,
        MediaOptions::default(),
    )?;
    let image =
        MediaFileFactory::create_from_path("/photos/image.jpg", 2_000_000, MediaOptions::default())?;

    writeln!(out, "\n--- Storage operations ---")?;
    let saves: [(&dyn MediaStorage, &MediaFile, &str); 4] = [
        (&local, &song, "/music/song.mp3"),
        (&cloud, &movie, "/videos/movie.mp4"),
        (&remote, &image, "/photos/image.jpg"),
        (&s3, &song, "audio/song.mp3"),
    ];
    for (storage, file, path) in saves {
        let saved = storage.save(file, path);
        writeln!(
            out,
            "Saved {} to {} at {}: {}",
            file.name(),
            storage.location(),
            path,
            saved
        )?;
    }

    let loaded = [
        local.load("/music/another_song.mp3", 1_000_000)?,
        cloud.load("/videos/another_movie.mp4", 5_000_000)?,
        s3.load("photos/another_image.jpg", 500_000)?,
    ];

    writeln!(out, "\n--- Loaded files ---")?;
    for file in &loaded {
        writeln!(out, "{}", file)?;
    }

    let deleted = local.delete("/music/old_song.mp3");
    writeln!(out, "Deleted /music/old_song.mp3 from {}: {}", local.location(), deleted)?;

    writeln!(out, "\n--- File listings ---")?;
    writeln!(out, "Local files: {:?}", local.list_files("/music"))?;
    writeln!(out, "Cloud files: {:?}", cloud.list_files("/videos"))?;
    writeln!(out, "Remote files: {:?}", remote.list_files("/photos"))?;
    writeln!(out, "S3 files: {:?}", s3.list_files("audio"))?;
    Ok(())
}

fn factory(out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(out, "\n--- Files created by factory ---")?;
    for (path, size) in [
        ("music/new_song.mp3", 3_000_000),
        ("videos/new_movie.mp4", 40_000_000),
        ("photos/new_image.jpg", 1_500_000),
    ] {
        let file = MediaFileFactory::create_from_path(path, size, MediaOptions::default())?;
        writeln!(out, "{}", file)?;
    }

    if let Err(e) =
        MediaFileFactory::create_from_path("docs/readme.txt", 1_024, MediaOptions::default())
    {
        writeln!(out, "Rejected docs/readme.txt: {}", e)?;
    }
    Ok(())
}

fn vehicles(out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(out, "\n--- Vehicle ---")?;
    let mut car = Vehicle::new(1_000.0, 10.0, 2.0);
    car.start()?;
    car.travel(4.0)?;
    writeln!(out, "Fuel after moving 4: {}", car.fuel())?;
    if let Err(e) = car.travel(2.0) {
        writeln!(out, "Move of 2 refused: {}", e.kind())?;
    }

    let mut empty = Vehicle::new(1_000.0, 0.0, 2.0);
    if let Err(e) = empty.start() {
        writeln!(out, "Empty vehicle refused to start: {}", e.kind())?;
    }

    writeln!(out, "\n--- Plane ---")?;
    let mut plane = Plane::new(20_000.0, 500.0, 5.0, 100.0);
    plane.load_cargo(60.0)?;
    writeln!(out, "Cargo on board: {}", plane.cargo())?;
    if let Err(e) = plane.load_cargo(50.0) {
        writeln!(out, "Load of 50 refused: {}", e.kind())?;
    }
    writeln!(out, "Unloaded cargo: {}", plane.remove_all_cargo())?;
    Ok(())
}
