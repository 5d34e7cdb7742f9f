//! Tests for media file variants.

use mediastore_core::{
    AudioAttributes, AudioFile, Media, MediaFile, MediaInfo, MediaType, Metadata,
    PhotoAttributes, PhotoFile, VideoAttributes, VideoFile,
};
use serde_json::json;

fn song() -> AudioFile {
    AudioFile::new(
        MediaInfo::new("song.mp3", 5_000_000).with_owner("John"),
        AudioAttributes {
            duration: Some(240.0),
            bitrate: Some(320),
            sample_rate: Some(44_100),
            channels: Some(2),
        },
    )
}

fn movie() -> VideoFile {
    VideoFile::new(
        MediaInfo::new("movie.mp4", 50_000_000).with_owner("Alice"),
        VideoAttributes {
            duration: Some(3600.0),
            resolution: Some("1920x1080".to_string()),
            frame_rate: Some(30.0),
            codec: Some("h264".to_string()),
        },
    )
}

fn image() -> PhotoFile {
    PhotoFile::new(
        MediaInfo::new("image.jpg", 2_000_000).with_owner("Bob"),
        PhotoAttributes {
            width: Some(1920),
            height: Some(1080),
            color_space: Some("RGB".to_string()),
            camera_model: Some("Canon EOS".to_string()),
        },
    )
}

#[test]
fn test_variant_keys_always_present() {
    let audio = AudioFile::new(MediaInfo::new("a.wav", 1), AudioAttributes::default());
    for key in ["duration", "bitrate", "sample_rate", "channels"] {
        assert!(audio.metadata()[key].is_null(), "missing {key}");
    }

    let video = VideoFile::new(MediaInfo::new("v.avi", 1), VideoAttributes::default());
    for key in ["duration", "resolution", "frame_rate", "codec"] {
        assert!(video.metadata()[key].is_null(), "missing {key}");
    }

    let photo = PhotoFile::new(MediaInfo::new("p.gif", 1), PhotoAttributes::default());
    for key in ["width", "height", "color_space", "camera_model"] {
        assert!(photo.metadata()[key].is_null(), "missing {key}");
    }
}

#[test]
fn test_variant_keys_overwrite_initial_metadata() {
    let mut initial = Metadata::new();
    initial.insert("bitrate".to_string(), json!(128));
    initial.insert("genre".to_string(), json!("Rock"));

    let audio = AudioFile::new(
        MediaInfo::new("a.mp3", 1).with_metadata(initial),
        AudioAttributes::default(),
    );

    assert!(audio.metadata()["bitrate"].is_null());
    assert_eq!(audio.metadata()["genre"], "Rock");
}

#[test]
fn test_file_type_and_display() {
    assert_eq!(song().file_type(), "Audio");
    assert_eq!(movie().file_type(), "Video");
    assert_eq!(image().file_type(), "Photo");

    assert_eq!(song().to_string(), "Audio: song.mp3 (5000000 bytes)");
    assert_eq!(movie().to_string(), "Video: movie.mp4 (50000000 bytes)");
    assert_eq!(image().to_string(), "Photo: image.jpg (2000000 bytes)");
}

#[test]
fn test_extract_features_reports_variant() {
    let features = song().extract_features();
    assert_eq!(*features.feature_type(), MediaType::Audio);
    assert_eq!(features.source(), "song.mp3");

    assert_eq!(*movie().extract_features().feature_type(), MediaType::Video);
    assert_eq!(*image().extract_features().feature_type(), MediaType::Photo);
}

#[test]
fn test_convert_renames_only_extension() {
    let audio = song();
    let converted = audio.convert("wav");

    assert_eq!(converted.name(), "song.wav");
    assert_eq!(converted.size(), audio.size());
    assert_eq!(converted.metadata(), audio.metadata());
    assert_eq!(converted.info().owner(), audio.info().owner());

    let video = movie().convert("avi");
    assert_eq!(video.name(), "movie.avi");
    assert_eq!(video.metadata()["codec"], "h264");

    let photo = image().convert("png");
    assert_eq!(photo.name(), "image.png");
    assert_eq!(photo.width(), Some(1920));
}

#[test]
fn test_convert_keeps_inner_dots() {
    let audio = AudioFile::new(
        MediaInfo::new("live.at.wembley.flac", 10),
        AudioAttributes::default(),
    );
    assert_eq!(audio.convert("mp3").name(), "live.at.wembley.mp3");
}

#[test]
fn test_update_metadata_merges() {
    let mut audio = song();
    let mut update = Metadata::new();
    update.insert("genre".to_string(), json!("Rock"));
    update.insert("bitrate".to_string(), json!(256));

    audio.update_metadata(update);

    assert_eq!(audio.metadata()["genre"], "Rock");
    assert_eq!(audio.metadata()["bitrate"], 256);
    assert_eq!(audio.metadata()["sample_rate"], 44_100);
    assert_eq!(audio.metadata()["channels"], 2);
}

#[test]
fn test_update_metadata_with_empty_map_is_noop() {
    let mut photo = image();
    let before = photo.metadata().clone();
    photo.update_metadata(Metadata::new());
    assert_eq!(photo.metadata(), &before);
}

#[test]
fn test_extract_frame_uses_resolution() {
    let frame = movie().extract_frame(120.5);

    assert_eq!(frame.name(), "movie_120.5.jpg");
    assert_eq!(frame.size(), 100_000);
    assert_eq!(frame.width(), Some(1920));
    assert_eq!(frame.height(), Some(1080));
}

#[test]
fn test_extract_frame_without_resolution_uses_full_hd() {
    let video = VideoFile::new(MediaInfo::new("clip.mov", 10), VideoAttributes::default());
    let frame = video.extract_frame(3.0);

    assert_eq!(frame.name(), "clip_3.jpg");
    assert_eq!((frame.width(), frame.height()), (Some(1920), Some(1080)));
}

#[test]
fn test_resize_overrides_dimensions_only() {
    let photo = image();
    let resized = photo.resize(800, 600);

    assert_eq!(resized.name(), "image_resized.jpg");
    assert_eq!(resized.size(), photo.size());
    assert_eq!(resized.width(), Some(800));
    assert_eq!(resized.height(), Some(600));
    assert_eq!(resized.metadata()["camera_model"], "Canon EOS");
}

#[test]
fn test_adjust_volume_leaves_file_untouched() {
    let audio = song();
    let before = audio.clone();
    audio.adjust_volume(0.8);
    assert_eq!(audio, before);
}

#[test]
fn test_media_file_delegates_to_variant() {
    let file: MediaFile = movie().into();

    assert_eq!(file.media_type(), MediaType::Video);
    assert!(file.as_video().is_some());
    assert!(file.as_audio().is_none());
    assert_eq!(file.to_string(), "Video: movie.mp4 (50000000 bytes)");

    let converted = file.convert("mov");
    assert!(matches!(converted, MediaFile::Video(_)));
    assert_eq!(converted.name(), "movie.mov");
}

#[test]
fn test_media_file_serializes_with_type_tag() {
    let file: MediaFile = image().into();
    let value = serde_json::to_value(&file).unwrap();

    assert_eq!(value["type"], "photo");
    assert_eq!(value["name"], "image.jpg");
    assert_eq!(value["metadata"]["color_space"], "RGB");

    let back: MediaFile = serde_json::from_value(value).unwrap();
    assert_eq!(back, file);
}

#[test]
fn test_deserialize_fills_missing_variant_keys() {
    let file: MediaFile = serde_json::from_value(json!({
        "type": "audio",
        "name": "a.mp3",
        "size": 1,
        "created_at": "2024-01-01T00:00:00Z",
        "owner": null,
        "metadata": {"bitrate": 128, "genre": "jazz"}
    }))
    .unwrap();

    for key in MediaType::Audio.metadata_keys() {
        assert!(file.metadata().contains_key(*key), "missing {key}");
    }
    assert_eq!(file.metadata()["bitrate"], 128);
    assert_eq!(file.metadata()["genre"], "jazz");
    assert!(file.metadata()["duration"].is_null());
}

#[test]
fn test_deserialize_without_metadata_field() {
    let photo: PhotoFile = serde_json::from_value(json!({
        "name": "image.png",
        "size": 10,
        "created_at": "2024-01-01T00:00:00Z"
    }))
    .unwrap();

    let mut keys: Vec<&str> = photo.metadata().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["camera_model", "color_space", "height", "width"]);
    assert_eq!(photo.width(), None);
}

#[test]
fn test_attributes_write_exactly_the_variant_keys() {
    let cases = [
        (MediaType::Audio, AudioAttributes::default().to_metadata()),
        (MediaType::Video, VideoAttributes::default().to_metadata()),
        (MediaType::Photo, PhotoAttributes::default().to_metadata()),
    ];

    for (media_type, metadata) in cases {
        let mut written: Vec<&str> = metadata.keys().map(String::as_str).collect();
        let mut expected = media_type.metadata_keys().to_vec();
        written.sort_unstable();
        expected.sort_unstable();
        assert_eq!(written, expected);
    }
}
