//! Tests for the guided demo.

fn demo_output() -> String {
    let mut buffer = Vec::new();
    mediastore::demo::run(&mut buffer).unwrap();
    String::from_utf8(buffer).unwrap()
}

#[test]
fn test_demo_reports_media_operations() {
    let output = demo_output();

    assert!(output.contains("Audio: song.mp3 (5000000 bytes)"));
    assert!(output.contains("Video: movie.avi (50000000 bytes)"));
    assert!(output.contains("Photo: image.png (2000000 bytes)"));
    assert!(output.contains("\"genre\":\"Rock\""));
    assert!(output.contains("Extracted frame: Photo: movie_120.5.jpg (100000 bytes)"));
    assert!(output.contains("Resized photo: Photo: image_resized.jpg (2000000 bytes)"));
}

#[test]
fn test_demo_reports_storage_operations() {
    let output = demo_output();

    assert!(output.contains("Saved song.mp3 to local disk at /music/song.mp3: true"));
    assert!(output.contains("Saved image.jpg to example.com:22 at /photos/image.jpg: true"));
    assert!(output.contains("Audio: another_song.mp3 (1000000 bytes)"));
    assert!(output.contains("Photo: another_image.jpg (500000 bytes)"));
    assert!(output.contains(r#"Cloud files: ["cloud_example1.mp3", "cloud_example2.mp4", "cloud_example3.jpg"]"#));
    assert!(output.contains("Rejected docs/readme.txt"));
}

#[test]
fn test_demo_reports_vehicle_scenarios() {
    let output = demo_output();

    assert!(output.contains("Fuel after moving 4: 2"));
    assert!(output.contains("Move of 2 refused: Not Enough Fuel: need 4 fuel, but only have 2"));
    assert!(output.contains("Empty vehicle refused to start: Low Fuel"));
    assert!(output.contains("Load of 50 refused: Cargo Overload: cannot load 50 cargo (current: 60, max: 100)"));
    assert!(output.contains("Unloaded cargo: 60"));
}

#[test]
fn test_facade_reexports() {
    use mediastore::{Media, MediaFileFactory, MediaOptions, MediaStorage, StorageConfig};

    let storage = StorageConfig::default().backend(None).unwrap();
    let file = storage.load("clips/intro.mov", 2_048).unwrap();
    let same = MediaFileFactory::create_from_path("clips/intro.mov", 2_048, MediaOptions::default())
        .unwrap();

    assert_eq!(file.media_type(), same.media_type());
    assert_eq!(file.name(), same.name());
}
