//! End-to-end tests for camera capture.
//!
//! These verify that:
//! - Device enumeration works with or without hardware
//! - A real camera, when present, delivers correctly sized frames
//! - A missing camera is reported as an error instead of hanging

use livecam_ascii::camera::{list_devices, CameraBackend, CameraSettings, FrameSource};
use std::time::Instant;

/// Test that list_devices returns devices (or empty list) without error.
#[test]
fn test_list_devices_succeeds() {
    let result = list_devices();
    assert!(
        result.is_ok(),
        "list_devices should not error: {:?}",
        result.err()
    );

    let devices = result.unwrap();
    println!("Found {} camera device(s)", devices.len());
    for device in &devices {
        println!("  {}", device);
    }
}

/// Test that the default backend captures frames of the requested size.
/// This test requires a camera and ffmpeg to be available.
#[test]
fn test_default_backend_captures_frames() {
    let devices = list_devices().unwrap_or_default();
    if devices.is_empty() {
        println!("SKIP: No cameras available for this test");
        return;
    }

    let settings = CameraSettings::default();
    let mut source = match CameraBackend::default().open(&settings) {
        Ok(source) => source,
        Err(e) => {
            println!("SKIP: Camera could not be opened: {}", e);
            return;
        }
    };
    println!("Opened {}", source.describe());

    let start = Instant::now();
    let mut frames = 0;
    for _ in 0..10 {
        let frame = source
            .read()
            .expect("read should not error")
            .expect("camera should keep producing frames");
        assert_eq!(frame.width, settings.resolution.width);
        assert_eq!(frame.height, settings.resolution.height);
        assert_eq!(frame.data.len(), settings.resolution.frame_len());
        frames += 1;
    }
    let elapsed = start.elapsed();
    println!(
        "Captured {} frames in {:?} ({:.1} fps)",
        frames,
        elapsed,
        frames as f64 / elapsed.as_secs_f64()
    );

    source.release();
}

/// Test that opening a camera index that cannot exist fails cleanly.
#[test]
fn test_missing_camera_is_error() {
    let settings = CameraSettings {
        device_index: 99,
        ..CameraSettings::default()
    };

    let result = CameraBackend::default().open(&settings);
    match result {
        Ok(_) => panic!("camera 99 should not open"),
        Err(e) => println!("Got expected error: {}", e),
    }
}
