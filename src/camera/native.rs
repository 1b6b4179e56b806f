//! nokhwa-backed capture (feature `native-camera`).

use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{
    CameraFormat, CameraIndex, FrameFormat as NokhwaFrameFormat, RequestedFormat,
    RequestedFormatType,
};
use nokhwa::Camera;

use super::frame_utils::mirror_horizontal;
use super::source::FrameSource;
use super::types::{CameraError, CameraSettings, Frame, FrameFormat, Resolution};

/// Synchronous nokhwa camera: one `frame()` call per read.
pub struct NativeCamera {
    camera: Option<Camera>,
    resolution: Resolution,
    mirror: bool,
}

impl NativeCamera {
    /// Open the device and start its stream.
    ///
    /// # Errors
    /// * `CameraError::PermissionDenied` - access denied by the OS
    /// * `CameraError::OpenFailed` - no format could be negotiated
    /// * `CameraError::StreamFailed` - the stream refused to start
    pub fn open(settings: &CameraSettings) -> Result<Self, CameraError> {
        let index = CameraIndex::Index(settings.device_index);
        let mut camera = open_camera_with_fallback(&index, settings)?;

        camera
            .open_stream()
            .map_err(|e| CameraError::StreamFailed(e.to_string()))?;

        let res = camera.resolution();
        let resolution = Resolution {
            width: res.width(),
            height: res.height(),
        };
        log::info!(
            "Native camera streaming at {} ({} fps)",
            resolution,
            camera.frame_rate()
        );

        Ok(Self {
            camera: Some(camera),
            resolution,
            mirror: settings.mirror,
        })
    }
}

/// Try NV12, then MJPEG, then whatever the camera offers at its highest
/// resolution.
fn open_camera_with_fallback(
    index: &CameraIndex,
    settings: &CameraSettings,
) -> Result<Camera, CameraError> {
    let wanted = nokhwa::utils::Resolution::new(settings.resolution.width, settings.resolution.height);
    let format_attempts = [
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(CameraFormat::new(
            wanted,
            NokhwaFrameFormat::NV12,
            settings.fps,
        ))),
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(CameraFormat::new(
            wanted,
            NokhwaFrameFormat::MJPEG,
            settings.fps,
        ))),
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution),
    ];

    let mut last_error = String::from("no camera formats attempted");
    for requested in format_attempts {
        match Camera::new(index.clone(), requested) {
            Ok(cam) => return Ok(cam),
            Err(e) => {
                log::debug!("Camera format attempt failed: {}", e);
                last_error = e.to_string();
            }
        }
    }

    let msg = last_error.to_lowercase();
    if msg.contains("permission") || msg.contains("denied") || msg.contains("authorization") {
        Err(CameraError::PermissionDenied)
    } else {
        Err(CameraError::OpenFailed(last_error))
    }
}

impl FrameSource for NativeCamera {
    fn read(&mut self) -> Result<Option<Frame>, CameraError> {
        let Some(camera) = self.camera.as_mut() else {
            return Ok(None);
        };

        let buffer = camera
            .frame()
            .map_err(|e| CameraError::ReadFailed(e.to_string()))?;
        let resolution = buffer.resolution();
        let decoded = buffer
            .decode_image::<RgbFormat>()
            .map_err(|e| CameraError::ReadFailed(e.to_string()))?;

        let mut frame = Frame::new(
            decoded.into_raw(),
            resolution.width(),
            resolution.height(),
            FrameFormat::Rgb,
        );
        if self.mirror {
            mirror_horizontal(&mut frame);
        }
        Ok(Some(frame))
    }

    fn release(&mut self) {
        if let Some(mut camera) = self.camera.take() {
            if let Err(e) = camera.stop_stream() {
                log::warn!("Failed to stop camera stream: {}", e);
            }
        }
    }

    fn describe(&self) -> String {
        format!("native camera {}", self.resolution)
    }
}

impl Drop for NativeCamera {
    fn drop(&mut self) {
        self.release();
    }
}
