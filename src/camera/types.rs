//! Camera types and data structures.

use std::fmt;

/// Information about an available camera device.
#[derive(Debug, Clone)]
pub struct CameraInfo {
    /// Device index for selection
    pub index: u32,
    /// Human-readable device name
    pub name: String,
    /// Device description
    pub description: String,
}

impl fmt::Display for CameraInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.index, self.name, self.description)
    }
}

/// Camera resolution settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Medium resolution (640x480) - what the capture backends request
    pub const MEDIUM: Resolution = Resolution {
        width: 640,
        height: 480,
    };

    /// Raw RGB frame size in bytes.
    pub fn frame_len(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::MEDIUM
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Channel order of a captured frame. Both orders use 3 bytes per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameFormat {
    Rgb,
    Bgr,
}

/// A captured camera frame.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Raw interleaved pixel data
    pub data: Vec<u8>,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Channel order
    pub format: FrameFormat,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, format: FrameFormat) -> Self {
        Self {
            data,
            width,
            height,
            format,
        }
    }

    /// Get the number of bytes per pixel (always 3).
    pub fn bytes_per_pixel(&self) -> usize {
        match self.format {
            FrameFormat::Rgb | FrameFormat::Bgr => 3,
        }
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// What to ask a capture backend for. Backends may deliver a different
/// resolution if the device cannot honour it.
#[derive(Debug, Clone)]
pub struct CameraSettings {
    pub device_index: u32,
    pub resolution: Resolution,
    pub fps: u32,
    /// Flip frames left-to-right before they leave the backend
    pub mirror: bool,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            device_index: 0,
            resolution: Resolution::default(),
            fps: 30,
            mirror: false,
        }
    }
}

/// Errors that can occur during camera operations.
#[derive(Debug)]
pub enum CameraError {
    /// FFmpeg executable not found
    FfmpegNotFound,
    /// Failed to query camera devices
    QueryFailed(String),
    /// Failed to open camera
    OpenFailed(String),
    /// Camera permission denied (macOS)
    PermissionDenied,
    /// Camera device not found at specified index
    DeviceNotFound(u32),
    /// Failed to start video stream
    StreamFailed(String),
    /// A frame read failed mid-stream
    ReadFailed(String),
    /// Backend not available on this platform or in this build
    Unsupported(String),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::FfmpegNotFound => write!(
                f,
                "FFmpeg not found. Install it (e.g. 'apt install ffmpeg' or 'brew install ffmpeg') or use --backend synthetic"
            ),
            CameraError::QueryFailed(msg) => write!(f, "Failed to query cameras: {}", msg),
            CameraError::OpenFailed(msg) => write!(f, "Failed to open camera: {}", msg),
            CameraError::PermissionDenied => {
                write!(
                    f,
                    "Camera permission denied. On macOS, grant access in System Settings > Privacy & Security > Camera"
                )
            }
            CameraError::DeviceNotFound(index) => {
                write!(
                    f,
                    "Camera device {} not found. Run 'list-cameras' to see available devices",
                    index
                )
            }
            CameraError::StreamFailed(msg) => write!(f, "Failed to start camera stream: {}", msg),
            CameraError::ReadFailed(msg) => write!(f, "Failed to read frame: {}", msg),
            CameraError::Unsupported(msg) => write!(f, "Camera backend unavailable: {}", msg),
        }
    }
}

impl std::error::Error for CameraError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_info_display() {
        let info = CameraInfo {
            index: 0,
            name: "Test Camera".to_string(),
            description: "/dev/video0".to_string(),
        };
        assert_eq!(format!("{}", info), "[0] Test Camera (/dev/video0)");
    }

    #[test]
    fn test_resolution_default_and_len() {
        let res = Resolution::default();
        assert_eq!(res, Resolution::MEDIUM);
        assert_eq!(res.frame_len(), 640 * 480 * 3);
        assert_eq!(res.to_string(), "640x480");
    }

    #[test]
    fn test_camera_settings_default() {
        let settings = CameraSettings::default();
        assert_eq!(settings.device_index, 0);
        assert_eq!(settings.resolution, Resolution::MEDIUM);
        assert_eq!(settings.fps, 30);
        assert!(!settings.mirror);
    }

    #[test]
    fn test_camera_error_display() {
        assert_eq!(
            format!("{}", CameraError::OpenFailed("test".to_string())),
            "Failed to open camera: test"
        );
        assert_eq!(
            format!("{}", CameraError::ReadFailed("eof".to_string())),
            "Failed to read frame: eof"
        );
        assert!(format!("{}", CameraError::PermissionDenied).contains("permission denied"));
        assert!(format!("{}", CameraError::DeviceNotFound(5)).contains("5"));
        assert!(format!("{}", CameraError::FfmpegNotFound).contains("FFmpeg not found"));
    }

    #[test]
    fn test_frame_bytes_per_pixel() {
        let frame = Frame::new(vec![0; 6], 2, 1, FrameFormat::Bgr);
        assert_eq!(frame.bytes_per_pixel(), 3);
        assert_eq!(frame.pixel_count(), 2);
    }
}
