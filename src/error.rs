//! Top-level error type and process exit codes.

use crate::ascii::ConvertError;
use crate::camera::CameraError;
use crate::config::ConfigError;
use crate::session::SessionError;

/// Exit code for a normal quit or a user interrupt.
pub const EXIT_OK: i32 = 0;
/// Exit code for every failure.
pub const EXIT_FAILURE: i32 = 1;

/// Anything that can stop the program before or during a session.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    InvalidInput(#[from] ConvertError),

    #[error(transparent)]
    Camera(#[from] CameraError),

    #[error("failed to install Ctrl+C handler: {0}")]
    Signal(#[from] ctrlc::Error),

    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }

    /// Headline printed before the error itself.
    pub fn headline(&self) -> &'static str {
        match self {
            AppError::Session(SessionError::CameraUnavailable(_)) => "ERROR: Could not open webcam.",
            AppError::Session(SessionError::FrameReadFailure { .. }) => {
                "ERROR: Failed to read frame from camera."
            }
            AppError::Session(SessionError::InvalidInput(_)) | AppError::InvalidInput(_) => {
                "ERROR: Invalid configuration."
            }
            AppError::Config(_) => "ERROR: Could not load configuration.",
            _ => "ERROR:",
        }
    }

    /// Remediation steps, where there are any worth suggesting.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            AppError::Session(SessionError::CameraUnavailable(_)) | AppError::Camera(_) => Some(
                "Troubleshooting:\n  \
                 * Check if webcam is connected\n  \
                 * On macOS: grant camera permissions in System Settings > Privacy & Security > Camera\n  \
                 * Try a different camera index (--camera 1), or run 'livecam-ascii list-cameras'\n  \
                 * Use --backend synthetic to check the terminal output without a camera",
            ),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_unavailable_has_hint() {
        let err = AppError::from(SessionError::CameraUnavailable(CameraError::DeviceNotFound(3)));
        assert_eq!(err.exit_code(), EXIT_FAILURE);
        assert_eq!(err.headline(), "ERROR: Could not open webcam.");
        assert!(err.hint().unwrap().contains("different camera index"));
        assert!(err.to_string().contains("Camera device 3 not found"));
    }

    #[test]
    fn test_read_failure_headline() {
        let err = AppError::from(SessionError::FrameReadFailure {
            frames: 4,
            reason: "no frame available".to_string(),
        });
        assert_eq!(err.headline(), "ERROR: Failed to read frame from camera.");
        assert!(err.hint().is_none());
    }

    #[test]
    fn test_invalid_input_headline() {
        let err = AppError::from(ConvertError::EmptyRamp);
        assert_eq!(err.headline(), "ERROR: Invalid configuration.");
    }
}
