//! Frame source capability and backend selection.

use std::fmt;
use std::str::FromStr;

use super::ffmpeg::FfmpegCamera;
use super::synthetic::SyntheticCamera;
use super::types::{CameraError, CameraSettings, Frame};

/// Something that produces frames on demand.
///
/// Opening is backend-specific (each backend has its own constructor that
/// fails with a [`CameraError`]); once open, the driver only needs these
/// two operations.
pub trait FrameSource {
    /// Grab the next frame.
    ///
    /// Returns `Ok(None)` when the source has no frame to give (stream
    /// ended, device unplugged). Errors are reserved for read failures the
    /// backend can describe.
    fn read(&mut self) -> Result<Option<Frame>, CameraError>;

    /// Release the underlying device.
    ///
    /// Must be idempotent: calling it twice, or after a partially failed
    /// open, is a no-op.
    fn release(&mut self);

    /// Short human-readable description for logs.
    fn describe(&self) -> String {
        "frame source".to_string()
    }
}

impl<S: FrameSource + ?Sized> FrameSource for Box<S> {
    fn read(&mut self) -> Result<Option<Frame>, CameraError> {
        (**self).read()
    }

    fn release(&mut self) {
        (**self).release()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Which capture implementation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraBackend {
    /// `ffmpeg` subprocess reading the platform capture device
    #[default]
    Ffmpeg,
    /// nokhwa, when built with the `native-camera` feature
    Native,
    /// Generated test pattern, no hardware needed
    Synthetic,
}

impl CameraBackend {
    pub const ALL: [CameraBackend; 3] = [
        CameraBackend::Ffmpeg,
        CameraBackend::Native,
        CameraBackend::Synthetic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CameraBackend::Ffmpeg => "ffmpeg",
            CameraBackend::Native => "native",
            CameraBackend::Synthetic => "synthetic",
        }
    }

    /// Open a frame source with this backend.
    ///
    /// # Errors
    /// Any [`CameraError`] the backend reports while acquiring the device.
    pub fn open(&self, settings: &CameraSettings) -> Result<Box<dyn FrameSource>, CameraError> {
        log::info!(
            "Opening camera {} with {} backend at {}",
            settings.device_index,
            self.name(),
            settings.resolution
        );
        match self {
            CameraBackend::Ffmpeg => Ok(Box::new(FfmpegCamera::open(settings)?)),
            CameraBackend::Synthetic => Ok(Box::new(SyntheticCamera::open(settings))),
            CameraBackend::Native => open_native(settings),
        }
    }
}

#[cfg(feature = "native-camera")]
fn open_native(settings: &CameraSettings) -> Result<Box<dyn FrameSource>, CameraError> {
    Ok(Box::new(super::native::NativeCamera::open(settings)?))
}

#[cfg(not(feature = "native-camera"))]
fn open_native(_settings: &CameraSettings) -> Result<Box<dyn FrameSource>, CameraError> {
    Err(CameraError::Unsupported(
        "this build has no native camera support (rebuild with --features native-camera)"
            .to_string(),
    ))
}

impl fmt::Display for CameraBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CameraBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        CameraBackend::ALL
            .into_iter()
            .find(|b| b.name() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown camera backend '{}' (available: ffmpeg, native, synthetic)",
                    s
                )
            })
    }
}
