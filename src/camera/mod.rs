//! Camera capture: frame sources and device enumeration.
//!
//! - Capture backends behind the [`FrameSource`] trait, chosen with
//!   [`CameraBackend`]
//! - Device enumeration via [`list_devices`]
//! - Configuration via [`CameraSettings`] and [`Resolution`]

mod device;
mod ffmpeg;
mod frame_utils;
#[cfg(feature = "native-camera")]
mod native;
mod source;
mod synthetic;
mod types;

pub use device::list_devices;
pub use ffmpeg::{capture_args, FfmpegCamera};
pub use frame_utils::mirror_horizontal;
#[cfg(feature = "native-camera")]
pub use native::NativeCamera;
pub use source::{CameraBackend, FrameSource};
pub use synthetic::SyntheticCamera;
pub use types::{CameraError, CameraInfo, CameraSettings, Frame, FrameFormat, Resolution};
