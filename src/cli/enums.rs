//! CLI enum types for ramp and backend options.

use clap::ValueEnum;

use crate::ascii::RampName;
use crate::camera::CameraBackend;

/// ASCII character ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CharacterSet {
    /// `@%#*+=-:. `
    #[default]
    Standard,
    /// `@#$%&*+=-:. `
    Dense,
    /// ` .:-=+*#%@`
    Light,
    /// `@. `
    Minimal,
}

impl From<CharacterSet> for RampName {
    fn from(c: CharacterSet) -> Self {
        match c {
            CharacterSet::Standard => RampName::Standard,
            CharacterSet::Dense => RampName::Dense,
            CharacterSet::Light => RampName::Light,
            CharacterSet::Minimal => RampName::Minimal,
        }
    }
}

/// Frame capture backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Backend {
    /// ffmpeg subprocess (v4l2 / avfoundation)
    #[default]
    Ffmpeg,
    /// nokhwa (requires the native-camera build feature)
    Native,
    /// Generated test pattern, no camera needed
    Synthetic,
}

impl From<Backend> for CameraBackend {
    fn from(b: Backend) -> Self {
        match b {
            Backend::Ffmpeg => CameraBackend::Ffmpeg,
            Backend::Native => CameraBackend::Native,
            Backend::Synthetic => CameraBackend::Synthetic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_to_ramp_name() {
        assert_eq!(RampName::from(CharacterSet::Standard), RampName::Standard);
        assert_eq!(RampName::from(CharacterSet::Dense), RampName::Dense);
        assert_eq!(RampName::from(CharacterSet::Light), RampName::Light);
        assert_eq!(RampName::from(CharacterSet::Minimal), RampName::Minimal);
    }

    #[test]
    fn test_backend_to_camera_backend() {
        assert_eq!(CameraBackend::from(Backend::Ffmpeg), CameraBackend::Ffmpeg);
        assert_eq!(CameraBackend::from(Backend::Native), CameraBackend::Native);
        assert_eq!(
            CameraBackend::from(Backend::Synthetic),
            CameraBackend::Synthetic
        );
    }
}
