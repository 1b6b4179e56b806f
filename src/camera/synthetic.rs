//! Generated frames for demos and tests.

use super::frame_utils::mirror_horizontal;
use super::source::FrameSource;
use super::types::{CameraError, CameraSettings, Frame, FrameFormat, Resolution};

/// A moving diagonal gradient, no hardware involved.
///
/// Every read shifts the gradient a few steps so the rendered output
/// visibly animates. With a frame limit set, reads past the limit report
/// no frame, which exercises the driver's read-failure path.
#[derive(Debug)]
pub struct SyntheticCamera {
    resolution: Resolution,
    mirror: bool,
    tick: u64,
    frame_limit: Option<u64>,
    released: bool,
}

impl SyntheticCamera {
    pub fn open(settings: &CameraSettings) -> Self {
        Self {
            resolution: settings.resolution,
            mirror: settings.mirror,
            tick: 0,
            frame_limit: None,
            released: false,
        }
    }

    /// Stop producing frames after `limit` reads.
    pub fn with_frame_limit(mut self, limit: u64) -> Self {
        self.frame_limit = Some(limit);
        self
    }

    pub fn frames_produced(&self) -> u64 {
        self.tick
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    fn render(&self) -> Frame {
        let w = self.resolution.width.max(1) as u64;
        let h = self.resolution.height.max(1) as u64;
        let span = w + h;
        let shift = self.tick * 8;

        let mut data = Vec::with_capacity(self.resolution.frame_len());
        for y in 0..h {
            for x in 0..w {
                let v = (((x + y + shift) % span) * 255 / span) as u8;
                data.extend_from_slice(&[v, v, v]);
            }
        }

        Frame::new(data, w as u32, h as u32, FrameFormat::Rgb)
    }
}

impl FrameSource for SyntheticCamera {
    fn read(&mut self) -> Result<Option<Frame>, CameraError> {
        if self.released {
            return Err(CameraError::ReadFailed("source already released".to_string()));
        }
        if self.frame_limit.is_some_and(|limit| self.tick >= limit) {
            return Ok(None);
        }

        let mut frame = self.render();
        if self.mirror {
            mirror_horizontal(&mut frame);
        }
        self.tick += 1;
        Ok(Some(frame))
    }

    fn release(&mut self) {
        if !self.released {
            log::debug!("Synthetic source released after {} frames", self.tick);
            self.released = true;
        }
    }

    fn describe(&self) -> String {
        format!("synthetic gradient {}", self.resolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> CameraSettings {
        CameraSettings {
            resolution: Resolution {
                width: 8,
                height: 4,
            },
            ..CameraSettings::default()
        }
    }

    #[test]
    fn test_frames_animate() {
        let mut cam = SyntheticCamera::open(&small());
        let a = cam.read().unwrap().unwrap();
        let b = cam.read().unwrap().unwrap();
        assert_eq!(a.data.len(), 8 * 4 * 3);
        assert_ne!(a.data, b.data);
        assert_eq!(cam.frames_produced(), 2);
    }

    #[test]
    fn test_frame_limit_reports_no_frame() {
        let mut cam = SyntheticCamera::open(&small()).with_frame_limit(1);
        assert!(cam.read().unwrap().is_some());
        assert!(cam.read().unwrap().is_none());
    }

    #[test]
    fn test_read_after_release_fails() {
        let mut cam = SyntheticCamera::open(&small());
        cam.release();
        cam.release();
        assert!(cam.is_released());
        assert!(matches!(cam.read(), Err(CameraError::ReadFailed(_))));
    }
}
