//! Camera capture through an `ffmpeg` subprocess.
//!
//! FFmpeg reads the platform capture device and writes raw `rgb24` frames
//! of a fixed size to stdout, so every frame is exactly
//! `width * height * 3` bytes.

use std::io::{BufRead, BufReader, ErrorKind, Read};
use std::path::Path;
use std::process::{Child, ChildStdout, Command, Stdio};
use std::thread::{self, JoinHandle};

use super::frame_utils::mirror_horizontal;
use super::source::FrameSource;
use super::types::{CameraError, CameraSettings, Frame, FrameFormat, Resolution};

/// Build the ffmpeg arguments for the current platform.
///
/// # Errors
/// * `CameraError::Unsupported` - no known capture input on this OS
pub fn capture_args(settings: &CameraSettings) -> Result<Vec<String>, CameraError> {
    let size = settings.resolution.to_string();
    let fps = settings.fps.to_string();

    let mut args: Vec<String> = vec!["-hide_banner".into(), "-loglevel".into(), "error".into()];

    if cfg!(target_os = "linux") {
        args.extend([
            "-f".into(),
            "v4l2".into(),
            "-framerate".into(),
            fps,
            "-video_size".into(),
            size.clone(),
            "-i".into(),
            format!("/dev/video{}", settings.device_index),
        ]);
    } else if cfg!(target_os = "macos") {
        args.extend([
            "-f".into(),
            "avfoundation".into(),
            "-framerate".into(),
            fps,
            "-video_size".into(),
            size.clone(),
            "-i".into(),
            format!("{}:none", settings.device_index),
        ]);
    } else {
        return Err(CameraError::Unsupported(
            "ffmpeg capture is only wired up for Linux (v4l2) and macOS (avfoundation)"
                .to_string(),
        ));
    }

    // Output: fixed-size raw frames on stdout, with low-latency flags
    args.extend([
        "-an".into(),
        "-s".into(),
        size,
        "-f".into(),
        "rawvideo".into(),
        "-pix_fmt".into(),
        "rgb24".into(),
        "-fflags".into(),
        "nobuffer".into(),
        "-flags".into(),
        "low_delay".into(),
        "pipe:1".into(),
    ]);

    Ok(args)
}

/// A running ffmpeg capture process.
pub struct FfmpegCamera {
    child: Option<Child>,
    stdout: Option<BufReader<ChildStdout>>,
    stderr_thread: Option<JoinHandle<Vec<String>>>,
    resolution: Resolution,
    mirror: bool,
    /// First frame, read during `open` to prove the device works
    primed: Option<Frame>,
}

impl std::fmt::Debug for FfmpegCamera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FfmpegCamera")
            .field("resolution", &self.resolution)
            .field("running", &self.child.is_some())
            .finish_non_exhaustive()
    }
}

impl FfmpegCamera {
    /// Spawn ffmpeg and wait for the first frame.
    ///
    /// # Errors
    /// * `CameraError::DeviceNotFound` - no `/dev/videoN` node (Linux)
    /// * `CameraError::FfmpegNotFound` - ffmpeg is not on `PATH`
    /// * `CameraError::OpenFailed` - ffmpeg started but produced no frame
    /// * `CameraError::Unsupported` - unsupported platform
    pub fn open(settings: &CameraSettings) -> Result<Self, CameraError> {
        let args = capture_args(settings)?;
        if cfg!(target_os = "linux")
            && !Path::new(&format!("/dev/video{}", settings.device_index)).exists()
        {
            return Err(CameraError::DeviceNotFound(settings.device_index));
        }
        log::debug!("Spawning ffmpeg {}", args.join(" "));

        let mut child = Command::new("ffmpeg")
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    CameraError::FfmpegNotFound
                } else {
                    CameraError::OpenFailed(format!("failed to spawn ffmpeg: {}", e))
                }
            })?;

        let stdout = child.stdout.take().map(|out| {
            BufReader::with_capacity(settings.resolution.frame_len(), out)
        });

        // Drain stderr so ffmpeg never blocks on a full pipe
        let stderr_thread = child.stderr.take().map(|stderr| {
            thread::spawn(move || {
                let mut lines = Vec::new();
                for line in BufReader::new(stderr).lines() {
                    match line {
                        Ok(l) => {
                            log::debug!("[ffmpeg] {}", l);
                            lines.push(l);
                        }
                        Err(_) => break,
                    }
                }
                lines
            })
        });

        let mut camera = Self {
            child: Some(child),
            stdout,
            stderr_thread,
            resolution: settings.resolution,
            mirror: settings.mirror,
            primed: None,
        };

        match camera.read_raw() {
            Ok(Some(frame)) => {
                camera.primed = Some(frame);
                Ok(camera)
            }
            Ok(None) => {
                let detail = camera.shutdown();
                Err(CameraError::OpenFailed(if detail.is_empty() {
                    format!("no frames from camera {}", settings.device_index)
                } else {
                    detail
                }))
            }
            Err(e) => {
                camera.shutdown();
                Err(e)
            }
        }
    }

    fn read_raw(&mut self) -> Result<Option<Frame>, CameraError> {
        let Some(reader) = self.stdout.as_mut() else {
            return Ok(None);
        };

        let mut data = vec![0u8; self.resolution.frame_len()];
        match reader.read_exact(&mut data) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(None),
            Err(e) => return Err(CameraError::ReadFailed(e.to_string())),
        }

        let mut frame = Frame::new(
            data,
            self.resolution.width,
            self.resolution.height,
            FrameFormat::Rgb,
        );
        if self.mirror {
            mirror_horizontal(&mut frame);
        }
        Ok(Some(frame))
    }

    /// Kill ffmpeg and collect its last stderr line.
    fn shutdown(&mut self) -> String {
        self.stdout = None;
        if let Some(mut child) = self.child.take() {
            // Already-exited processes report an error here; that's fine.
            let _ = child.kill();
            let _ = child.wait();
        }
        self.stderr_thread
            .take()
            .and_then(|h| h.join().ok())
            .and_then(|lines| lines.last().cloned())
            .unwrap_or_default()
    }
}

impl FrameSource for FfmpegCamera {
    fn read(&mut self) -> Result<Option<Frame>, CameraError> {
        if let Some(frame) = self.primed.take() {
            return Ok(Some(frame));
        }
        self.read_raw()
    }

    fn release(&mut self) {
        if self.child.is_some() {
            let last = self.shutdown();
            log::info!("ffmpeg capture stopped");
            if !last.is_empty() {
                log::debug!("ffmpeg last message: {}", last);
            }
        }
    }

    fn describe(&self) -> String {
        format!("ffmpeg capture {}", self.resolution)
    }
}

impl Drop for FfmpegCamera {
    fn drop(&mut self) {
        self.release();
    }
}
