//! The capture -> convert -> print -> pace -> check-quit loop.

use std::io::{self, Write};
use std::time::Duration;

use crate::ascii::{AsciiConverter, ConvertError};
use crate::camera::{CameraError, FrameSource};
use crate::terminal::{format_status, BannerInfo, Screen};

use super::clock::{Clock, Pacer};
use super::quit::QuitSignal;
use super::state::{SessionState, SessionSummary, StopReason};

/// How long the startup banner stays up before the first frame.
pub const BANNER_PAUSE: Duration = Duration::from_secs(1);

/// Errors that end a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("camera unavailable: {0}")]
    CameraUnavailable(#[source] CameraError),

    #[error("failed to read frame from camera after {frames} frame(s): {reason}")]
    FrameReadFailure { frames: u64, reason: String },

    #[error("invalid input: {0}")]
    InvalidInput(#[from] ConvertError),

    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Fixed parameters of one driver run.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    width: u16,
    height: u16,
    pacer: Pacer,
    show_banner: bool,
    max_frames: Option<u64>,
}

impl SessionConfig {
    /// # Errors
    /// * `ConvertError::InvalidDimensions` - width or height is zero
    pub fn new(width: u16, height: u16) -> Result<Self, ConvertError> {
        if width == 0 || height == 0 {
            return Err(ConvertError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            pacer: Pacer::default(),
            show_banner: false,
            max_frames: None,
        })
    }

    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.pacer = Pacer::new(interval);
        self
    }

    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Stop cleanly after this many rendered frames.
    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn frame_interval(&self) -> Duration {
        self.pacer.interval()
    }
}

/// Open a source and run the loop until quit or failure.
///
/// If `open` fails the error comes back as
/// [`SessionError::CameraUnavailable`] and nothing is converted or drawn.
/// Otherwise the source is released before returning, whatever the outcome.
pub fn launch<S, F, C, W, Q>(
    open: F,
    converter: &mut AsciiConverter,
    config: &SessionConfig,
    clock: &mut C,
    screen: &mut Screen<W>,
    quit: &mut Q,
) -> Result<SessionSummary, SessionError>
where
    S: FrameSource,
    F: FnOnce() -> Result<S, CameraError>,
    C: Clock,
    W: Write,
    Q: QuitSignal + ?Sized,
{
    let mut source = open().map_err(|e| {
        log::error!("Could not open camera: {}", e);
        SessionError::CameraUnavailable(e)
    })?;
    log::info!("Capturing from {}", source.describe());

    let result = start(&mut source, converter, config, clock, screen, quit);
    source.release();

    match &result {
        Ok(summary) => log::info!(
            "Session ended ({}) after {} frames at {:.1} fps",
            summary.reason,
            summary.frames,
            summary.fps
        ),
        Err(e) => log::error!("Session failed: {}", e),
    }
    result
}

fn start<S, C, W, Q>(
    source: &mut S,
    converter: &mut AsciiConverter,
    config: &SessionConfig,
    clock: &mut C,
    screen: &mut Screen<W>,
    quit: &mut Q,
) -> Result<SessionSummary, SessionError>
where
    S: FrameSource + ?Sized,
    C: Clock,
    W: Write,
    Q: QuitSignal + ?Sized,
{
    if config.show_banner {
        screen.draw_banner(&BannerInfo {
            width: config.width,
            height: config.height,
            ramp: converter.ramp(),
            inverted: converter.is_inverted(),
            source: source.describe(),
        })?;
        clock.sleep(BANNER_PAUSE);
    }
    run_loop(source, converter, config, clock, screen, quit)
}

/// Run the frame loop on an already-open source.
///
/// Each iteration: read a frame, convert it, redraw the screen with a
/// status line, sleep the pacing interval, then check for quit. The first
/// missing frame or read error ends the loop.
pub fn run_loop<S, C, W, Q>(
    source: &mut S,
    converter: &mut AsciiConverter,
    config: &SessionConfig,
    clock: &mut C,
    screen: &mut Screen<W>,
    quit: &mut Q,
) -> Result<SessionSummary, SessionError>
where
    S: FrameSource + ?Sized,
    C: Clock,
    W: Write,
    Q: QuitSignal + ?Sized,
{
    let mut state = SessionState::new(clock.now());

    let reason = loop {
        let frame = match source.read() {
            Ok(Some(frame)) => frame,
            Ok(None) => {
                return Err(SessionError::FrameReadFailure {
                    frames: state.frames(),
                    reason: "no frame available".to_string(),
                })
            }
            Err(e) => {
                return Err(SessionError::FrameReadFailure {
                    frames: state.frames(),
                    reason: e.to_string(),
                })
            }
        };

        let art = converter.frame_to_ascii(&frame, config.width, config.height)?;
        drop(frame);

        state.record_frame();
        let status = format_status(state.fps(clock.now()), state.frames());
        screen.draw_frame(&art, &status)?;

        config.pacer.pause(clock);

        if let Some(reason) = quit.should_quit() {
            break reason;
        }
        if config.max_frames.is_some_and(|max| state.frames() >= max) {
            break StopReason::FrameLimit;
        }
    };

    let now = clock.now();
    Ok(SessionSummary {
        frames: state.frames(),
        fps: state.fps(now),
        reason,
    })
}
