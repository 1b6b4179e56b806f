//! Per-session loop state.

use std::fmt;
use std::time::Duration;

/// Why a session ended without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The quit key was pressed
    QuitKey,
    /// Ctrl+C / SIGINT
    Interrupted,
    /// A configured frame budget was reached
    FrameLimit,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::QuitKey => write!(f, "quit requested"),
            StopReason::Interrupted => write!(f, "interrupted by user"),
            StopReason::FrameLimit => write!(f, "frame limit reached"),
        }
    }
}

/// Frame counter and timing for one run of the driver loop.
///
/// Times are offsets on the driver's [`Clock`](super::Clock), which keeps
/// the arithmetic independent of real time.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    frames: u64,
    started_at: Duration,
}

impl SessionState {
    pub fn new(started_at: Duration) -> Self {
        Self {
            frames: 0,
            started_at,
        }
    }

    pub fn record_frame(&mut self) {
        self.frames += 1;
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.started_at)
    }

    /// Average frames per second since the session started, or 0.0 if no
    /// time has passed.
    pub fn fps(&self, now: Duration) -> f64 {
        let secs = self.elapsed(now).as_secs_f64();
        if secs > 0.0 {
            self.frames as f64 / secs
        } else {
            0.0
        }
    }
}

/// What a finished session reports back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub frames: u64,
    pub fps: f64,
    pub reason: StopReason,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_zero_without_elapsed_time() {
        let mut state = SessionState::new(Duration::from_secs(5));
        state.record_frame();
        assert_eq!(state.fps(Duration::from_secs(5)), 0.0);
        assert_eq!(state.fps(Duration::from_secs(1)), 0.0);
    }

    #[test]
    fn test_fps_average() {
        let mut state = SessionState::new(Duration::from_secs(1));
        for _ in 0..30 {
            state.record_frame();
        }
        assert_eq!(state.frames(), 30);
        assert!((state.fps(Duration::from_secs(3)) - 15.0).abs() < f64::EPSILON);
    }
}
