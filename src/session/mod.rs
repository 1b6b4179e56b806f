//! Driver loop orchestration.
//!
//! The loop owns no global state: frame count and timing live in a
//! [`SessionState`] value, time comes from a [`Clock`], quit requests from
//! a [`QuitSignal`], and frames from any [`FrameSource`](crate::camera::FrameSource).
//! That keeps it testable without a camera or real delays.

mod clock;
mod driver;
mod quit;
mod state;

pub use clock::{Clock, ManualClock, Pacer, SystemClock, DEFAULT_FRAME_INTERVAL};
pub use driver::{launch, run_loop, SessionConfig, SessionError, BANNER_PAUSE};
pub use quit::{InterruptFlag, QuitSignal, QuitSignals};
pub use state::{SessionState, SessionSummary, StopReason};
