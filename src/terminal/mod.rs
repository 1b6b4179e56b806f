//! Terminal management: raw mode, keyboard quit, and full-screen output.

mod input;
mod raw_mode;
mod screen;

pub use input::{quit_reason_for_key, KeyboardQuit};
pub use raw_mode::RawModeGuard;
pub use screen::{format_status, BannerInfo, Screen, CLEAR_SCREEN, RULE_WIDTH};
