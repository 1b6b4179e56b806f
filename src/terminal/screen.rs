//! Full-screen frame output: clear, draw the art, draw the status line.

use std::io::{self, Write};

use crate::ascii::Ramp;

/// Clear the whole screen and home the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Width of the rule printed above the status line and around the banner.
pub const RULE_WIDTH: usize = 60;

/// Status text shown under every frame.
pub fn format_status(fps: f64, frames: u64) -> String {
    format!("FPS: {:.1} | Frames: {} | Press 'q' to quit", fps, frames)
}

/// Startup details shown before the first frame.
#[derive(Debug, Clone)]
pub struct BannerInfo<'a> {
    pub width: u16,
    pub height: u16,
    pub ramp: &'a Ramp,
    pub inverted: bool,
    pub source: String,
}

/// Writes frames to a terminal-like sink.
///
/// Lines end in `\r\n` so output lines up whether or not the terminal is
/// in raw mode.
#[derive(Debug)]
pub struct Screen<W: Write> {
    out: W,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.write_all(b"\r\n")
    }

    fn rule(&mut self, c: char) -> io::Result<()> {
        let rule: String = std::iter::repeat(c).take(RULE_WIDTH).collect();
        self.line(&rule)
    }

    pub fn clear(&mut self) -> io::Result<()> {
        self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        self.out.flush()
    }

    /// Replace the screen contents with one rendered frame and its status.
    pub fn draw_frame(&mut self, art: &str, status: &str) -> io::Result<()> {
        self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        for row in art.split('\n') {
            self.line(row)?;
        }
        self.line("")?;
        self.rule('-')?;
        self.line(status)?;
        self.out.flush()
    }

    /// Title, settings and key help, shown once at startup.
    pub fn draw_banner(&mut self, info: &BannerInfo<'_>) -> io::Result<()> {
        self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        self.rule('=')?;
        self.line("  livecam-ascii: real-time webcam to text art")?;
        self.rule('=')?;
        self.line(&format!(
            "Resolution: {}x{} characters",
            info.width, info.height
        ))?;
        self.line(&format!("Character set: \"{}\"", info.ramp))?;
        self.line(&format!("Inverted: {}", info.inverted))?;
        self.line(&format!("Source: {}", info.source))?;
        self.line("")?;
        self.line("Instructions:")?;
        self.line("  * Press 'q' (or Esc, or Ctrl+C) to quit")?;
        self.line("  * Resize terminal for best viewing experience")?;
        self.line("  * Larger terminal = better detail")?;
        self.rule('=')?;
        self.line("")?;
        self.line("Starting camera...")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::RampName;

    #[test]
    fn test_format_status() {
        assert_eq!(
            format_status(29.96, 120),
            "FPS: 30.0 | Frames: 120 | Press 'q' to quit"
        );
    }

    #[test]
    fn test_draw_frame_layout() {
        let mut screen = Screen::new(Vec::new());
        screen.draw_frame("ab\ncd", "status").unwrap();
        let out = String::from_utf8(screen.into_inner()).unwrap();

        let expected = format!(
            "{}ab\r\ncd\r\n\r\n{}\r\nstatus\r\n",
            CLEAR_SCREEN,
            "-".repeat(RULE_WIDTH)
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_banner_mentions_settings() {
        let ramp = Ramp::named(RampName::Minimal);
        let mut screen = Screen::new(Vec::new());
        screen
            .draw_banner(&BannerInfo {
                width: 120,
                height: 60,
                ramp: &ramp,
                inverted: true,
                source: "synthetic gradient 640x480".to_string(),
            })
            .unwrap();
        let out = String::from_utf8(screen.into_inner()).unwrap();
        assert!(out.contains("Resolution: 120x60 characters"));
        assert!(out.contains("Character set: \"@. \""));
        assert!(out.contains("Inverted: true"));
        assert!(out.contains("Press 'q'"));
    }
}
