//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use super::enums::{Backend, CharacterSet};
use crate::config::Settings;

/// Render a live webcam feed as ASCII art in the terminal
#[derive(Parser, Debug)]
#[command(name = "livecam-ascii")]
#[command(version, about = "Real-time webcam to ASCII art converter", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output width in characters [default: 120]
    #[arg(long, short = 'W', value_parser = clap::value_parser!(u16).range(1..))]
    pub width: Option<u16>,

    /// Output height in characters [default: 60]
    #[arg(long, short = 'H', value_parser = clap::value_parser!(u16).range(1..))]
    pub height: Option<u16>,

    /// Character ramp [default: standard]
    #[arg(long, short, alias = "charset")]
    pub ramp: Option<CharacterSet>,

    /// Reverse the ramp (for light terminals)
    #[arg(long, short)]
    pub invert: bool,

    /// Camera device index (from list-cameras) [default: 0]
    #[arg(long, short)]
    pub camera: Option<u32>,

    /// Capture backend [default: ffmpeg]
    #[arg(long, short)]
    pub backend: Option<Backend>,

    /// Mirror camera horizontally
    #[arg(long)]
    pub mirror: bool,

    /// Pause between frames in milliseconds [default: 33]
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available cameras
    ListCameras,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show the resolved configuration
    Show,
    /// Create default config file
    Init,
}

impl Args {
    /// Override config-derived settings with anything given on the
    /// command line. Flags can only switch features on.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(ramp) = self.ramp {
            settings.ramp = ramp.into();
        }
        if self.invert {
            settings.invert = true;
        }
        if let Some(device) = self.camera {
            settings.device = device;
        }
        if let Some(backend) = self.backend {
            settings.backend = backend.into();
        }
        if self.mirror {
            settings.mirror = true;
        }
        if let Some(ms) = self.interval_ms {
            settings.frame_interval = Duration::from_millis(ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::RampName;
    use crate::camera::CameraBackend;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["livecam-ascii"]);
        assert!(args.width.is_none());
        assert!(args.height.is_none());
        assert!(args.ramp.is_none());
        assert!(!args.invert);
        assert!(args.camera.is_none());
        assert!(args.backend.is_none());
        assert!(!args.mirror);
        assert!(args.config.is_none());
        assert!(args.command.is_none());
    }

    #[test]
    fn test_defaults_leave_settings_untouched() {
        let args = Args::parse_from(["livecam-ascii"]);
        let mut settings = Settings::default();
        args.apply(&mut settings);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_args_override_settings() {
        let args = Args::parse_from([
            "livecam-ascii",
            "--width",
            "80",
            "-H",
            "24",
            "--ramp",
            "minimal",
            "--invert",
            "--backend",
            "synthetic",
            "--camera",
            "1",
            "--interval-ms",
            "50",
        ]);
        let mut settings = Settings::default();
        args.apply(&mut settings);
        assert_eq!(settings.width, 80);
        assert_eq!(settings.height, 24);
        assert_eq!(settings.ramp, RampName::Minimal);
        assert!(settings.invert);
        assert_eq!(settings.backend, CameraBackend::Synthetic);
        assert_eq!(settings.device, 1);
        assert_eq!(settings.frame_interval, Duration::from_millis(50));
    }

    #[test]
    fn test_charset_alias() {
        let args = Args::parse_from(["livecam-ascii", "--charset", "dense"]);
        assert_eq!(args.ramp, Some(CharacterSet::Dense));
    }

    #[test]
    fn test_zero_width_rejected() {
        assert!(Args::try_parse_from(["livecam-ascii", "--width", "0"]).is_err());
    }

    #[test]
    fn test_unknown_ramp_rejected() {
        assert!(Args::try_parse_from(["livecam-ascii", "--ramp", "braille"]).is_err());
    }

    #[test]
    fn test_subcommands() {
        let args = Args::parse_from(["livecam-ascii", "list-cameras"]);
        assert!(matches!(args.command, Some(Command::ListCameras)));

        let args = Args::parse_from(["livecam-ascii", "config", "init"]);
        assert!(matches!(
            args.command,
            Some(Command::Config {
                action: ConfigAction::Init
            })
        ));
    }
}
