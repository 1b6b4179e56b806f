//! Subcommand handlers for list-cameras and config actions.

use std::path::{Path, PathBuf};

use crate::camera::{self, CameraError};
use crate::config::{default_path, write_default_config, ConfigError, Settings};

/// List available cameras and print them to stdout.
pub fn list_cameras() -> Result<(), CameraError> {
    let devices = camera::list_devices()?;

    if devices.is_empty() {
        println!("No cameras found.");
        println!();
        println!("Make sure your camera is connected and permissions are granted.");
        println!("On macOS, grant access in System Settings > Privacy & Security > Camera.");
    } else {
        println!("Available cameras:");
        for device in devices {
            println!("  {}", device);
        }
        println!();
        println!("Use --camera <index> to select a camera.");
    }
    Ok(())
}

/// Where `config` subcommands read and write: the `--config` override or
/// the default location.
fn target_path(config_path: Option<&Path>) -> PathBuf {
    config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_path)
}

/// Write the starter config file.
///
/// Does not read any existing configuration, so it works when the target
/// file is missing and when the default file is broken.
pub fn init_config(config_path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let path = target_path(config_path);
    write_default_config(&path)?;
    println!("Created config file: {}", path.display());
    Ok(path)
}

/// Print the resolved settings and where the config file lives.
pub fn show_config(settings: &Settings, config_path: Option<&Path>) {
    let path = target_path(config_path);

    println!("Current configuration:");
    println!("  Width: {}", settings.width);
    println!("  Height: {}", settings.height);
    println!("  Ramp: {} (\"{}\")", settings.ramp, settings.ramp.chars());
    println!("  Invert: {}", if settings.invert { "yes" } else { "no" });
    println!("  Camera: {}", settings.device);
    println!("  Backend: {}", settings.backend);
    println!("  Mirror: {}", if settings.mirror { "yes" } else { "no" });
    println!("  Frame interval: {}ms", settings.frame_interval.as_millis());
    println!();

    if path.exists() {
        println!("Config file: {} (exists)", path.display());
    } else {
        println!("Config file: {} (not found)", path.display());
    }
}
