//! Config file loading, resolution and the `config init` writer.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use std::time::Duration;

use livecam_ascii::ascii::RampName;
use livecam_ascii::camera::CameraBackend;
use livecam_ascii::cli::{init_config, Args};
use livecam_ascii::config::{
    write_default_config, Config, ConfigError, Settings, DEFAULT_CONFIG_TOML,
};
use clap::Parser;
use tempfile::TempDir;

#[test]
fn test_explicit_missing_path_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");
    assert!(matches!(
        Config::load(Some(&path)),
        Err(ConfigError::NotFound { .. })
    ));
}

#[test]
fn test_load_file_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[output]
width = 80
height = 24
interval_ms = 50

[ascii]
ramp = "dense"
invert = true

[camera]
device = 2
backend = "synthetic"
mirror = true
"#,
    )
    .unwrap();

    let config = Config::load(Some(&path)).unwrap();
    let settings = Settings::from_config(&config).unwrap();
    assert_eq!(settings.width, 80);
    assert_eq!(settings.height, 24);
    assert_eq!(settings.frame_interval, Duration::from_millis(50));
    assert_eq!(settings.ramp, RampName::Dense);
    assert!(settings.invert);
    assert_eq!(settings.device, 2);
    assert_eq!(settings.backend, CameraBackend::Synthetic);
    assert!(settings.mirror);

    let camera = settings.camera_settings();
    assert_eq!(camera.device_index, 2);
    assert!(camera.mirror);

    let converter = settings.converter();
    assert!(converter.is_inverted());
    assert_eq!(converter.ramp().glyph(0), ' ');
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ascii]\nramp = \"minimal\"\n").unwrap();

    let settings = Settings::from_config(&Config::load(Some(&path)).unwrap()).unwrap();
    assert_eq!(settings.ramp, RampName::Minimal);
    assert_eq!(settings.width, 120);
    assert_eq!(settings.height, 60);
    assert_eq!(settings.backend, CameraBackend::Ffmpeg);
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[output]\nwidth = \"wide\"\n").unwrap();

    let err = Config::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_cli_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[output]\nwidth = 80\nheight = 24\n").unwrap();

    let args = Args::parse_from(["livecam-ascii", "--height", "30"]);
    let mut settings = Settings::from_config(&Config::load(Some(&path)).unwrap()).unwrap();
    args.apply(&mut settings);

    assert_eq!(settings.width, 80);
    assert_eq!(settings.height, 30);
}

#[test]
fn test_write_default_config_creates_parents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("livecam-ascii").join("config.toml");

    write_default_config(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG_TOML);

    let settings = Settings::from_config(&Config::load(Some(&path)).unwrap()).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_write_default_config_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "# mine\n").unwrap();

    assert!(matches!(
        write_default_config(&path),
        Err(ConfigError::AlreadyExists { .. })
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");
}

// ==================== config init ====================

/// Run the binary with config lookups confined to `home`.
fn run_cli(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_livecam-ascii"))
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .output()
        .unwrap()
}

#[test]
fn test_init_config_creates_explicit_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fresh.toml");

    let written = init_config(Some(&path)).unwrap();
    assert_eq!(written, path);
    assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG_TOML);
}

#[test]
fn test_cli_config_init_writes_new_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fresh.toml");

    let out = run_cli(
        dir.path(),
        &["--config", path.to_str().unwrap(), "config", "init"],
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(path.exists());
    assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG_TOML);
    assert!(String::from_utf8_lossy(&out.stdout).contains("Created config file"));

    // A second init leaves the file alone and fails
    fs::write(&path, "# mine\n").unwrap();
    let again = run_cli(
        dir.path(),
        &["--config", path.to_str().unwrap(), "config", "init"],
    );
    assert_eq!(again.status.code(), Some(1));
    assert_eq!(fs::read_to_string(&path).unwrap(), "# mine\n");
}

#[test]
fn test_cli_config_init_ignores_broken_default_file() {
    let dir = TempDir::new().unwrap();
    let default_dir = dir.path().join(".config").join("livecam-ascii");
    fs::create_dir_all(&default_dir).unwrap();
    fs::write(default_dir.join("config.toml"), "[output]\nwidth = \"wide\"\n").unwrap();
    let path = dir.path().join("fresh.toml");

    let out = run_cli(
        dir.path(),
        &["--config", path.to_str().unwrap(), "config", "init"],
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG_TOML);
}

#[test]
fn test_cli_config_show_missing_explicit_path_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");

    let out = run_cli(
        dir.path(),
        &["--config", path.to_str().unwrap(), "config", "show"],
    );
    assert_eq!(out.status.code(), Some(1));
    assert!(!path.exists());
}
