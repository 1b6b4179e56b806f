//! Configuration file handling for livecam-ascii.
//!
//! Loads configuration from `<config dir>/livecam-ascii/config.toml` or a
//! custom path, then resolves it into [`Settings`]. Precedence is
//! command line > config file > built-in defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::ascii::{AsciiConverter, ConvertError, Ramp, RampName};
use crate::camera::{CameraBackend, CameraSettings};
use crate::session::{SessionConfig, DEFAULT_FRAME_INTERVAL};

/// Default output width in characters.
pub const DEFAULT_WIDTH: u16 = 120;
/// Default output height in characters.
pub const DEFAULT_HEIGHT: u16 = 60;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub ascii: AsciiConfig,
    #[serde(default)]
    pub camera: CameraConfig,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub interval_ms: Option<u64>,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AsciiConfig {
    pub ramp: Option<String>,
    #[serde(default)]
    pub invert: bool,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CameraConfig {
    pub device: Option<u32>,
    pub backend: Option<String>,
    #[serde(default)]
    pub mirror: bool,
}

impl Config {
    /// Load configuration.
    ///
    /// With `Some(path)` the file must exist. With `None` the default path
    /// is used and a missing file yields the default config.
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if !path.exists() => Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            }),
            Some(path) => Self::load_file(path),
            None => {
                let path = default_path();
                if path.exists() {
                    Self::load_file(&path)
                } else {
                    log::debug!("No config file at {}, using defaults", path.display());
                    Ok(Config::default())
                }
            }
        }
    }

    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::parse(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Fully resolved startup parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub width: u16,
    pub height: u16,
    pub ramp: RampName,
    pub invert: bool,
    pub device: u32,
    pub backend: CameraBackend,
    pub mirror: bool,
    pub frame_interval: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            ramp: RampName::default(),
            invert: false,
            device: 0,
            backend: CameraBackend::default(),
            mirror: false,
            frame_interval: DEFAULT_FRAME_INTERVAL,
        }
    }
}

impl Settings {
    /// Defaults overlaid with whatever the config file sets.
    ///
    /// # Errors
    /// * `ConfigError::InvalidValue` - unknown ramp or backend name
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let mut settings = Settings::default();

        if let Some(width) = config.output.width {
            settings.width = width;
        }
        if let Some(height) = config.output.height {
            settings.height = height;
        }
        if let Some(ms) = config.output.interval_ms {
            settings.frame_interval = Duration::from_millis(ms);
        }
        if let Some(ref name) = config.ascii.ramp {
            settings.ramp = name
                .parse::<RampName>()
                .map_err(|e| ConfigError::InvalidValue {
                    key: "ascii.ramp",
                    message: e.to_string(),
                })?;
        }
        settings.invert = config.ascii.invert;
        if let Some(device) = config.camera.device {
            settings.device = device;
        }
        if let Some(ref name) = config.camera.backend {
            settings.backend = name
                .parse::<CameraBackend>()
                .map_err(|message| ConfigError::InvalidValue {
                    key: "camera.backend",
                    message,
                })?;
        }
        settings.mirror = config.camera.mirror;

        Ok(settings)
    }

    pub fn camera_settings(&self) -> CameraSettings {
        CameraSettings {
            device_index: self.device,
            mirror: self.mirror,
            ..CameraSettings::default()
        }
    }

    pub fn converter(&self) -> AsciiConverter {
        AsciiConverter::new(Ramp::named(self.ramp), self.invert)
    }

    /// # Errors
    /// * `ConvertError::InvalidDimensions` - width or height is zero
    pub fn session_config(&self) -> Result<SessionConfig, ConvertError> {
        Ok(SessionConfig::new(self.width, self.height)?.with_frame_interval(self.frame_interval))
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    NotFound {
        path: PathBuf,
    },
    AlreadyExists {
        path: PathBuf,
    },
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    InvalidValue {
        key: &'static str,
        message: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound { path } => {
                write!(f, "Config file '{}' does not exist", path.display())
            }
            ConfigError::AlreadyExists { path } => {
                write!(f, "Config file already exists: {}", path.display())
            }
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::InvalidValue { key, message } => {
                write!(f, "Invalid config value for '{}': {}", key, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("livecam-ascii").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/livecam-ascii/config.toml")
        })
}

/// Commented starter config written by `config init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# livecam-ascii configuration

[output]
# ASCII output size in characters
width = 120
height = 60
# Pause between frames in milliseconds (~30 fps)
interval_ms = 33

[ascii]
# Ramp: standard, dense, light, minimal
ramp = "standard"
# Reverse the ramp (for light terminal themes)
invert = false

[camera]
# Camera device index (see `livecam-ascii list-cameras`)
device = 0
# Capture backend: ffmpeg, native, synthetic
backend = "ffmpeg"
# Mirror horizontally (selfie mode)
mirror = false
"#;

/// Write the starter config, refusing to overwrite an existing file.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    let io_err = |source| ConfigError::IoError {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, DEFAULT_CONFIG_TOML).map_err(io_err)
}
