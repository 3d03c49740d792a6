//! Frontend settings: loaded from `lasergate.toml`, then overridden by the
//! command line.

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

/// File name looked up in the user's config directory.
pub const CONFIG_FILE_NAME: &str = "lasergate.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub video: VideoConfig,
    pub scoreboard: ScoreboardConfig,
    pub hud: HudConfig,
    /// Where screenshots go. Defaults to the pictures directory.
    pub screenshot_dir: Option<PathBuf>,
    /// `env_logger` filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
    pub vsync: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreboardConfig {
    pub enabled: bool,
    /// Use the Thayer's Quest layout (time and credits only).
    pub thayers: bool,
    /// Label positions of the older on-screen display.
    pub old_osd: bool,
    /// Placement inside the 320x240 game canvas: `[x, y, w, h]`.
    pub rect: [f32; 4],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    pub crosshair: bool,
    pub subtitles: bool,
    pub fps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            video: VideoConfig::default(),
            scoreboard: ScoreboardConfig::default(),
            hud: HudConfig::default(),
            screenshot_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            width: 960,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            thayers: false,
            old_osd: false,
            rect: [0.0, 0.0, 320.0, 240.0],
        }
    }
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            crosshair: true,
            subtitles: true,
            fps: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "config I/O error: {e}"),
            Self::Parse(e) => write!(f, "invalid config: {e}"),
            Self::Serialize(e) => write!(f, "cannot write config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e)
    }
}

// ---------------------------------------------------------------------------
// Loading and saving
// ---------------------------------------------------------------------------

impl Config {
    /// `<config_dir>/lasergate/lasergate.toml`, if the platform has a config
    /// directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("lasergate").join(CONFIG_FILE_NAME))
    }

    /// Read `path`. A missing file gives the defaults; any other failure is
    /// an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        Ok(toml::from_str(&text)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Configured screenshot directory, else the pictures directory, else
    /// the working directory.
    pub fn screenshot_dir(&self) -> PathBuf {
        self.screenshot_dir
            .clone()
            .or_else(dirs::picture_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
