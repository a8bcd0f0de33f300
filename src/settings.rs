//! User settings read from an optional JSON file.
//!
//! Every field has a default, so a partial file only overrides what it names.
//! Command-line flags are applied on top by the binary.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_TICK_RATE_HZ, GridSize, MAX_TICK_RATE_HZ,
    MIN_GRID_EDGE, THEME_CLASSIC, Theme, theme_by_name,
};

const APP_DIR_NAME: &str = "wrap-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Problems loading or validating settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("board must be at least {min}x{min} cells, got {width}x{height}")]
    BoardTooSmall { width: u16, height: u16, min: u16 },
    #[error("tick rate must be between 1 and {max} Hz, got {rate}")]
    TickRateOutOfRange { rate: u32, max: u32 },
    #[error("unknown theme {0:?}")]
    UnknownTheme(String),
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub grid_width: u16,
    pub grid_height: u16,
    pub tick_rate_hz: u32,
    pub theme: String,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            tick_rate_hz: DEFAULT_TICK_RATE_HZ,
            theme: THEME_CLASSIC.name.to_owned(),
            seed: None,
        }
    }
}

impl Settings {
    /// Loads settings from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load_from_path(path: &Path) -> Result<Self, SettingsError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                info!("no settings file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&raw).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads settings from the platform config directory, or defaults when
    /// no config directory is known.
    pub fn load() -> Result<Self, SettingsError> {
        match settings_path() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Checks board size, tick rate and theme name.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.grid_width < MIN_GRID_EDGE || self.grid_height < MIN_GRID_EDGE {
            return Err(SettingsError::BoardTooSmall {
                width: self.grid_width,
                height: self.grid_height,
                min: MIN_GRID_EDGE,
            });
        }

        if !(1..=MAX_TICK_RATE_HZ).contains(&self.tick_rate_hz) {
            return Err(SettingsError::TickRateOutOfRange {
                rate: self.tick_rate_hz,
                max: MAX_TICK_RATE_HZ,
            });
        }

        self.theme().map(|_| ())
    }

    #[must_use]
    pub fn grid_size(&self) -> GridSize {
        GridSize {
            width: self.grid_width,
            height: self.grid_height,
        }
    }

    pub fn theme(&self) -> Result<&'static Theme, SettingsError> {
        theme_by_name(&self.theme).ok_or_else(|| SettingsError::UnknownTheme(self.theme.clone()))
    }
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> Option<PathBuf> {
    let mut base = dirs::config_dir()?;
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    Some(base)
}
