use crate::consts;
use ratatui::style::Style;
use serde::Deserialize;
use std::num::NonZeroU16;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Viewport units per grid cell; larger values make coarser grids
    cell_size: Option<NonZeroU16>,

    /// Display style overrides
    style: StyleConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("wrapsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    pub(crate) fn cell_size(&self) -> NonZeroU16 {
        self.cell_size.unwrap_or(consts::DEFAULT_CELL_SIZE)
    }

    pub(crate) fn styles(&self) -> Styles {
        self.style.resolve()
    }
}

/// User overrides for the styles in [`consts`], parsed from strings like
/// `"bold green"`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct StyleConfig {
    snake: Option<parse_style::Style>,
    food: Option<parse_style::Style>,
    collision: Option<parse_style::Style>,
    score_bar: Option<parse_style::Style>,
}

impl StyleConfig {
    fn resolve(&self) -> Styles {
        Styles {
            snake: self
                .snake
                .as_ref()
                .map_or(consts::SNAKE_STYLE, |s| Style::from(s.clone())),
            food: self
                .food
                .as_ref()
                .map_or(consts::FOOD_STYLE, |s| Style::from(s.clone())),
            collision: self
                .collision
                .as_ref()
                .map_or(consts::COLLISION_STYLE, |s| Style::from(s.clone())),
            score_bar: self
                .score_bar
                .as_ref()
                .map_or(consts::SCORE_BAR_STYLE, |s| Style::from(s.clone())),
            key: consts::KEY_STYLE,
        }
    }
}

/// The full set of display styles after applying any configured overrides
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Styles {
    pub(crate) snake: Style,
    pub(crate) food: Style,
    pub(crate) collision: Style,
    pub(crate) score_bar: Style,
    pub(crate) key: Style,
}

impl Default for Styles {
    fn default() -> Styles {
        Styles {
            snake: consts::SNAKE_STYLE,
            food: consts::FOOD_STYLE,
            collision: consts::COLLISION_STYLE,
            score_bar: consts::SCORE_BAR_STYLE,
            key: consts::KEY_STYLE,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
