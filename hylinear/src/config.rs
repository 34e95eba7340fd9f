//! Runtime configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) is a valid configuration.
//!
//! ```toml
//! width = 100
//! color = "never"
//! log_level = "debug"
//!
//! [repeat]
//! start = 1
//! count = 8
//! ```
use std::path::Path;

use log::{LevelFilter, debug};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use termcolor::ColorChoice;

use crate::error::{LinError, LinResult};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn choice(self) -> ColorChoice {
        match self {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }

    /// Raise verbosity by `steps` levels, saturating at `Trace`.
    pub fn raised(self, steps: u8) -> LogLevel {
        use LogLevel::*;
        const ORDER: [LogLevel; 6] = [Off, Error, Warn, Info, Debug, Trace];
        let index = ORDER.iter().position(|l| *l == self).unwrap_or(0);
        ORDER[(index + steps as usize).min(ORDER.len() - 1)]
    }
}

/// Parameters of the `repeat` program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RepeatConfig {
    /// Initial accumulator.
    pub start: u32,
    /// Number of steps.
    pub count: u32,
}

impl Default for RepeatConfig {
    fn default() -> Self {
        Self { start: 0, count: 5 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Render width; `None` uses the terminal width.
    pub width: Option<usize>,
    pub color: ColorMode,
    pub log_level: LogLevel,
    pub repeat: RepeatConfig,
}

impl Config {
    /// Parse a configuration from TOML text. `file` is only used for error reporting.
    pub fn from_toml_str(text: &str, file: &str) -> LinResult<Self> {
        toml::from_str(text).map_err(|source| LinError::ConfigParse {
            source,
            file: file.to_string(),
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> LinResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text, &path.display().to_string())?;
        debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raised_saturates() {
        assert_eq!(LogLevel::Warn.raised(1), LogLevel::Info);
        assert_eq!(LogLevel::Warn.raised(9), LogLevel::Trace);
        assert_eq!(LogLevel::Off.raised(0), LogLevel::Off);
    }

    #[test]
    fn color_mode_parses_from_cli_text() {
        assert_eq!("never".parse::<ColorMode>().unwrap(), ColorMode::Never);
        assert!("sometimes".parse::<ColorMode>().is_err());
    }
}
