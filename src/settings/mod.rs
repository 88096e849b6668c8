use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{constants, error::Error};

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

/// How the generated lines are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// Box drawing with two text lines per maze line.
    #[default]
    Art,
    /// Single text line per maze line, two chars per cell.
    Compact,
    /// Raw rows, one RON value per text line.
    Ron,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Level raised by the number of `-v` flags.
    pub fn raised(self, by: u8) -> log::LevelFilter {
        const LEVELS: [log::LevelFilter; 5] = [
            log::LevelFilter::Error,
            log::LevelFilter::Warn,
            log::LevelFilter::Info,
            log::LevelFilter::Debug,
            log::LevelFilter::Trace,
        ];

        let index = (self as usize + by as usize).min(LEVELS.len() - 1);
        LEVELS[index]
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    width: Option<i32>,
    delay_ms: Option<u64>,
    wall_chance: Option<f64>,
    format: Option<Format>,
    log_level: Option<LogLevel>,
    seed: Option<u64>,
}

#[allow(dead_code)]
impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_width(mut self, value: i32) -> Self {
        self.width = Some(value);
        self
    }

    pub fn get_width(&self) -> i32 {
        self.width.unwrap_or(constants::DEFAULT_WIDTH)
    }

    pub fn set_delay_ms(mut self, value: u64) -> Self {
        self.delay_ms = Some(value);
        self
    }

    pub fn get_delay_ms(&self) -> u64 {
        self.delay_ms.unwrap_or(constants::DEFAULT_DELAY_MS)
    }

    pub fn set_wall_chance(mut self, value: f64) -> Self {
        self.wall_chance = Some(value);
        self
    }

    pub fn get_wall_chance(&self) -> f64 {
        self.wall_chance.unwrap_or(constants::DEFAULT_WALL_CHANCE)
    }

    pub fn set_format(mut self, value: Format) -> Self {
        self.format = Some(value);
        self
    }

    pub fn get_format(&self) -> Format {
        self.format.unwrap_or_default()
    }

    pub fn set_log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    pub fn set_seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn default_path() -> Result<PathBuf, Error> {
        Ok(constants::base_path()?.join("settings.ron"))
    }

    pub fn parse(source: &str) -> Result<Self, Error> {
        let options = ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
        Ok(options.from_str::<Self>(source)?)
    }

    /// Loads settings from the file, creating it with the defaults if it doesn't exist yet.
    pub fn load(path: &Path) -> Result<Self, Error> {
        match fs::read_to_string(path) {
            Ok(source) => Self::parse(&source),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("Creating default settings at {}", path.display());
                Self::reset_config(path)?;
                Self::parse(DEFAULT_SETTINGS)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn reset_config(path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SETTINGS)?;
        Ok(())
    }
}
