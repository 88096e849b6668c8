use std::path::PathBuf;

use dirs::preference_dir;

use crate::error::Error;

pub const DEFAULT_WIDTH: i32 = 30;
pub const DEFAULT_DELAY_MS: u64 = 1000;
pub const DEFAULT_WALL_CHANCE: f64 = 0.5;

pub fn base_path() -> Result<PathBuf, Error> {
    Ok(preference_dir().ok_or(Error::NoPreferenceDir)?.join("tellers"))
}
