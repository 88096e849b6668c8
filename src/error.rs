use cellers::GeneratorError;
use rand::distributions::BernoulliError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Generator error; {0}")]
    Generator(#[from] GeneratorError),
    #[error("IO error; {0}")]
    Io(#[from] std::io::Error),
    #[error("Settings error; {0}")]
    Settings(#[from] ron::error::SpannedError),
    #[error("Serialization error; {0}")]
    Serialize(#[from] ron::Error),
    #[error("Invalid wall chance {0}; {1}")]
    InvalidWallChance(f64, BernoulliError),
    #[error("No preference directory on this platform")]
    NoPreferenceDir,
}
