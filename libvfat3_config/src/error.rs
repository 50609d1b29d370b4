use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration as file {0:?} does not exist")]
    BadFilePath(PathBuf),
    #[error("Config failed due to IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Config failed to parse YAML: {0}")]
    ParsingError(#[from] serde_yaml::Error),
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Could not read manifest because file {0:?} does not exist")]
    BadFilePath(PathBuf),
    #[error("Manifest failed due to IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Manifest line {0} does not contain a register name and a file path")]
    BadLineFormat(usize),
}

#[derive(Debug, Error)]
pub enum NominalFileError {
    #[error("Could not read nominal DAC values because file {0:?} does not exist")]
    BadFilePath(PathBuf),
    #[error("Nominal DAC value file failed due to IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Nominal DAC value file failed to parse an integer: {0}")]
    ParsingError(#[from] std::num::ParseIntError),
    #[error("Nominal DAC value file line {0} is not a slot/value pair")]
    BadLineFormat(usize),
}

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("LinkSetter failed due to IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("LinkSetter failed due to configuration error: {0}")]
    ConfigError(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum DacWriterError {
    #[error("DacWriter failed due to manifest error: {0}")]
    ManifestError(#[from] ManifestError),
    #[error("DacWriter failed due to nominal value file error: {0}")]
    NominalError(#[from] NominalFileError),
    #[error("DacWriter failed due to configuration error: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("DacWriter failed due to IO error: {0}")]
    IOError(#[from] std::io::Error),
}
