use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything a vignette can fail with.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("index {index} is out of range for a sequence of length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("{0} cannot be instantiated directly; use its accessor instead")]
    Instantiation(&'static str),

    #[error("no prototype registered under '{0}'")]
    UnknownPrototype(String),

    #[error("unknown factory '{0}' (expected one of: list, table)")]
    UnknownFactory(String),

    #[error("cannot add an entry to '{0}': only directories hold entries")]
    FileTreatment(String),

    #[error("failed to write output")]
    Io(#[from] io::Error),

    #[error("invalid configuration")]
    Config(#[from] toml::de::Error),

    #[error("failed to read config file {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PatternError {
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }

    pub fn config_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ConfigRead {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
