//! All kinds of errors in this crate.

use crate::domain::Coord;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A cell key string that the codec never produces.
    #[error("malformed cell key: {0:?}")]
    MalformedKey(String),
    /// The host bounds policy rejected a seed or toggle.
    #[error("cell {0} lies outside the grid bounds")]
    OutOfBounds(Coord),
    #[error("unable to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("unable to parse config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
