//! Error and warning types for the atlas build

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A non-fatal diagnostic recorded during asset loading.
///
/// The library never prints; warnings accumulate on the atlas and the
/// embedding application decides what to do with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub message: String,
}

impl Warning {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Error raised while building the sprite atlas.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AtlasError {
    /// A spritesheet file could not be read or decoded
    #[error("failed to load spritesheet '{}': {source}", path.display())]
    Sheet {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// The reference line-art image could not be read for sizing
    #[error("failed to read reference sheet '{}': {source}", path.display())]
    Reference {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// Slicing referenced a sheet name that was never loaded
    #[error("no spritesheet named '{0}' has been loaded")]
    UnknownSheet(String),
    /// Slicing was attempted before a cell size was established
    #[error("cell size is not set; load the reference sheet or configure one explicitly")]
    SizeUnset,
}
