use std::path::PathBuf;

use thiserror::Error;

/// Largest frame the ICO directory can describe (a width byte of 0 means 256).
pub const MAX_ICO_SIZE: u32 = 256;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("Invalid icon size {0}: must be at least 1")]
    InvalidSize(u32),

    #[error("Invalid ICO frame size {0}: must be between 1 and 256")]
    IcoFrameSize(u32),

    #[error("No ICO sizes configured")]
    NoSizes,

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode PNG {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl IconError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IconError>;

/// Reject empty images.
pub fn validate_size(size: u32) -> Result<u32> {
    if size == 0 {
        return Err(IconError::InvalidSize(size));
    }
    Ok(size)
}

/// Reject frame sizes the ICO directory cannot describe.
pub fn validate_ico_size(size: u32) -> Result<u32> {
    if size == 0 || size > MAX_ICO_SIZE {
        return Err(IconError::IcoFrameSize(size));
    }
    Ok(size)
}
