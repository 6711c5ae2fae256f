//! Error types for icon generation

use thiserror::Error;

/// Result type alias for icon operations
pub type Result<T> = std::result::Result<T, IconError>;

/// Errors that can occur while planning, rendering or writing icons
#[derive(Error, Debug)]
pub enum IconError {
    /// Filesystem failure (directory creation, file writes, ICO encoding)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode or decode a raster image
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// The plan file could not be parsed
    #[error("Invalid icon plan: {0}")]
    Plan(#[from] serde_json::Error),

    /// A plan entry asked for a size the renderer does not support
    #[error("Invalid icon size {size} for {file}")]
    InvalidSize { size: u32, file: String },

    /// A written icon is missing or differs when read back
    #[error("Verification failed for {0}")]
    Verify(String),

    /// A worker could not report back to the driver
    #[error("Failed to send message: {0}")]
    Channel(String),
}
