//! Error types for frame I/O.

use thiserror::Error;

/// Error type for loading frames and writing results.
#[derive(Debug, Error)]
pub enum IoError {
    /// Underlying file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image codec rejected the data.
    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),

    /// A decoded buffer did not form a valid grid or frame.
    #[error(transparent)]
    Core(#[from] imgprobe_core::Error),

    /// Input that no codec path can handle.
    #[error("unsupported input: {0}")]
    Unsupported(String),
}

/// Result type for frame I/O.
pub type IoResult<T> = Result<T, IoError>;
