use thiserror::Error;

#[derive(Error, Debug)]
pub enum InterditError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid volume dimensions: {nx}x{ny}x{nz}")]
    InvalidDimensions { nx: usize, ny: usize, nz: usize },

    #[error("Volume size mismatch: expected {expected} samples, got {actual}")]
    VolumeSizeMismatch { expected: usize, actual: usize },

    #[error("Slice index {index} out of range (max: {max})")]
    SliceOutOfRange { index: usize, max: usize },

    #[error("Unknown format tag: {0}")]
    UnknownFormat(String),

    #[error("Got {paths} image paths but {tags} format tags")]
    MismatchedFormatTags { paths: usize, tags: usize },

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, InterditError>;
