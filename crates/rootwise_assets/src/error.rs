use std::path::PathBuf;

use rootwise_paint::PaintError;
use thiserror::Error;

/// Asset generation errors
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Invalid asset size {0}: must be between 1 and {max}", max = i32::MAX)]
    InvalidSize(u32),

    #[error(transparent)]
    Paint(#[from] PaintError),

    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, AssetError>;
