//! Paint errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while allocating, drawing or encoding a canvas
#[derive(Error, Debug)]
pub enum PaintError {
    #[error("Invalid canvas size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("Invalid color literal: {0}")]
    InvalidColor(String),

    #[error("Failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PaintError>;
