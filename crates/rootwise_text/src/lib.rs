//! Text rendering for Rootwise asset generation
//!
//! This crate provides:
//! - Font discovery and caching (fontdb)
//! - Font metrics (ttf-parser)
//! - Text shaping (HarfBuzz via rustybuzz)
//! - Glyph rasterization (swash)
//! - A built-in bitmap font used when no outline font can be loaded
//! - Text layout producing glyph masks and ink bounds

pub mod bitmap;
pub mod font;
pub mod layout;
pub mod rasterizer;
pub mod registry;
pub mod shaper;

pub use bitmap::BitmapFont;
pub use font::{FontFace, FontMetrics};
pub use layout::{PositionedGlyph, TextBounds, TextLayout, Typeface, Typesetter};
pub use rasterizer::{GlyphRasterizer, RasterizedGlyph};
pub use registry::FontRegistry;
pub use shaper::{ShapedGlyph, ShapedText, TextShaper};

use thiserror::Error;

/// Text rendering errors
#[derive(Error, Debug)]
pub enum TextError {
    #[error("Failed to load font: {0}")]
    FontLoadError(String),

    #[error("Failed to parse font: {0}")]
    FontParseError(String),

    #[error("Invalid font data")]
    InvalidFontData,
}

pub type Result<T> = std::result::Result<T, TextError>;
