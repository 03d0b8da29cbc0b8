//! Glyph rasterization using swash
//!
//! Converts font glyph outlines to alpha coverage masks.

use crate::font::FontFace;
use crate::{Result, TextError};
use rootwise_paint::AlphaMask;
use swash::scale::{Render, ScaleContext, Source};
use swash::zeno::Format;

/// Rasterized glyph bitmap with metrics
#[derive(Debug, Clone)]
pub struct RasterizedGlyph {
    /// Coverage bitmap (empty for blank glyphs such as space)
    pub mask: AlphaMask,
    /// Horizontal bearing (offset from pen position to left edge)
    pub bearing_x: i32,
    /// Vertical bearing (offset from baseline up to top edge)
    pub bearing_y: i32,
}

/// Glyph rasterizer using swash
pub struct GlyphRasterizer {
    /// Swash scale context (caches scaling state)
    scale_context: ScaleContext,
}

impl GlyphRasterizer {
    /// Create a new glyph rasterizer
    pub fn new() -> Self {
        Self {
            scale_context: ScaleContext::new(),
        }
    }

    /// Rasterize a glyph at the given font size
    pub fn rasterize(
        &mut self,
        font: &FontFace,
        glyph_id: u16,
        font_size: f32,
    ) -> Result<RasterizedGlyph> {
        let swash_font = swash::FontRef::from_index(font.data(), font.face_index() as usize)
            .ok_or(TextError::InvalidFontData)?;

        let mut scaler = self
            .scale_context
            .builder(swash_font)
            .size(font_size)
            .hint(false)
            .build();

        let mut render = Render::new(&[Source::Outline]);
        render.format(Format::Alpha);

        let Some(image) = render.render(&mut scaler, glyph_id) else {
            // Empty glyph (like space) - no bitmap
            return Ok(RasterizedGlyph {
                mask: AlphaMask::default(),
                bearing_x: 0,
                bearing_y: 0,
            });
        };

        let width = image.placement.width;
        let height = image.placement.height;
        let mask = AlphaMask::from_vec(width, height, image.data)
            .ok_or(TextError::InvalidFontData)?;

        Ok(RasterizedGlyph {
            mask,
            bearing_x: image.placement.left,
            bearing_y: image.placement.top,
        })
    }
}

impl Default for GlyphRasterizer {
    fn default() -> Self {
        Self::new()
    }
}
