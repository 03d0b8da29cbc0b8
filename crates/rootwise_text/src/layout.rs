//! Single-line text layout
//!
//! Glyph positions are measured from the text anchor: the left edge of the
//! first glyph's pen position at the font's ascender line. A layout painted at
//! `(x, y)` therefore has its ascender line at `y`, and [`TextBounds`] are the
//! ink bounds relative to that same anchor.

use std::sync::Arc;

use rootwise_paint::{AlphaMask, Color, PaintContext};

use crate::bitmap::BitmapFont;
use crate::font::FontFace;
use crate::rasterizer::GlyphRasterizer;
use crate::shaper::TextShaper;
use crate::Result;

/// The face used to draw text
#[derive(Debug, Clone)]
pub enum Typeface {
    /// Outline font, shaped and rasterized at any size
    Outline(Arc<FontFace>),
    /// Built-in bitmap font
    Bitmap(BitmapFont),
}

impl Typeface {
    pub fn builtin() -> Self {
        Typeface::Bitmap(BitmapFont::new())
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Typeface::Bitmap(_))
    }

    /// Human readable name for logs
    pub fn name(&self) -> &str {
        match self {
            Typeface::Outline(face) if !face.family().is_empty() => face.family(),
            Typeface::Outline(_) => "<unnamed outline font>",
            Typeface::Bitmap(_) => "<built-in bitmap font>",
        }
    }
}

/// Ink bounds relative to the text anchor; right and bottom are exclusive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    fn union(self, other: TextBounds) -> TextBounds {
        if self.is_empty() {
            return other;
        }
        if other.is_empty() {
            return self;
        }
        TextBounds {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// A glyph mask placed relative to the text anchor
#[derive(Debug, Clone)]
pub struct PositionedGlyph {
    pub x: i32,
    pub y: i32,
    pub mask: AlphaMask,
}

impl PositionedGlyph {
    fn ink_bounds(&self) -> TextBounds {
        match self.mask.ink_bounds() {
            Some((l, t, r, b)) => TextBounds {
                left: self.x + l as i32,
                top: self.y + t as i32,
                right: self.x + r as i32,
                bottom: self.y + b as i32,
            },
            None => TextBounds::default(),
        }
    }
}

/// Laid out line of text
#[derive(Debug, Clone, Default)]
pub struct TextLayout {
    glyphs: Vec<PositionedGlyph>,
    bounds: TextBounds,
    advance: i32,
}

impl TextLayout {
    fn from_glyphs(glyphs: Vec<PositionedGlyph>, advance: i32) -> Self {
        let bounds = glyphs
            .iter()
            .map(PositionedGlyph::ink_bounds)
            .fold(TextBounds::default(), TextBounds::union);
        Self {
            glyphs,
            bounds,
            advance,
        }
    }

    pub fn glyphs(&self) -> &[PositionedGlyph] {
        &self.glyphs
    }

    /// Ink bounds relative to the anchor
    pub fn bounds(&self) -> TextBounds {
        self.bounds
    }

    /// Pen advance of the whole line in pixels
    pub fn advance(&self) -> i32 {
        self.advance
    }

    /// Record the glyph masks with the anchor at `(x, y)`
    pub fn paint(&self, ctx: &mut PaintContext, x: i32, y: i32, color: Color) {
        for glyph in &self.glyphs {
            ctx.fill_mask(x + glyph.x, y + glyph.y, glyph.mask.clone(), color);
        }
    }
}

/// Lays out text with a single typeface
pub struct Typesetter {
    typeface: Typeface,
    shaper: TextShaper,
    rasterizer: GlyphRasterizer,
}

impl Typesetter {
    pub fn new(typeface: Typeface) -> Self {
        Self {
            typeface,
            shaper: TextShaper::new(),
            rasterizer: GlyphRasterizer::new(),
        }
    }

    /// Typesetter using the built-in bitmap font
    pub fn builtin() -> Self {
        Self::new(Typeface::builtin())
    }

    pub fn typeface(&self) -> &Typeface {
        &self.typeface
    }

    /// Lay out one line of `text` at `font_size` pixels.
    ///
    /// An outline font that fails to shape or rasterize is replaced by the
    /// built-in bitmap font for this line.
    pub fn layout(&mut self, text: &str, font_size: f32) -> TextLayout {
        let face = match &self.typeface {
            Typeface::Outline(face) => Arc::clone(face),
            Typeface::Bitmap(font) => return layout_bitmap(font, text, font_size),
        };

        match self.layout_outline(&face, text, font_size) {
            Ok(layout) => layout,
            Err(e) => {
                tracing::warn!(
                    "Outline layout with {} failed ({}), using built-in bitmap font",
                    face.family(),
                    e
                );
                layout_bitmap(&BitmapFont::new(), text, font_size)
            }
        }
    }

    fn layout_outline(&mut self, face: &FontFace, text: &str, font_size: f32) -> Result<TextLayout> {
        let metrics = face.metrics();
        let scale = metrics.scale(font_size);
        let ascent = metrics.ascent_px(font_size).round() as i32;

        let shaped = self.shaper.shape(face, text)?;
        let mut glyphs = Vec::with_capacity(shaped.glyphs.len());
        let mut pen_x = 0.0f32;

        for shaped_glyph in &shaped.glyphs {
            let raster = self
                .rasterizer
                .rasterize(face, shaped_glyph.glyph_id, font_size)?;

            if !raster.mask.is_empty() {
                let origin_x = (pen_x + shaped_glyph.x_offset as f32 * scale).round() as i32;
                let baseline = ascent - (shaped_glyph.y_offset as f32 * scale).round() as i32;
                glyphs.push(PositionedGlyph {
                    x: origin_x + raster.bearing_x,
                    y: baseline - raster.bearing_y,
                    mask: raster.mask,
                });
            }

            pen_x += shaped_glyph.x_advance as f32 * scale;
        }

        tracing::trace!(
            "Laid out {:?} at {}px with {}: {} glyphs",
            text,
            font_size,
            face.family(),
            glyphs.len()
        );

        Ok(TextLayout::from_glyphs(glyphs, pen_x.round() as i32))
    }
}

fn layout_bitmap(font: &BitmapFont, text: &str, font_size: f32) -> TextLayout {
    let scale = font.scale_for(font_size);
    // One row of leading sits between the ascender line and the glyph top
    let top = (font.ascent(scale) - crate::bitmap::GLYPH_HEIGHT * scale) as i32;
    let advance = font.advance(scale) as i32;

    let mut glyphs = Vec::new();
    let mut pen_x = 0;
    for c in text.chars() {
        let mask = font.glyph_mask(c, scale);
        if mask.ink_bounds().is_some() {
            glyphs.push(PositionedGlyph {
                x: pen_x,
                y: top,
                mask,
            });
        }
        pen_x += advance;
    }

    TextLayout::from_glyphs(glyphs, pen_x)
}
