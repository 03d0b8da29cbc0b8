//! Text shaping via rustybuzz

use crate::font::FontFace;
use crate::{Result, TextError};

/// A shaped glyph, positions in font units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapedGlyph {
    pub glyph_id: u16,
    pub x_advance: i32,
    pub x_offset: i32,
    pub y_offset: i32,
}

/// Result of shaping a run of text
#[derive(Debug, Clone, Default)]
pub struct ShapedText {
    pub glyphs: Vec<ShapedGlyph>,
}

impl ShapedText {
    /// Total advance in font units
    pub fn advance(&self) -> i32 {
        self.glyphs.iter().map(|g| g.x_advance).sum()
    }
}

/// HarfBuzz-compatible shaper
#[derive(Debug, Default)]
pub struct TextShaper;

impl TextShaper {
    pub fn new() -> Self {
        Self
    }

    /// Shape a single line of text with the face's default features
    pub fn shape(&self, font: &FontFace, text: &str) -> Result<ShapedText> {
        let face = rustybuzz::Face::from_slice(font.data(), font.face_index())
            .ok_or(TextError::InvalidFontData)?;

        let mut buffer = rustybuzz::UnicodeBuffer::new();
        buffer.push_str(text);
        let output = rustybuzz::shape(&face, &[], buffer);

        let glyphs = output
            .glyph_infos()
            .iter()
            .zip(output.glyph_positions())
            .map(|(info, pos)| ShapedGlyph {
                glyph_id: info.glyph_id as u16,
                x_advance: pos.x_advance,
                x_offset: pos.x_offset,
                y_offset: pos.y_offset,
            })
            .collect();

        Ok(ShapedText { glyphs })
    }
}
