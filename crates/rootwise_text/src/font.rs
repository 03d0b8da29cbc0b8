//! Parsed font faces

use std::sync::Arc;

use crate::{Result, TextError};

/// Vertical metrics in font units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetrics {
    pub units_per_em: u16,
    pub ascender: i16,
    pub descender: i16,
    pub line_gap: i16,
}

impl FontMetrics {
    /// Scale factor from font units to pixels at `font_size`
    pub fn scale(&self, font_size: f32) -> f32 {
        font_size / self.units_per_em as f32
    }

    /// Ascender in pixels at `font_size`
    pub fn ascent_px(&self, font_size: f32) -> f32 {
        self.ascender as f32 * self.scale(font_size)
    }
}

/// An outline font face loaded into memory
///
/// The raw bytes are shared so the same face can be handed to the shaper and the
/// rasterizer without copying.
#[derive(Clone)]
pub struct FontFace {
    data: Arc<Vec<u8>>,
    face_index: u32,
    family: String,
    metrics: FontMetrics,
}

impl FontFace {
    pub fn from_data(data: Vec<u8>) -> Result<Self> {
        Self::from_data_with_index(data, 0)
    }

    /// Parse the face at `face_index` of a font file or collection
    pub fn from_data_with_index(data: Vec<u8>, face_index: u32) -> Result<Self> {
        let (metrics, family) = {
            let face = ttf_parser::Face::parse(&data, face_index)
                .map_err(|e| TextError::FontParseError(e.to_string()))?;

            let metrics = FontMetrics {
                units_per_em: face.units_per_em(),
                ascender: face.ascender(),
                descender: face.descender(),
                line_gap: face.line_gap(),
            };

            let family = face
                .names()
                .into_iter()
                .filter(|name| name.name_id == ttf_parser::name_id::FAMILY)
                .find_map(|name| name.to_string())
                .unwrap_or_default();

            (metrics, family)
        };

        if metrics.units_per_em == 0 {
            return Err(TextError::InvalidFontData);
        }

        Ok(Self {
            data: Arc::new(data),
            face_index,
            family,
            metrics,
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn metrics(&self) -> FontMetrics {
        self.metrics
    }
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("family", &self.family)
            .field("face_index", &self.face_index)
            .field("metrics", &self.metrics)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// Installed bold face for tests that need a real outline font
#[cfg(test)]
pub(crate) fn installed_bold_face() -> Option<Arc<FontFace>> {
    use crate::registry::FontRegistry;
    use std::path::Path;

    let path = Path::new("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf");
    let face = FontRegistry::new().load_file(path).ok().or_else(|| {
        FontRegistry::with_system_fonts()
            .load_font_with_style("DejaVu Sans", 700, false)
            .ok()
    });
    if face.is_none() {
        eprintln!("skipping: no DejaVu Sans Bold installed");
    }
    face
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_is_rejected() {
        assert!(matches!(
            FontFace::from_data(b"definitely not a font".to_vec()),
            Err(TextError::FontParseError(_))
        ));
        assert!(FontFace::from_data(Vec::new()).is_err());
    }

    #[test]
    fn test_metrics_scale() {
        let metrics = FontMetrics {
            units_per_em: 2048,
            ascender: 1901,
            descender: -483,
            line_gap: 0,
        };
        assert_eq!(metrics.scale(2048.0), 1.0);
        assert!((metrics.ascent_px(512.0) - 475.25).abs() < 1e-3);
    }

    #[test]
    fn test_installed_face_metrics() {
        let Some(face) = installed_bold_face() else {
            return;
        };
        assert!(face.family().starts_with("DejaVu Sans"));
        let metrics = face.metrics();
        assert!(metrics.units_per_em > 0);
        assert!(metrics.ascender > 0);
        assert!(metrics.descender < 0);
    }
}
