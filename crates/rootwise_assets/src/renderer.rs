//! The asset renderer
//!
//! Each render call allocates its own canvas, records the design's paint
//! commands, replays them and hands the canvas back. Nothing drawn in one call
//! is visible to the next. The canvas is allocated before any text is laid
//! out, so an unusable size fails before glyphs are rasterized.

use std::path::{Path, PathBuf};

use rootwise_paint::{Canvas, PaintContext};
use rootwise_text::{FontRegistry, Typeface, Typesetter};

use crate::design::Design;
use crate::error::{AssetError, Result};
use crate::manifest::AssetKind;
use crate::palette::Palette;

/// Font tried before falling back to the built-in bitmap font
pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";

/// Splash screen width (iPhone 14 Pro Max)
pub const SPLASH_WIDTH: u32 = 1284;
/// Splash screen height (iPhone 14 Pro Max)
pub const SPLASH_HEIGHT: u32 = 2778;

/// Where to look for the outline font
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSource {
    /// Font file tried first
    pub path: Option<PathBuf>,
    /// Family name looked up among system fonts when the file is unavailable
    pub family: Option<String>,
    /// Weight used for the family lookup
    pub weight: u16,
}

impl Default for FontSource {
    fn default() -> Self {
        Self {
            path: Some(PathBuf::from(DEFAULT_FONT_PATH)),
            family: None,
            weight: 700,
        }
    }
}

impl FontSource {
    /// No outline font at all; always use the built-in bitmap font
    pub fn builtin() -> Self {
        Self {
            path: None,
            family: None,
            weight: 700,
        }
    }

    /// Resolve to a typeface. Never fails: an unavailable font yields the bitmap font.
    pub fn resolve(&self) -> Typeface {
        let mut registry = if self.family.is_some() {
            FontRegistry::with_system_fonts()
        } else {
            FontRegistry::new()
        };

        match registry.resolve(self.path.as_deref(), self.family.as_deref(), self.weight) {
            Some(face) => Typeface::Outline(face),
            None => {
                tracing::debug!("No outline font available, using built-in bitmap font");
                Typeface::builtin()
            }
        }
    }
}

/// Renders icons and splash screens for one design
pub struct AssetRenderer {
    design: Design,
    palette: Palette,
    typesetter: Typesetter,
}

impl AssetRenderer {
    pub fn new(design: Design, palette: Palette, typeface: Typeface) -> Self {
        tracing::debug!("Asset renderer: {:?} design, font {}", design, typeface.name());
        Self {
            design,
            palette,
            typesetter: Typesetter::new(typeface),
        }
    }

    /// Renderer with the design's default palette and a resolved font
    pub fn with_font_source(design: Design, fonts: &FontSource) -> Self {
        Self::new(design, Palette::for_design(design), fonts.resolve())
    }

    pub fn design(&self) -> Design {
        self.design
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn typeface(&self) -> &Typeface {
        self.typesetter.typeface()
    }

    /// Render a `size` x `size` icon
    pub fn render_icon(&mut self, size: u32) -> Result<Canvas> {
        let side = pixel_extent(size)?;
        let mut canvas = Canvas::new(size, size, self.palette.icon_background)?;

        let mut ctx = PaintContext::new();
        self.design
            .paint_icon(&mut ctx, side, &self.palette, &mut self.typesetter);
        replay(&mut canvas, ctx);
        Ok(canvas)
    }

    /// Render the fixed-size splash screen
    pub fn render_splash(&mut self) -> Result<Canvas> {
        let width = pixel_extent(SPLASH_WIDTH)?;
        let height = pixel_extent(SPLASH_HEIGHT)?;
        let mut canvas = Canvas::new(SPLASH_WIDTH, SPLASH_HEIGHT, self.palette.splash_background)?;

        let mut ctx = PaintContext::new();
        self.design
            .paint_splash(&mut ctx, width, height, &self.palette, &mut self.typesetter);
        replay(&mut canvas, ctx);
        Ok(canvas)
    }

    /// Render any manifest entry
    pub fn render(&mut self, kind: AssetKind) -> Result<Canvas> {
        match kind {
            AssetKind::Splash => self.render_splash(),
            _ => self.render_icon(kind.dimensions().0),
        }
    }

    /// Render an icon and write it as PNG, replacing any existing file
    pub fn generate_icon(&mut self, size: u32, path: impl AsRef<Path>) -> Result<()> {
        self.render_icon(size)?.save_png(path)?;
        Ok(())
    }

    /// Render the splash screen and write it as PNG, replacing any existing file
    pub fn generate_splash(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.render_splash()?.save_png(path)?;
        Ok(())
    }
}

/// Side length as the signed pixel coordinate used by the compositions
fn pixel_extent(size: u32) -> Result<i32> {
    match i32::try_from(size) {
        Ok(side) if side > 0 => Ok(side),
        _ => Err(AssetError::InvalidSize(size)),
    }
}

fn replay(canvas: &mut Canvas, mut ctx: PaintContext) {
    let commands = ctx.take_commands();
    tracing::trace!(
        "Replaying {} paint commands onto {}x{}",
        commands.len(),
        canvas.width(),
        canvas.height()
    );
    canvas.execute_all(&commands);
}
