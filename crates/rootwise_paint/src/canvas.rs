//! CPU canvas backed by a tiny-skia pixmap
//!
//! A [`Canvas`] is owned by a single rendering call: allocate it with a
//! background color, replay [`PaintCommand`]s onto it, then encode it as PNG.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbImage};
use tiny_skia::{
    ColorU8, FillRule, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke, Transform,
};

use crate::color::Color;
use crate::context::{LineCap, PaintCommand, StrokeStyle};
use crate::error::{PaintError, Result};
use crate::mask::AlphaMask;
use crate::primitives::{Ellipse, Line, Rect};

/// In-memory raster buffer
///
/// Shapes are drawn without anti-aliasing, giving hard pixel edges.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocate a `width` x `height` canvas filled with `background`
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self> {
        let mut pixmap =
            Pixmap::new(width, height).ok_or(PaintError::InvalidSize { width, height })?;
        pixmap.fill(background.to_skia());

        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Straight (non-premultiplied) RGBA value of a pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some([color.red(), color.green(), color.blue(), color.alpha()])
    }

    /// Replay recorded commands in order
    pub fn execute_all<'a>(&mut self, commands: impl IntoIterator<Item = &'a PaintCommand>) {
        for command in commands {
            self.execute(command);
        }
    }

    pub fn execute(&mut self, command: &PaintCommand) {
        match command {
            PaintCommand::Clear { color } => self.pixmap.fill(color.to_skia()),
            PaintCommand::FillRect { rect, color } => self.fill_rect(*rect, *color),
            PaintCommand::FillEllipse { ellipse, color } => self.fill_ellipse(*ellipse, *color),
            PaintCommand::StrokeLine { line, style } => self.stroke_line(*line, *style),
            PaintCommand::FillMask { x, y, mask, color } => self.fill_mask(*x, *y, mask, *color),
        }
    }

    fn paint(color: Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(color.to_skia());
        paint.anti_alias = false;
        paint
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(rect) = rect.to_skia() else {
            tracing::trace!("Skipping degenerate rect {:?}", rect);
            return;
        };
        let paint = Self::paint(color);
        self.pixmap
            .fill_rect(rect, &paint, Transform::identity(), None);
    }

    pub fn fill_ellipse(&mut self, ellipse: Ellipse, color: Color) {
        let path = ellipse
            .bounds()
            .to_skia()
            .and_then(PathBuilder::from_oval);
        let Some(path) = path else {
            tracing::trace!("Skipping degenerate ellipse {:?}", ellipse);
            return;
        };
        let paint = Self::paint(color);
        self.pixmap.fill_path(
            &path,
            &paint,
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    pub fn stroke_line(&mut self, line: Line, style: StrokeStyle) {
        let mut pb = PathBuilder::new();
        pb.move_to(line.start.x, line.start.y);
        pb.line_to(line.end.x, line.end.y);
        let Some(path) = pb.finish() else {
            tracing::trace!("Skipping degenerate line {:?}", line);
            return;
        };

        let stroke = Stroke {
            width: style.width,
            line_cap: match style.line_cap {
                LineCap::Butt => tiny_skia::LineCap::Butt,
                LineCap::Round => tiny_skia::LineCap::Round,
                LineCap::Square => tiny_skia::LineCap::Square,
            },
            ..Stroke::default()
        };
        let paint = Self::paint(style.color);
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    /// Composite a coverage mask tinted with `color` at integer offset `(x, y)`
    pub fn fill_mask(&mut self, x: i32, y: i32, mask: &AlphaMask, color: Color) {
        let Some(mut tile) = Pixmap::new(mask.width(), mask.height()) else {
            return;
        };

        let [r, g, b, a] = color.to_rgba8();
        for (pixel, coverage) in tile.pixels_mut().iter_mut().zip(mask.data()) {
            let alpha = ((*coverage as u16 * a as u16 + 127) / 255) as u8;
            *pixel = ColorU8::from_rgba(r, g, b, alpha).premultiply();
        }

        self.pixmap.draw_pixmap(
            x,
            y,
            tile.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }

    /// Flatten to an 8-bit RGB image
    pub fn to_rgb_image(&self) -> RgbImage {
        let (width, height) = (self.width(), self.height());
        let mut buffer = Vec::with_capacity((width as usize) * (height as usize) * 3);
        for pixel in self.pixmap.pixels() {
            let color = pixel.demultiply();
            buffer.extend_from_slice(&[color.red(), color.green(), color.blue()]);
        }
        // Length always matches width * height * 3
        RgbImage::from_raw(width, height, buffer).unwrap_or_else(|| RgbImage::new(width, height))
    }

    /// Encode as PNG bytes
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.to_rgb_image()
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Encode as PNG and write to `path`, replacing any existing file
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.encode_png()?;
        std::fs::write(path, &bytes).map_err(|source| PaintError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            "Wrote {}x{} PNG ({} bytes) to {}",
            self.width(),
            self.height(),
            bytes.len(),
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::PaintContext;
    use crate::primitives::Point;

    const CREAM: Color = Color::from_rgb8(253, 248, 243);
    const SAGE: Color = Color::from_rgb8(166, 199, 163);

    #[test]
    fn test_canvas_is_filled_with_background() {
        let canvas = Canvas::new(16, 8, CREAM).unwrap();
        assert_eq!(canvas.width(), 16);
        assert_eq!(canvas.height(), 8);
        assert_eq!(canvas.pixel(0, 0), Some([253, 248, 243, 255]));
        assert_eq!(canvas.pixel(15, 7), Some([253, 248, 243, 255]));
        assert_eq!(canvas.pixel(16, 0), None);
    }

    #[test]
    fn test_zero_size_is_rejected() {
        assert!(matches!(
            Canvas::new(0, 10, CREAM),
            Err(PaintError::InvalidSize {
                width: 0,
                height: 10
            })
        ));
    }

    #[test]
    fn test_fill_ellipse_covers_center_not_corners() {
        let mut canvas = Canvas::new(100, 100, CREAM).unwrap();
        canvas.fill_ellipse(Ellipse::inscribed(Rect::new(0.0, 0.0, 100.0, 100.0)), SAGE);
        assert_eq!(canvas.pixel(50, 50), Some([166, 199, 163, 255]));
        assert_eq!(canvas.pixel(1, 1), Some([253, 248, 243, 255]));
        assert_eq!(canvas.pixel(98, 98), Some([253, 248, 243, 255]));
    }

    #[test]
    fn test_stroke_line_width() {
        let mut canvas = Canvas::new(20, 20, Color::WHITE).unwrap();
        canvas.stroke_line(
            Line::new(Point::new(10.0, 2.0), Point::new(10.0, 18.0)),
            StrokeStyle {
                color: Color::BLACK,
                width: 4.0,
                ..Default::default()
            },
        );
        assert_eq!(canvas.pixel(9, 10), Some([0, 0, 0, 255]));
        assert_eq!(canvas.pixel(10, 10), Some([0, 0, 0, 255]));
        assert_eq!(canvas.pixel(3, 10), Some([255, 255, 255, 255]));
        // Butt caps stop at the endpoints
        assert_eq!(canvas.pixel(10, 0), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_fill_mask_blends_coverage() {
        let mut canvas = Canvas::new(4, 4, Color::WHITE).unwrap();
        let mut mask = AlphaMask::new(2, 1);
        mask.set(0, 0, 255);
        mask.set(1, 0, 0);
        canvas.fill_mask(1, 1, &mask, Color::BLACK);
        assert_eq!(canvas.pixel(1, 1), Some([0, 0, 0, 255]));
        assert_eq!(canvas.pixel(2, 1), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_fill_mask_clips_at_edges() {
        let mut canvas = Canvas::new(4, 4, Color::WHITE).unwrap();
        let mask = AlphaMask::from_vec(3, 3, vec![255; 9]).unwrap();
        canvas.fill_mask(-1, 2, &mask, Color::BLACK);
        assert_eq!(canvas.pixel(0, 3), Some([0, 0, 0, 255]));
        assert_eq!(canvas.pixel(2, 3), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_replay_context() {
        let mut ctx = PaintContext::new();
        ctx.clear(SAGE);
        ctx.fill_rect(0.0, 0.0, 2.0, 2.0, Color::BLACK);

        let mut canvas = Canvas::new(4, 4, CREAM).unwrap();
        canvas.execute_all(ctx.commands());
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(canvas.pixel(3, 3), Some([166, 199, 163, 255]));
    }

    #[test]
    fn test_encode_png_decodes_with_same_dimensions() {
        let canvas = Canvas::new(48, 30, SAGE).unwrap();
        let bytes = canvas.encode_png().unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory_with_format(&bytes, ImageFormat::Png).unwrap();
        assert_eq!(decoded.width(), 48);
        assert_eq!(decoded.height(), 30);
        assert_eq!(decoded.to_rgb8().get_pixel(10, 10).0, [166, 199, 163]);
    }
}
