//! Icon and splash compositions
//!
//! All geometry is integer pixel math on the asset size, so a given size
//! always produces the same layout.

use rootwise_paint::{PaintContext, Point, Rect};
use rootwise_text::Typesetter;
use serde::{Deserialize, Serialize};

use crate::palette::Palette;

/// Brand wordmark
pub const WORDMARK: &str = "Rootwise";
/// Monogram letter
pub const MONOGRAM: &str = "R";
/// Smallest icon that still carries the wordmark
pub const WORDMARK_MIN_SIZE: i32 = 512;

/// Visual design of the generated assets
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Design {
    /// White "R" on sage; plain cream splash
    Monogram,
    /// Sage leaf with vein and wordmark on cream
    #[default]
    Leaf,
}

impl Design {
    /// Message printed once every asset has been written
    pub fn completion_message(self) -> &'static str {
        match self {
            Design::Monogram => "All assets generated successfully!",
            Design::Leaf => "All Rootwise branded assets generated!",
        }
    }

    /// Record the icon composition for a `size` x `size` canvas
    pub fn paint_icon(
        self,
        ctx: &mut PaintContext,
        size: i32,
        palette: &Palette,
        typesetter: &mut Typesetter,
    ) {
        ctx.clear(palette.icon_background);
        match self {
            Design::Monogram => paint_monogram_icon(ctx, size, palette, typesetter),
            Design::Leaf => paint_leaf_icon(ctx, size, palette, typesetter),
        }
    }

    /// Record the splash composition for a `width` x `height` canvas
    pub fn paint_splash(
        self,
        ctx: &mut PaintContext,
        width: i32,
        height: i32,
        palette: &Palette,
        typesetter: &mut Typesetter,
    ) {
        ctx.clear(palette.splash_background);
        match self {
            Design::Monogram => {}
            Design::Leaf => paint_leaf_splash(ctx, width, height, palette, typesetter),
        }
    }
}

/// `int(value * factor)` for the non-negative sizes used here
fn scaled(value: i32, factor: f64) -> i32 {
    (value as f64 * factor) as i32
}

fn paint_monogram_icon(
    ctx: &mut PaintContext,
    size: i32,
    palette: &Palette,
    typesetter: &mut Typesetter,
) {
    let layout = typesetter.layout(MONOGRAM, (size / 2) as f32);
    let bounds = layout.bounds();

    // Centred on the ink box size, anchored at the ascender line
    let x = (size - bounds.width()).div_euclid(2);
    let y = (size - bounds.height()).div_euclid(2);
    layout.paint(ctx, x, y, palette.text);
}

/// Leaf body: ellipse inscribed in the inclusive box `[x, y, x + leaf, y + 1.4 * leaf]`
fn paint_leaf(ctx: &mut PaintContext, x: i32, y: i32, leaf: i32, palette: &Palette) {
    ctx.fill_ellipse(
        Rect::from_pixel_box(x, y, x + leaf, y + scaled(leaf, 1.4)),
        palette.leaf,
    );
}

fn paint_leaf_icon(ctx: &mut PaintContext, size: i32, palette: &Palette, typesetter: &mut Typesetter) {
    let leaf = scaled(size, 0.45);
    let text_size = scaled(size, 0.22);

    let leaf_x = size / 2 - leaf / 4;
    let leaf_y = size / 2 - leaf / 2;
    paint_leaf(ctx, leaf_x, leaf_y, leaf, palette);

    // Vein down the middle, covering rows start..=end
    let vein_x = (leaf_x + leaf / 2) as f32 + 0.5;
    let vein_start = leaf_y + 10;
    let vein_end = leaf_y + scaled(leaf, 1.3);
    ctx.stroke_line(
        Point::new(vein_x, vein_start as f32),
        Point::new(vein_x, (vein_end + 1) as f32),
        palette.vein,
        (size / 128).max(2) as f32,
    );

    if size >= WORDMARK_MIN_SIZE {
        let layout = typesetter.layout(WORDMARK, text_size as f32);
        let x = (size - layout.bounds().width()).div_euclid(2);
        let y = leaf_y + scaled(leaf, 1.5);
        layout.paint(ctx, x, y, palette.text);
    }
}

fn paint_leaf_splash(
    ctx: &mut PaintContext,
    width: i32,
    height: i32,
    palette: &Palette,
    typesetter: &mut Typesetter,
) {
    const LEAF: i32 = 200;
    const TEXT_SIZE: f32 = 60.0;

    let leaf_x = width / 2 - LEAF / 4;
    let leaf_y = height / 2 - LEAF;
    paint_leaf(ctx, leaf_x, leaf_y, LEAF, palette);

    let layout = typesetter.layout(WORDMARK, TEXT_SIZE);
    let x = (width - layout.bounds().width()).div_euclid(2);
    let y = height / 2 + 150;
    layout.paint(ctx, x, y, palette.text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rootwise_paint::{Ellipse, PaintCommand};

    fn icon_commands(design: Design, size: i32) -> Vec<PaintCommand> {
        let mut ctx = PaintContext::new();
        let mut typesetter = Typesetter::builtin();
        design.paint_icon(&mut ctx, size, &Palette::for_design(design), &mut typesetter);
        ctx.take_commands()
    }

    #[test]
    fn test_leaf_icon_geometry_at_1024() {
        let commands = icon_commands(Design::Leaf, 1024);

        match &commands[1] {
            PaintCommand::FillEllipse { ellipse, .. } => {
                // [397, 282, 857, 926] inclusive
                assert_eq!(
                    *ellipse,
                    Ellipse::inscribed(Rect::new(397.0, 282.0, 461.0, 645.0))
                );
            }
            other => panic!("expected leaf ellipse, got {:?}", other),
        }

        match &commands[2] {
            PaintCommand::StrokeLine { line, style } => {
                assert_eq!(line.start, Point::new(627.5, 292.0));
                assert_eq!(line.end, Point::new(627.5, 881.0));
                assert_eq!(style.width, 8.0);
            }
            other => panic!("expected vein, got {:?}", other),
        }

        // Wordmark anchored at leaf_y + int(leaf * 1.5)
        let text_rows: Vec<i32> = commands
            .iter()
            .filter_map(|c| match c {
                PaintCommand::FillMask { y, .. } => Some(*y),
                _ => None,
            })
            .collect();
        assert!(!text_rows.is_empty());
        assert!(text_rows.iter().all(|y| *y >= 972));
    }

    #[test]
    fn test_favicon_has_no_wordmark_and_min_vein_width() {
        let commands = icon_commands(Design::Leaf, 48);
        assert_eq!(commands.len(), 3);
        assert!(!commands
            .iter()
            .any(|c| matches!(c, PaintCommand::FillMask { .. })));
        match &commands[2] {
            PaintCommand::StrokeLine { style, .. } => assert_eq!(style.width, 2.0),
            other => panic!("expected vein, got {:?}", other),
        }
    }

    #[test]
    fn test_wordmark_threshold() {
        let has_text = |size| {
            icon_commands(Design::Leaf, size)
                .iter()
                .any(|c| matches!(c, PaintCommand::FillMask { .. }))
        };
        assert!(!has_text(511));
        assert!(has_text(512));
    }

    #[test]
    fn test_monogram_is_centred() {
        // 48px: font size 24 -> bitmap scale 3, ink box 15x21 below 3px of leading
        let commands = icon_commands(Design::Monogram, 48);
        match commands.as_slice() {
            [PaintCommand::Clear { .. }, PaintCommand::FillMask { x, y, .. }] => {
                assert_eq!((*x, *y), (16, 16));
            }
            other => panic!("unexpected commands {:?}", other),
        }
    }

    #[test]
    fn test_monogram_splash_is_plain() {
        let mut ctx = PaintContext::new();
        let mut typesetter = Typesetter::builtin();
        let palette = Palette::for_design(Design::Monogram);
        Design::Monogram.paint_splash(&mut ctx, 1284, 2778, &palette, &mut typesetter);
        assert_eq!(
            ctx.commands(),
            &[PaintCommand::Clear {
                color: palette.splash_background
            }]
        );
    }

    #[test]
    fn test_leaf_splash_geometry() {
        let mut ctx = PaintContext::new();
        let mut typesetter = Typesetter::builtin();
        let palette = Palette::for_design(Design::Leaf);
        Design::Leaf.paint_splash(&mut ctx, 1284, 2778, &palette, &mut typesetter);

        match &ctx.commands()[1] {
            PaintCommand::FillEllipse { ellipse, .. } => {
                // [592, 1189, 792, 1469] inclusive
                assert_eq!(ellipse.bounds(), Rect::new(592.0, 1189.0, 201.0, 281.0));
            }
            other => panic!("expected leaf ellipse, got {:?}", other),
        }
        assert!(ctx.commands()[2..]
            .iter()
            .all(|c| matches!(c, PaintCommand::FillMask { y, .. } if *y >= 1539)));
    }

    #[test]
    fn test_design_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            design: Design,
        }
        let parsed: Wrapper = toml::from_str("design = \"monogram\"").unwrap();
        assert_eq!(parsed.design, Design::Monogram);
        assert_eq!(Design::default(), Design::Leaf);
    }
}
