//! Brand colors

use rootwise_paint::Color;

use crate::design::Design;

/// Cream background, #FDF8F3
pub const CREAM: Color = Color::from_hex(0xFDF8F3);
/// Sage leaf green, #A6C7A3
pub const SAGE: Color = Color::from_hex(0xA6C7A3);
/// Darker sage used for the leaf vein
pub const VEIN: Color = Color::from_rgb8(140, 170, 137);
/// Dark green wordmark ink
pub const INK: Color = Color::from_rgb8(79, 91, 77);

/// Colors used by one design
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub icon_background: Color,
    pub splash_background: Color,
    pub leaf: Color,
    pub vein: Color,
    pub text: Color,
}

impl Palette {
    /// Default colors for `design`
    pub fn for_design(design: Design) -> Self {
        match design {
            Design::Monogram => Self {
                icon_background: SAGE,
                splash_background: CREAM,
                leaf: SAGE,
                vein: VEIN,
                text: Color::WHITE,
            },
            Design::Leaf => Self {
                icon_background: CREAM,
                splash_background: CREAM,
                leaf: SAGE,
                vein: VEIN,
                text: INK,
            },
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_design(Design::default())
    }
}
