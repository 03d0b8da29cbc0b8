//! Color types and utilities

use crate::error::{PaintError, Result};

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Create an opaque color from u8 components (0-255)
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Create from u8 components (0-255)
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from hex value (0xRRGGBB or 0xRRGGBBAA)
    pub const fn from_hex(hex: u32) -> Self {
        if hex > 0xFFFFFF {
            // 0xRRGGBBAA format
            Self::from_rgba8(
                ((hex >> 24) & 0xFF) as u8,
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
            )
        } else {
            // 0xRRGGBB format
            Self::from_rgb8(
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
            )
        }
    }

    /// Parse a `#RRGGBB` or `#RRGGBBAA` literal (leading `#` optional)
    pub fn parse_hex(literal: &str) -> Result<Self> {
        let digits = literal.trim().trim_start_matches('#');
        if !matches!(digits.len(), 6 | 8) {
            return Err(PaintError::InvalidColor(literal.to_string()));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| PaintError::InvalidColor(literal.to_string()))?;

        if digits.len() == 8 {
            Ok(Self::from_rgba8(
                (value >> 24) as u8,
                (value >> 16) as u8,
                (value >> 8) as u8,
                value as u8,
            ))
        } else {
            Ok(Self::from_hex(value))
        }
    }

    /// Convert to u8 array [r, g, b, a]
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        ]
    }

    /// Convert to u8 array [r, g, b], dropping alpha
    pub fn to_rgb8(&self) -> [u8; 3] {
        let [r, g, b, _] = self.to_rgba8();
        [r, g, b]
    }

    pub(crate) fn to_skia(self) -> tiny_skia::Color {
        let [r, g, b, a] = self.to_rgba8();
        tiny_skia::Color::from_rgba8(r, g, b, a)
    }
}

fn channel_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb8_roundtrip_is_exact() {
        let sage = Color::from_rgb8(166, 199, 163);
        assert_eq!(sage.to_rgba8(), [166, 199, 163, 255]);
    }

    #[test]
    fn test_from_hex_formats() {
        assert_eq!(Color::from_hex(0xFDF8F3).to_rgb8(), [253, 248, 243]);
        assert_eq!(Color::from_hex(0x11223344).to_rgba8(), [0x11, 0x22, 0x33, 0x44]);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(Color::parse_hex("#A6C7A3").unwrap().to_rgb8(), [166, 199, 163]);
        assert_eq!(Color::parse_hex("4f5b4d").unwrap().to_rgb8(), [79, 91, 77]);
        assert_eq!(Color::parse_hex("#00000080").unwrap().to_rgba8()[3], 128);
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert!(Color::parse_hex("#12345").is_err());
        assert!(Color::parse_hex("#GGGGGG").is_err());
        assert!(Color::parse_hex("").is_err());
    }
}
