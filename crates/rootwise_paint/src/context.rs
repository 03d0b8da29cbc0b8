//! Paint context - the recording drawing API

use crate::color::Color;
use crate::mask::AlphaMask;
use crate::primitives::*;

/// Stroke style
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
    pub line_cap: LineCap,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            line_cap: LineCap::Butt,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// A paint command for the canvas
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    Clear {
        color: Color,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    FillEllipse {
        ellipse: Ellipse,
        color: Color,
    },
    StrokeLine {
        line: Line,
        style: StrokeStyle,
    },
    /// Coverage mask tinted with `color`, top-left corner at integer pixel `(x, y)`
    FillMask {
        x: i32,
        y: i32,
        mask: AlphaMask,
        color: Color,
    },
}

/// Records drawing calls so they can be inspected or replayed onto a [`crate::Canvas`]
pub struct PaintContext {
    commands: Vec<PaintCommand>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    // === Shape drawing ===

    pub fn clear(&mut self, color: Color) {
        self.commands.push(PaintCommand::Clear { color });
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.commands.push(PaintCommand::FillRect {
            rect: Rect::new(x, y, width, height),
            color,
        });
    }

    /// Fill the ellipse inscribed in `bounds`
    pub fn fill_ellipse(&mut self, bounds: Rect, color: Color) {
        self.commands.push(PaintCommand::FillEllipse {
            ellipse: Ellipse::inscribed(bounds),
            color,
        });
    }

    pub fn stroke_line(&mut self, start: Point, end: Point, color: Color, width: f32) {
        self.commands.push(PaintCommand::StrokeLine {
            line: Line::new(start, end),
            style: StrokeStyle {
                color,
                width,
                ..Default::default()
            },
        });
    }

    // === Masks ===

    pub fn fill_mask(&mut self, x: i32, y: i32, mask: AlphaMask, color: Color) {
        if mask.is_empty() {
            return;
        }
        self.commands.push(PaintCommand::FillMask { x, y, mask, color });
    }
}

impl Default for PaintContext {
    fn default() -> Self {
        Self::new()
    }
}
