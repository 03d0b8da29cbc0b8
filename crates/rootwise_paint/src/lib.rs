//! Rootwise Paint
//!
//! A small 2D drawing API for generating raster assets.
//!
//! # Features
//!
//! - Shape primitives (rect, ellipse, line)
//! - Recorded paint commands, replayable onto any canvas
//! - Colored alpha masks for glyphs
//! - CPU rasterization through tiny-skia and PNG encoding through `image`

pub mod canvas;
pub mod color;
pub mod context;
pub mod error;
pub mod mask;
pub mod primitives;

pub use canvas::Canvas;
pub use color::Color;
pub use context::{PaintCommand, PaintContext, StrokeStyle};
pub use error::{PaintError, Result};
pub use mask::AlphaMask;
pub use primitives::*;
