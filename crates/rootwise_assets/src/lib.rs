//! Rootwise branding assets
//!
//! Procedurally renders the placeholder images a mobile build expects:
//! app icon, adaptive icon, splash screen and favicon. Each asset is drawn
//! from a few shapes and a line of text onto a fresh canvas and written as PNG.
//!
//! # Example
//!
//! ```ignore
//! use rootwise_assets::{generate_all, AssetRenderer, Design, FontSource};
//!
//! let mut renderer = AssetRenderer::with_font_source(Design::Leaf, &FontSource::default());
//! for asset in generate_all(&mut renderer, "assets")? {
//!     println!("{} {}x{}", asset.path.display(), asset.width, asset.height);
//! }
//! ```

pub mod config;
pub mod design;
pub mod error;
pub mod manifest;
pub mod palette;
pub mod renderer;

pub use config::AssetsConfig;
pub use design::Design;
pub use error::{AssetError, Result};
pub use manifest::{generate_all, generate_each, AssetKind, GeneratedAsset};
pub use palette::Palette;
pub use renderer::{AssetRenderer, FontSource, DEFAULT_FONT_PATH, SPLASH_HEIGHT, SPLASH_WIDTH};
