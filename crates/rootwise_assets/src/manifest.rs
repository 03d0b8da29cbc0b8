//! The standard asset set

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AssetError, Result};
use crate::renderer::{AssetRenderer, SPLASH_HEIGHT, SPLASH_WIDTH};

/// One of the generated images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Icon,
    AdaptiveIcon,
    Splash,
    Favicon,
}

impl AssetKind {
    /// Generation order
    pub const ALL: [AssetKind; 4] = [
        AssetKind::Icon,
        AssetKind::AdaptiveIcon,
        AssetKind::Splash,
        AssetKind::Favicon,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            AssetKind::Icon => "icon.png",
            AssetKind::AdaptiveIcon => "adaptive-icon.png",
            AssetKind::Splash => "splash.png",
            AssetKind::Favicon => "favicon.png",
        }
    }

    /// Pixel dimensions as (width, height)
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            AssetKind::Icon | AssetKind::AdaptiveIcon => (1024, 1024),
            AssetKind::Splash => (SPLASH_WIDTH, SPLASH_HEIGHT),
            AssetKind::Favicon => (48, 48),
        }
    }
}

/// A file written by [`generate_all`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAsset {
    pub kind: AssetKind,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Generate every asset into `out_dir`, calling `on_created` after each file is written.
///
/// `out_dir` is created if missing. Existing files are overwritten.
pub fn generate_each(
    renderer: &mut AssetRenderer,
    out_dir: impl AsRef<Path>,
    mut on_created: impl FnMut(&GeneratedAsset),
) -> Result<Vec<GeneratedAsset>> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir).map_err(|source| AssetError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut generated = Vec::with_capacity(AssetKind::ALL.len());
    for kind in AssetKind::ALL {
        let path = out_dir.join(kind.file_name());
        let canvas = renderer.render(kind)?;
        canvas.save_png(&path)?;

        let asset = GeneratedAsset {
            kind,
            path,
            width: canvas.width(),
            height: canvas.height(),
        };
        tracing::debug!("{:?} -> {}", kind, asset.path.display());
        on_created(&asset);
        generated.push(asset);
    }

    Ok(generated)
}

/// Generate every asset into `out_dir`
pub fn generate_all(
    renderer: &mut AssetRenderer,
    out_dir: impl AsRef<Path>,
) -> Result<Vec<GeneratedAsset>> {
    generate_each(renderer, out_dir, |_| {})
}
