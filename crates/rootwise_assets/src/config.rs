//! Asset generator configuration file handling

use anyhow::{Context, Result};
use rootwise_paint::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::design::Design;
use crate::palette::Palette;
use crate::renderer::{FontSource, DEFAULT_FONT_PATH};

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "assets.toml";

/// Top-level configuration (assets.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AssetsConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub design: DesignConfig,
    #[serde(default)]
    pub font: FontConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
}

/// Output location
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory the PNG files are written to
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("assets")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DesignConfig {
    #[serde(default)]
    pub variant: Design,
}

/// Font lookup
#[derive(Debug, Deserialize, Serialize)]
pub struct FontConfig {
    /// Font file tried first
    #[serde(default = "default_font_path")]
    pub path: Option<PathBuf>,
    /// System font family tried when the file is unavailable
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default = "default_font_weight")]
    pub weight: u16,
}

fn default_font_path() -> Option<PathBuf> {
    Some(PathBuf::from(DEFAULT_FONT_PATH))
}

fn default_font_weight() -> u16 {
    700
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: default_font_path(),
            family: None,
            weight: default_font_weight(),
        }
    }
}

/// Optional `#RRGGBB` overrides of the design palette
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PaletteConfig {
    /// Sets both backgrounds unless the specific key is also given
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub icon_background: Option<String>,
    #[serde(default)]
    pub splash_background: Option<String>,
    #[serde(default)]
    pub leaf: Option<String>,
    #[serde(default)]
    pub vein: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

impl PaletteConfig {
    /// Apply overrides on top of `base`
    pub fn apply(&self, base: Palette) -> Result<Palette> {
        fn pick(value: &Option<String>, fallback: Color, field: &str) -> Result<Color> {
            match value {
                Some(literal) => Color::parse_hex(literal)
                    .with_context(|| format!("Invalid color for palette.{}", field)),
                None => Ok(fallback),
            }
        }

        let icon_background = pick(&self.background, base.icon_background, "background")?;
        let splash_background = pick(&self.background, base.splash_background, "background")?;

        Ok(Palette {
            icon_background: pick(&self.icon_background, icon_background, "icon_background")?,
            splash_background: pick(
                &self.splash_background,
                splash_background,
                "splash_background",
            )?,
            leaf: pick(&self.leaf, base.leaf, "leaf")?,
            vein: pick(&self.vein, base.vein, "vein")?,
            text: pick(&self.text, base.text, "text")?,
        })
    }
}

impl AssetsConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Load `path` if given, otherwise `assets.toml` from `dir` if it exists,
    /// otherwise defaults
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!("Using config {}", candidate.display());
            return Self::load(&candidate);
        }

        Ok(Self::default())
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: AssetsConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Resolved palette: design defaults plus overrides
    pub fn palette(&self) -> Result<Palette> {
        self.palette
            .apply(Palette::for_design(self.design.variant))
    }

    pub fn font_source(&self) -> FontSource {
        FontSource {
            path: self.font.path.clone(),
            family: self.font.family.clone(),
            weight: self.font.weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{CREAM, SAGE};

    #[test]
    fn test_empty_config_matches_defaults() {
        let config = AssetsConfig::parse("").unwrap();
        assert_eq!(config.output.dir, PathBuf::from("assets"));
        assert_eq!(config.design.variant, Design::Leaf);
        assert_eq!(config.font_source(), FontSource::default());
        assert_eq!(config.palette().unwrap(), Palette::for_design(Design::Leaf));
    }

    #[test]
    fn test_full_config() {
        let config = AssetsConfig::parse(
            r##"
            [output]
            dir = "build/branding"

            [design]
            variant = "monogram"

            [font]
            path = "/opt/fonts/Brand.ttf"
            family = "DejaVu Sans"
            weight = 400

            [palette]
            text = "#112233"
            "##,
        )
        .unwrap();

        assert_eq!(config.output.dir, PathBuf::from("build/branding"));
        assert_eq!(config.design.variant, Design::Monogram);

        let fonts = config.font_source();
        assert_eq!(fonts.path, Some(PathBuf::from("/opt/fonts/Brand.ttf")));
        assert_eq!(fonts.family.as_deref(), Some("DejaVu Sans"));
        assert_eq!(fonts.weight, 400);

        let palette = config.palette().unwrap();
        assert_eq!(palette.icon_background, SAGE);
        assert_eq!(palette.splash_background, CREAM);
        assert_eq!(palette.text.to_rgb8(), [0x11, 0x22, 0x33]);
    }

    #[test]
    fn test_bad_palette_color() {
        let config = AssetsConfig::parse("[palette]\nleaf = \"green\"\n").unwrap();
        let err = config.palette().unwrap_err();
        assert!(format!("{:#}", err).contains("palette.leaf"));
    }

    #[test]
    fn test_unknown_design_is_rejected() {
        assert!(AssetsConfig::parse("[design]\nvariant = \"sparkles\"\n").is_err());
    }

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AssetsConfig::discover(None, dir.path()).unwrap();
        assert_eq!(config.output.dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_discover_picks_up_assets_toml() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "[design]\nvariant = \"monogram\"\n",
        )
        .unwrap();
        let config = AssetsConfig::discover(None, dir.path()).unwrap();
        assert_eq!(config.design.variant, Design::Monogram);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = AssetsConfig::discover(Some(&missing), dir.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_background_sets_both_backgrounds() {
        let config = AssetsConfig::parse("[palette]\nbackground = \"#000000\"\n").unwrap();
        let palette = config.palette().unwrap();
        assert_eq!(palette.icon_background.to_rgb8(), [0, 0, 0]);
        assert_eq!(palette.splash_background.to_rgb8(), [0, 0, 0]);
    }

    #[test]
    fn test_specific_background_wins() {
        let config = AssetsConfig::parse(
            r##"
            [palette]
            background = "#000000"
            splash_background = "#FFFFFF"
            "##,
        )
        .unwrap();
        let palette = config.palette().unwrap();
        assert_eq!(palette.icon_background.to_rgb8(), [0, 0, 0]);
        assert_eq!(palette.splash_background.to_rgb8(), [255, 255, 255]);
    }

    #[test]
    fn test_bad_background_names_the_key() {
        let config = AssetsConfig::parse("[palette]\nbackground = \"#12\"\n").unwrap();
        let err = config.palette().unwrap_err();
        assert!(format!("{:#}", err).contains("palette.background"));
    }
}
