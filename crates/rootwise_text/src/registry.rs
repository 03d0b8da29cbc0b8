//! Font registry for font file loading, family lookup and caching
//!
//! Uses fontdb to resolve families. Every lookup result is cached, including
//! misses, so a missing font is only reported once.

use crate::font::FontFace;
use crate::{Result, TextError};
use fontdb::{Database, Family, Query, Source, Stretch, Style, Weight};
use rustc_hash::FxHashMap;
use std::path::Path;
use std::sync::Arc;

/// Font registry that resolves and caches font faces
pub struct FontRegistry {
    /// fontdb database with every face known to the registry
    db: Database,
    /// Cached FontFace instances (Some = found, None = not found)
    faces: FxHashMap<String, Option<Arc<FontFace>>>,
}

impl FontRegistry {
    /// Create an empty registry (no system scan)
    pub fn new() -> Self {
        Self {
            db: Database::new(),
            faces: FxHashMap::default(),
        }
    }

    /// Create a registry and load all system fonts
    pub fn with_system_fonts() -> Self {
        let mut registry = Self::new();
        registry.db.load_system_fonts();
        tracing::debug!("Loaded {} system font faces", registry.db.len());
        registry
    }

    /// Load the first face of a font file at a fixed path
    pub fn load_file(&mut self, path: &Path) -> Result<Arc<FontFace>> {
        let cache_key = format!("__file_{}", path.display());

        if let Some(cached) = self.faces.get(&cache_key) {
            return cached.clone().ok_or_else(|| {
                TextError::FontLoadError(format!("Font file {} not found (cached)", path.display()))
            });
        }

        let loaded = std::fs::read(path)
            .map_err(|e| {
                TextError::FontLoadError(format!(
                    "Failed to read font file {}: {}",
                    path.display(),
                    e
                ))
            })
            .and_then(|data| {
                let face = FontFace::from_data(data.clone())?;
                // Register it so family queries can find it as well
                self.db.load_font_data(data);
                Ok(face)
            });

        match loaded {
            Ok(face) => {
                let face = Arc::new(face);
                self.faces.insert(cache_key, Some(Arc::clone(&face)));
                Ok(face)
            }
            Err(e) => {
                self.faces.insert(cache_key, None);
                Err(e)
            }
        }
    }

    /// Load a font by name with specific weight and italic style
    ///
    /// # Arguments
    /// * `name` - Font family name (e.g., "DejaVu Sans")
    /// * `weight` - Font weight (100-900, where 400 is normal, 700 is bold)
    /// * `italic` - Whether to load italic variant
    pub fn load_font_with_style(
        &mut self,
        name: &str,
        weight: u16,
        italic: bool,
    ) -> Result<Arc<FontFace>> {
        let cache_key = format!("{}:w{}:{}", name, weight, if italic { "i" } else { "n" });

        if let Some(cached) = self.faces.get(&cache_key) {
            return cached.clone().ok_or_else(|| {
                TextError::FontLoadError(format!(
                    "Font '{}' (weight={}, italic={}) not found (cached)",
                    name, weight, italic
                ))
            });
        }

        let styles: &[Style] = if italic {
            &[Style::Italic, Style::Oblique]
        } else {
            &[Style::Normal]
        };

        let id = styles.iter().find_map(|style| {
            self.db.query(&Query {
                families: &[Family::Name(name)],
                weight: Weight(weight),
                style: *style,
                stretch: Stretch::Normal,
            })
        });

        let Some(id) = id else {
            self.faces.insert(cache_key, None);
            return Err(TextError::FontLoadError(format!(
                "Font '{}' (weight={}, italic={}) not found",
                name, weight, italic
            )));
        };

        let face = Arc::new(self.load_face_by_id(id)?);
        self.faces.insert(cache_key, Some(Arc::clone(&face)));

        Ok(face)
    }

    /// Load a font face by fontdb ID
    fn load_face_by_id(&self, id: fontdb::ID) -> Result<FontFace> {
        let (src, face_index) = self
            .db
            .face_source(id)
            .ok_or_else(|| TextError::FontLoadError("Font source not found".to_string()))?;

        let data = match src {
            Source::File(path) => std::fs::read(&path).map_err(|e| {
                TextError::FontLoadError(format!("Failed to read font file {:?}: {}", path, e))
            })?,
            Source::Binary(arc) => arc.as_ref().as_ref().to_vec(),
            Source::SharedFile(_path, data) => data.as_ref().as_ref().to_vec(),
        };

        FontFace::from_data_with_index(data, face_index)
    }

    /// Resolve a typeface: the font file first, then the family name.
    ///
    /// Misses are logged, never returned as errors. `None` means the caller
    /// should use its built-in fallback.
    pub fn resolve(
        &mut self,
        path: Option<&Path>,
        family: Option<&str>,
        weight: u16,
    ) -> Option<Arc<FontFace>> {
        if let Some(path) = path {
            match self.load_file(path) {
                Ok(face) => {
                    tracing::debug!("Using font file {} ({})", path.display(), face.family());
                    return Some(face);
                }
                Err(e) => tracing::debug!("{}", e),
            }
        }

        if let Some(family) = family {
            match self.load_font_with_style(family, weight, false) {
                Ok(face) => {
                    tracing::debug!("Using font family '{}'", family);
                    return Some(face);
                }
                Err(e) => tracing::debug!("{}", e),
            }
        }

        None
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::new()
    }
}
