//! Glyph descriptors and asset references.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::category::GlyphCategory;

/// Where the vector artwork for a glyph lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum AssetRef {
    /// A path to an SVG file, relative to the asset base.
    Path(String),
    /// Inline SVG markup.
    Inline(String),
}

impl AssetRef {
    /// Shorthand for the conventional `assets/svg/<file>.svg` location.
    pub fn svg(file_stem: &str) -> Self {
        AssetRef::Path(format!("assets/svg/{file_stem}.svg"))
    }

    pub fn is_empty(&self) -> bool {
        match self {
            AssetRef::Path(p) | AssetRef::Inline(p) => p.trim().is_empty(),
        }
    }

    /// The path, if this asset is file-backed.
    pub fn path(&self) -> Option<&str> {
        match self {
            AssetRef::Path(p) => Some(p),
            AssetRef::Inline(_) => None,
        }
    }

    /// Interpret an `svg` representation from a registry document: markup
    /// is inline, anything else is a path.
    pub fn from_svg_representation(svg: &str) -> Self {
        if svg.trim_start().starts_with('<') {
            AssetRef::Inline(svg.to_string())
        } else {
            AssetRef::Path(svg.to_string())
        }
    }

    /// Resolve a file-backed asset against a base directory. Absolute paths
    /// are returned as-is; inline assets yield `None`.
    pub fn resolve_against(&self, base: &Path) -> Option<PathBuf> {
        let path = Path::new(self.path()?);
        if path.is_absolute() {
            Some(path.to_path_buf())
        } else {
            Some(base.join(path))
        }
    }
}

/// Search and cross-reference data attached to a glyph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlyphMetadata {
    pub tags: Vec<String>,
    /// Canonical ids of glyphs that belong with this one.
    pub related_glyphs: Vec<String>,
    /// Long-form accessibility description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub use_cases: Vec<String>,
}

impl GlyphMetadata {
    pub fn is_empty(&self) -> bool {
        self == &GlyphMetadata::default()
    }

    /// Case-insensitive tag match.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// Immutable metadata for one glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlyphDescriptor {
    /// Canonical id, `<category>.<name>`.
    pub id: String,
    /// Human-readable name shown in catalogs and as image alt text.
    pub display_name: String,
    /// Accessibility text; the default label of a rendered glyph.
    pub description: String,
    pub category: GlyphCategory,
    pub asset: AssetRef,
    /// Single-character representation for terminals.
    pub unicode: String,
    /// Plain-text representation, `[KEYWORD]`.
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(default)]
    pub metadata: GlyphMetadata,
}

impl GlyphDescriptor {
    /// The name segment of the id (`continuity.chain` → `chain`).
    pub fn name(&self) -> &str {
        self.id
            .split_once('.')
            .map(|(_, name)| name)
            .unwrap_or(&self.id)
    }
}
