//! Glyph registry: immutable id → descriptor mapping.
//!
//! A [`GlyphRegistry`] is validated once at construction and never mutated
//! afterwards. Lookups are exact on the canonical id; legacy spellings go
//! through [`crate::id::canonicalize`] first (the resolver does this).
//!
//! The built-in table is available process-wide through
//! [`GlyphRegistry::builtin`]. Registries can also be read from a JSON
//! document of the form `{ "version", "description", "glyphs": [...] }`.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::category::GlyphCategory;
use crate::descriptor::{AssetRef, GlyphDescriptor, GlyphMetadata};
use crate::error::{RegistryError, RegistryResult};
use crate::id;

/// Immutable registry of glyph descriptors, in insertion order.
pub struct GlyphRegistry {
    entries: Vec<GlyphDescriptor>,
    /// Canonical id → index into `entries`.
    index: HashMap<String, usize>,
}

static BUILTIN: OnceLock<GlyphRegistry> = OnceLock::new();

impl GlyphRegistry {
    /// Build a registry, validating every entry.
    pub fn new(entries: Vec<GlyphDescriptor>) -> RegistryResult<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        let mut texts: HashMap<&str, &str> = HashMap::with_capacity(entries.len());

        for (i, d) in entries.iter().enumerate() {
            validate_entry(d)?;
            if index.insert(d.id.clone(), i).is_some() {
                return Err(RegistryError::DuplicateId { id: d.id.clone() });
            }
            if let Some(existing) = texts.insert(d.text.as_str(), d.id.as_str()) {
                return Err(RegistryError::DuplicateText {
                    text: d.text.clone(),
                    id: d.id.clone(),
                    existing: existing.to_string(),
                });
            }
        }
        for d in &entries {
            if let Some(related) = d
                .metadata
                .related_glyphs
                .iter()
                .find(|r| !index.contains_key(r.as_str()))
            {
                return Err(RegistryError::UnknownRelatedGlyph {
                    id: d.id.clone(),
                    related: related.clone(),
                });
            }
        }

        tracing::debug!(glyphs = entries.len(), "glyph registry built");
        Ok(Self { entries, index })
    }

    /// The built-in registry, initialized on first access.
    ///
    /// # Panics
    ///
    /// Panics if the built-in table fails validation. This happens before any
    /// lookup can be served, and the unit tests assert the table is valid.
    pub fn builtin() -> &'static GlyphRegistry {
        BUILTIN.get_or_init(|| {
            GlyphRegistry::new(catalog::builtin_descriptors())
                .unwrap_or_else(|e| panic!("built-in glyph table is malformed: {e}"))
        })
    }

    /// Look up a descriptor by canonical id.
    pub fn lookup(&self, id: &str) -> Option<&GlyphDescriptor> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Glyphs in `category`, in insertion order.
    pub fn list_by_category(&self, category: GlyphCategory) -> Vec<&GlyphDescriptor> {
        self.entries
            .iter()
            .filter(|d| d.category == category)
            .collect()
    }

    /// Glyphs carrying `tag` (case-insensitive), in insertion order.
    pub fn search_by_tag(&self, tag: &str) -> Vec<&GlyphDescriptor> {
        self.entries
            .iter()
            .filter(|d| d.metadata.has_tag(tag))
            .collect()
    }

    /// Descriptors named in a glyph's `related_glyphs`. Empty for unknown ids.
    pub fn related(&self, id: &str) -> Vec<&GlyphDescriptor> {
        self.lookup(id)
            .map(|d| {
                d.metadata
                    .related_glyphs
                    .iter()
                    .filter_map(|r| self.lookup(r))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Every glyph, in insertion order.
    pub fn list_all(&self) -> &[GlyphDescriptor] {
        &self.entries
    }

    /// Every canonical id, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|d| d.id.as_str())
    }

    /// Categories that have at least one glyph, in canonical order.
    pub fn categories(&self) -> Vec<GlyphCategory> {
        GlyphCategory::ALL
            .into_iter()
            .filter(|c| self.entries.iter().any(|d| d.category == *c))
            .collect()
    }

    /// Number of glyphs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // -----------------------------------------------------------------------
    // Documents
    // -----------------------------------------------------------------------

    /// Parse and validate a registry JSON document.
    pub fn from_json(json: &str) -> RegistryResult<Self> {
        let doc: RegistryDocument = serde_json::from_str(json).map_err(|e| {
            RegistryError::Parse {
                message: e.to_string(),
            }
        })?;
        Self::from_document(doc)
    }

    /// Read a registry JSON document from disk.
    pub fn load(path: &Path) -> RegistryResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RegistryError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    /// Build a registry from an already-parsed document.
    pub fn from_document(doc: RegistryDocument) -> RegistryResult<Self> {
        let entries = doc
            .glyphs
            .into_iter()
            .map(DocumentGlyph::into_descriptor)
            .collect::<RegistryResult<Vec<_>>>()?;
        Self::new(entries)
    }

    /// Export as a registry document.
    pub fn to_document(&self, version: &str, description: &str) -> RegistryDocument {
        RegistryDocument {
            version: version.to_string(),
            description: description.to_string(),
            glyphs: self.entries.iter().map(DocumentGlyph::from).collect(),
        }
    }

    /// Export as pretty-printed JSON.
    pub fn to_json(&self, version: &str, description: &str) -> RegistryResult<String> {
        serde_json::to_string_pretty(&self.to_document(version, description)).map_err(|e| {
            RegistryError::Parse {
                message: e.to_string(),
            }
        })
    }
}

impl std::fmt::Debug for GlyphRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphRegistry")
            .field("count", &self.len())
            .finish()
    }
}

/// Checks that apply to a single entry in isolation.
fn validate_entry(d: &GlyphDescriptor) -> RegistryResult<()> {
    let empty = |field: &'static str| RegistryError::EmptyField {
        id: d.id.clone(),
        field,
    };

    if d.id.trim().is_empty() {
        return Err(empty("id"));
    }
    if d.display_name.trim().is_empty() {
        return Err(empty("display name"));
    }
    if d.description.trim().is_empty() {
        return Err(empty("description"));
    }
    if d.asset.is_empty() {
        return Err(empty("asset"));
    }
    if d.unicode.is_empty() {
        return Err(empty("unicode representation"));
    }
    if d.text.is_empty() {
        return Err(empty("text representation"));
    }

    if !id::is_canonical(&d.id) {
        return Err(RegistryError::InvalidIdFormat { id: d.id.clone() });
    }
    let prefix = d.id.split_once('.').map(|(p, _)| p).unwrap_or_default();
    if prefix != d.category.as_str() {
        return Err(RegistryError::CategoryMismatch {
            id: d.id.clone(),
            category: d.category.to_string(),
            prefix: prefix.to_string(),
        });
    }

    if !is_text_keyword(&d.text) {
        return Err(RegistryError::InvalidTextFormat {
            id: d.id.clone(),
            text: d.text.clone(),
        });
    }
    Ok(())
}

fn is_text_keyword(text: &str) -> bool {
    text.len() > 2
        && text.starts_with('[')
        && text.ends_with(']')
        && text.to_uppercase() == text
}

// ---------------------------------------------------------------------------
// Document format
// ---------------------------------------------------------------------------

/// Serialized registry: a version string, a description, and the glyph list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryDocument {
    pub version: String,
    pub description: String,
    pub glyphs: Vec<DocumentGlyph>,
}

/// One glyph as it appears in a registry document.
///
/// The category stays a string here so that values outside the closed set
/// surface as [`RegistryError::UnknownCategory`] instead of a parse error.
///
/// `asset` may be omitted. The artwork then comes from the `svg`
/// representation, or failing that from `assets/svg/<hyphenated-id>.svg`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentGlyph {
    pub id: String,
    pub category: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<AssetRef>,
    pub representations: Representations,
    #[serde(default, skip_serializing_if = "GlyphMetadata::is_empty")]
    pub metadata: GlyphMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Representations {
    pub unicode: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    /// SVG markup or a path to an SVG file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
}

impl DocumentGlyph {
    fn into_descriptor(self) -> RegistryResult<GlyphDescriptor> {
        let category = self.category.parse::<GlyphCategory>()?;
        let asset = match (self.asset, self.representations.svg.as_deref()) {
            (Some(asset), _) => asset,
            (None, Some(svg)) if !svg.trim().is_empty() => AssetRef::from_svg_representation(svg),
            (None, _) => AssetRef::svg(&id::to_hyphenated(&self.id)),
        };
        Ok(GlyphDescriptor {
            id: self.id,
            display_name: self.name,
            description: self.description,
            category,
            asset,
            unicode: self.representations.unicode,
            text: self.representations.text,
            emoji: self.representations.emoji,
            metadata: self.metadata,
        })
    }
}

impl From<&GlyphDescriptor> for DocumentGlyph {
    fn from(d: &GlyphDescriptor) -> Self {
        Self {
            id: d.id.clone(),
            category: d.category.as_str().to_string(),
            name: d.display_name.clone(),
            description: d.description.clone(),
            asset: Some(d.asset.clone()),
            representations: Representations {
                unicode: d.unicode.clone(),
                text: d.text.clone(),
                emoji: d.emoji.clone(),
                svg: None,
            },
            metadata: d.metadata.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Lint-style validation
// ---------------------------------------------------------------------------

/// Outcome of [`validate_document`]: hard errors plus advisory warnings.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ValidationReport {
    pub glyph_count: usize,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Accessibility descriptions shorter than this draw a warning.
const MIN_ACCESSIBILITY_LEN: usize = 10;

/// Check a whole document, collecting every problem instead of stopping at
/// the first. Errors are exactly the conditions [`GlyphRegistry::new`]
/// rejects; warnings are advisory.
pub fn validate_document(doc: &RegistryDocument) -> ValidationReport {
    let mut report = ValidationReport {
        glyph_count: doc.glyphs.len(),
        ..Default::default()
    };

    if doc.glyphs.is_empty() {
        report.warnings.push("registry contains no glyphs".into());
    }

    let mut seen_ids = HashSet::new();
    let mut seen_text: HashMap<&str, &str> = HashMap::new();
    let mut seen_unicode: HashMap<&str, &str> = HashMap::new();

    for glyph in &doc.glyphs {
        match glyph.clone().into_descriptor() {
            Ok(d) => {
                if let Err(e) = validate_entry(&d) {
                    report.errors.push(e.to_string());
                }
            }
            Err(e) => report.errors.push(format!("glyph \"{}\": {e}", glyph.id)),
        }

        if !seen_ids.insert(glyph.id.as_str()) {
            report
                .errors
                .push(RegistryError::DuplicateId { id: glyph.id.clone() }.to_string());
        }

        let text = glyph.representations.text.as_str();
        if !text.is_empty() {
            if let Some(existing) = seen_text.insert(text, glyph.id.as_str()) {
                report.errors.push(
                    RegistryError::DuplicateText {
                        text: text.to_string(),
                        id: glyph.id.clone(),
                        existing: existing.to_string(),
                    }
                    .to_string(),
                );
            }
        }

        let unicode = glyph.representations.unicode.as_str();
        if !unicode.is_empty() {
            if let Some(existing) = seen_unicode.insert(unicode, glyph.id.as_str()) {
                report.warnings.push(format!(
                    "unicode representation \"{unicode}\" is shared by \"{}\" and \"{existing}\"",
                    glyph.id
                ));
            }
        }

        match glyph.metadata.accessibility.as_deref().map(str::trim) {
            None | Some("") => report.warnings.push(format!(
                "glyph \"{}\" is missing an accessibility description",
                glyph.id
            )),
            Some(text) if text.chars().count() < MIN_ACCESSIBILITY_LEN => {
                report.warnings.push(format!(
                    "glyph \"{}\" accessibility description is too short",
                    glyph.id
                ))
            }
            Some(_) => {}
        }
    }

    for glyph in &doc.glyphs {
        for related in &glyph.metadata.related_glyphs {
            if !seen_ids.contains(related.as_str()) {
                report.errors.push(
                    RegistryError::UnknownRelatedGlyph {
                        id: glyph.id.clone(),
                        related: related.clone(),
                    }
                    .to_string(),
                );
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(id: &str, category: GlyphCategory, text: &str) -> GlyphDescriptor {
        GlyphDescriptor {
            id: id.to_string(),
            display_name: "Test".into(),
            description: "A test glyph".into(),
            category,
            asset: AssetRef::svg("test"),
            unicode: "*".into(),
            text: text.to_string(),
            emoji: None,
            metadata: GlyphMetadata::default(),
        }
    }

    #[test]
    fn builtin_is_valid_and_complete() {
        let reg = GlyphRegistry::new(catalog::builtin_descriptors()).unwrap();
        assert_eq!(reg.len(), 32);
        assert_eq!(GlyphRegistry::builtin().len(), 32);
    }

    #[test]
    fn lookup_hits_and_misses() {
        let reg = GlyphRegistry::builtin();
        let d = reg.lookup("state.verified").unwrap();
        assert_eq!(d.description, "Verified state");
        assert!(reg.lookup("state-verified").is_none());
        assert!(reg.lookup("nonexistent.glyph").is_none());
    }

    #[test]
    fn list_by_category_is_stable_and_exact() {
        let reg = GlyphRegistry::builtin();
        let first: Vec<_> = reg
            .list_by_category(GlyphCategory::Continuity)
            .iter()
            .map(|d| d.id.clone())
            .collect();
        let second: Vec<_> = reg
            .list_by_category(GlyphCategory::Continuity)
            .iter()
            .map(|d| d.id.clone())
            .collect();
        assert_eq!(first, second);
        assert_eq!(
            first,
            [
                "continuity.chain",
                "continuity.link",
                "continuity.infinity",
                "continuity.broken"
            ]
        );
    }

    #[test]
    fn ids_are_unique() {
        let reg = GlyphRegistry::builtin();
        let ids: HashSet<_> = reg.ids().collect();
        assert_eq!(ids.len(), reg.len());
    }

    #[test]
    fn categories_in_canonical_order() {
        let reg = GlyphRegistry::builtin();
        assert_eq!(reg.categories(), GlyphCategory::ALL.to_vec());

        let small = GlyphRegistry::new(vec![glyph("data.x", GlyphCategory::Data, "[X]")]).unwrap();
        assert_eq!(small.categories(), vec![GlyphCategory::Data]);
    }

    #[test]
    fn duplicate_id_rejected() {
        let result = GlyphRegistry::new(vec![
            glyph("state.a", GlyphCategory::State, "[A]"),
            glyph("state.a", GlyphCategory::State, "[B]"),
        ]);
        assert!(matches!(result, Err(RegistryError::DuplicateId { id }) if id == "state.a"));
    }

    #[test]
    fn duplicate_text_rejected() {
        let result = GlyphRegistry::new(vec![
            glyph("state.a", GlyphCategory::State, "[A]"),
            glyph("state.b", GlyphCategory::State, "[A]"),
        ]);
        assert!(matches!(result, Err(RegistryError::DuplicateText { .. })));
    }

    #[test]
    fn empty_fields_rejected() {
        let mut g = glyph("state.a", GlyphCategory::State, "[A]");
        g.description = "   ".into();
        assert!(matches!(
            GlyphRegistry::new(vec![g]),
            Err(RegistryError::EmptyField { field: "description", .. })
        ));

        let mut g = glyph("state.a", GlyphCategory::State, "[A]");
        g.asset = AssetRef::Path(String::new());
        assert!(matches!(
            GlyphRegistry::new(vec![g]),
            Err(RegistryError::EmptyField { field: "asset", .. })
        ));
    }

    #[test]
    fn malformed_ids_rejected() {
        let g = glyph("state-a", GlyphCategory::State, "[A]");
        assert!(matches!(
            GlyphRegistry::new(vec![g]),
            Err(RegistryError::InvalidIdFormat { .. })
        ));

        let g = glyph("state.foo-bar", GlyphCategory::State, "[A]");
        assert!(matches!(
            GlyphRegistry::new(vec![g]),
            Err(RegistryError::InvalidIdFormat { id }) if id == "state.foo-bar"
        ));

        let g = glyph("events.a", GlyphCategory::State, "[A]");
        assert!(matches!(
            GlyphRegistry::new(vec![g]),
            Err(RegistryError::CategoryMismatch { prefix, .. }) if prefix == "events"
        ));
    }

    #[test]
    fn text_must_be_uppercase_keyword() {
        let g = glyph("state.a", GlyphCategory::State, "[lower]");
        assert!(matches!(
            GlyphRegistry::new(vec![g]),
            Err(RegistryError::InvalidTextFormat { .. })
        ));
        let g = glyph("state.a", GlyphCategory::State, "PLAIN");
        assert!(GlyphRegistry::new(vec![g]).is_err());
    }

    #[test]
    fn json_round_trip_preserves_order() {
        let reg = GlyphRegistry::builtin();
        let json = reg.to_json("1.0.0", "BeaconGlyphs registry").unwrap();
        let back = GlyphRegistry::from_json(&json).unwrap();
        assert_eq!(back.list_all(), reg.list_all());
    }

    #[test]
    fn unknown_category_in_document() {
        let json = r#"{
            "version": "1.0.0",
            "description": "test",
            "glyphs": [{
                "id": "weather.rain",
                "category": "weather",
                "name": "Rain",
                "description": "It is raining",
                "asset": { "kind": "path", "value": "assets/svg/rain.svg" },
                "representations": { "unicode": "r", "text": "[RAIN]" }
            }]
        }"#;
        assert!(matches!(
            GlyphRegistry::from_json(json),
            Err(RegistryError::UnknownCategory { category }) if category == "weather"
        ));
    }

    #[test]
    fn garbage_document_is_a_parse_error() {
        assert!(matches!(
            GlyphRegistry::from_json("{ not json"),
            Err(RegistryError::Parse { .. })
        ));
    }

    #[test]
    fn validation_report_collects_everything() {
        let reg = GlyphRegistry::builtin();
        let mut doc = reg.to_document("1.0.0", "test");
        assert!(validate_document(&doc).is_valid());

        let mut dup = doc.glyphs[0].clone();
        dup.representations.unicode = doc.glyphs[1].representations.unicode.clone();
        dup.metadata.accessibility = Some("Short".into());
        doc.glyphs.push(dup);

        let report = validate_document(&doc);
        assert!(!report.is_valid());
        assert_eq!(report.glyph_count, 33);
        // Duplicate id and duplicate text.
        assert_eq!(report.errors.len(), 2);
        assert!(report.warnings.iter().any(|w| w.contains("too short")));
        assert!(report.warnings.iter().any(|w| w.contains("shared by")));
    }

    /// Tooling-style document: no `asset`, emoji and svg representations,
    /// and a metadata block.
    const TOOLING_DOCUMENT: &str = r#"{
        "version": "1.0.0",
        "description": "tooling export",
        "glyphs": [
            {
                "id": "data.memory",
                "category": "data",
                "name": "Memory",
                "description": "Stored memory",
                "representations": {
                    "unicode": "M",
                    "text": "[MEMORY]",
                    "emoji": "\ud83d\udcbe"
                },
                "metadata": {
                    "tags": ["data", "memory", "storage"],
                    "relatedGlyphs": ["data.stream"],
                    "accessibility": "Stored memory, a persistent data record",
                    "useCases": ["caches", "long-term recall"]
                }
            },
            {
                "id": "data.stream",
                "category": "data",
                "name": "Stream",
                "description": "Flowing data",
                "representations": {
                    "unicode": "~",
                    "text": "[STREAM]",
                    "svg": "<svg viewBox=\"0 0 24 24\"><path d=\"M2 12h20\"/></svg>"
                },
                "metadata": { "tags": ["data", "flow"] }
            }
        ]
    }"#;

    #[test]
    fn tooling_document_without_asset_loads() {
        let reg = GlyphRegistry::from_json(TOOLING_DOCUMENT).unwrap();
        assert_eq!(reg.len(), 2);

        let memory = reg.lookup("data.memory").unwrap();
        assert_eq!(memory.asset, AssetRef::svg("data-memory"));
        assert_eq!(memory.emoji.as_deref(), Some("\u{1f4be}"));
        assert_eq!(memory.metadata.use_cases, ["caches", "long-term recall"]);
        assert_eq!(memory.metadata.related_glyphs, ["data.stream"]);

        let stream = reg.lookup("data.stream").unwrap();
        assert!(matches!(&stream.asset, AssetRef::Inline(svg) if svg.starts_with("<svg")));
        assert_eq!(stream.metadata.accessibility, None);
    }

    #[test]
    fn metadata_survives_export() {
        let reg = GlyphRegistry::from_json(TOOLING_DOCUMENT).unwrap();
        let back = GlyphRegistry::from_json(&reg.to_json("1.0.0", "again").unwrap()).unwrap();
        assert_eq!(back.list_all(), reg.list_all());
    }

    #[test]
    fn search_by_tag_matches_case_insensitively() {
        let reg = GlyphRegistry::from_json(TOOLING_DOCUMENT).unwrap();
        let ids = |tag: &str| -> Vec<String> {
            reg.search_by_tag(tag).iter().map(|d| d.id.clone()).collect()
        };
        assert_eq!(ids("data"), ["data.memory", "data.stream"]);
        assert_eq!(ids("STORAGE"), ["data.memory"]);
        assert!(ids("weather").is_empty());

        let builtin = GlyphRegistry::builtin();
        assert!(builtin.search_by_tag("continuity").iter().any(|d| d.id == "continuity.chain"));
        assert!(builtin.search_by_tag("trust").iter().any(|d| d.id == "state.verified"));
    }

    #[test]
    fn related_glyphs_resolve_within_registry() {
        let reg = GlyphRegistry::builtin();
        let related: Vec<_> = reg.related("continuity.chain").iter().map(|d| d.id.as_str()).collect();
        assert_eq!(related, ["continuity.link", "continuity.broken"]);
        assert!(reg.related("nonexistent.glyph").is_empty());
    }

    #[test]
    fn dangling_related_glyph_rejected() {
        let mut g = glyph("state.a", GlyphCategory::State, "[A]");
        g.metadata.related_glyphs = vec!["state.missing".into()];
        assert!(matches!(
            GlyphRegistry::new(vec![g.clone()]),
            Err(RegistryError::UnknownRelatedGlyph { related, .. }) if related == "state.missing"
        ));

        let doc = RegistryDocument {
            version: "1.0.0".into(),
            description: "dangling".into(),
            glyphs: vec![DocumentGlyph::from(&g)],
        };
        let report = validate_document(&doc);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("state.missing"));
    }

    #[test]
    fn accessibility_warnings_follow_metadata() {
        let mut missing = glyph("state.a", GlyphCategory::State, "[A]");
        missing.description = "Long enough description".into();
        let mut short = glyph("state.b", GlyphCategory::State, "[B]");
        short.unicode = "b".into();
        short.metadata.accessibility = Some("Tiny".into());
        let mut fine = glyph("state.c", GlyphCategory::State, "[C]");
        fine.unicode = "c".into();
        fine.description = "Short".into();
        fine.metadata.accessibility = Some("A complete accessibility text".into());

        let doc = RegistryDocument {
            version: "1.0.0".into(),
            description: "a11y".into(),
            glyphs: [&missing, &short, &fine].into_iter().map(DocumentGlyph::from).collect(),
        };
        let report = validate_document(&doc);
        assert!(report.is_valid());
        assert_eq!(
            report.warnings,
            [
                "glyph \"state.a\" is missing an accessibility description",
                "glyph \"state.b\" accessibility description is too short",
            ]
        );
    }
}
