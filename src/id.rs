//! Glyph identifiers and the legacy id adapter.
//!
//! Canonical ids are dotted and lowercase: `<category>.<name>`, e.g.
//! `continuity.chain` or `brand.mirrordna`. Two older spellings are still
//! in circulation and are mapped onto the canonical form by [`canonicalize`]:
//!
//! - hyphenated symbolic names: `continuity-chain` → `continuity.chain`
//! - bare brand names: `mirrordna` → `brand.mirrordna`
//!
//! The adapter is a pure string transform. It never consults a registry, so
//! an adapted id may still miss.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::category::GlyphCategory;

static CANONICAL_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]+\.[a-z0-9_]+$").expect("canonical id pattern is valid")
});

/// Whether `id` is in canonical `<category>.<name>` form (shape only; the
/// category segment is not checked against the closed set).
pub fn is_canonical(id: &str) -> bool {
    CANONICAL_ID.is_match(id)
}

/// Map a legacy or canonical id onto the canonical dotted form.
///
/// Ids that already contain a dot, and hyphenated ids whose prefix is not a
/// known category, are returned unchanged.
pub fn canonicalize(id: &str) -> Cow<'_, str> {
    if id.contains('.') {
        return Cow::Borrowed(id);
    }
    if let Some((prefix, rest)) = id.split_once('-') {
        if GlyphCategory::parse(prefix).is_some() && !rest.is_empty() {
            return Cow::Owned(format!("{prefix}.{rest}"));
        }
        return Cow::Borrowed(id);
    }
    if id.is_empty() {
        return Cow::Borrowed(id);
    }
    Cow::Owned(format!("{}.{id}", GlyphCategory::Brand.as_str()))
}

/// The hyphenated spelling of a canonical id, used for class names and the
/// legacy asset file names (`continuity.chain` → `continuity-chain`).
///
/// Brand ids drop their prefix: `brand.mirrordna` → `mirrordna`.
pub fn to_hyphenated(id: &str) -> Cow<'_, str> {
    match split(id) {
        Some((GlyphCategory::Brand, name)) => Cow::Borrowed(name),
        Some(_) => Cow::Owned(id.replacen('.', "-", 1)),
        None => Cow::Borrowed(id),
    }
}

/// Split a canonical id into its category and name segments.
pub fn split(id: &str) -> Option<(GlyphCategory, &str)> {
    let (prefix, name) = id.split_once('.')?;
    let category = GlyphCategory::parse(prefix)?;
    if name.is_empty() {
        return None;
    }
    Some((category, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_ids_pass_through() {
        assert_eq!(canonicalize("continuity.chain"), "continuity.chain");
        assert!(matches!(canonicalize("state.active"), Cow::Borrowed(_)));
    }

    #[test]
    fn hyphenated_ids_become_dotted() {
        assert_eq!(canonicalize("continuity-chain"), "continuity.chain");
        assert_eq!(
            canonicalize("reflection-bidirectional"),
            "reflection.bidirectional"
        );
        assert_eq!(canonicalize("state-verified"), "state.verified");
    }

    #[test]
    fn bare_names_are_brand_ids() {
        assert_eq!(canonicalize("mirrordna"), "brand.mirrordna");
        assert_eq!(canonicalize("generic_beacon"), "brand.generic_beacon");
    }

    #[test]
    fn unknown_prefixes_are_left_alone() {
        assert_eq!(canonicalize("unknown-glyph-123"), "unknown-glyph-123");
        assert_eq!(canonicalize("state-"), "state-");
        assert_eq!(canonicalize(""), "");
    }

    #[test]
    fn hyphenated_round_trip() {
        assert_eq!(to_hyphenated("continuity.chain"), "continuity-chain");
        assert_eq!(to_hyphenated("brand.mirrordna"), "mirrordna");
        assert_eq!(canonicalize(&to_hyphenated("identity.dna")), "identity.dna");
        assert_eq!(to_hyphenated("not an id"), "not an id");
    }

    #[test]
    fn canonical_shape() {
        assert!(is_canonical("continuity.chain"));
        assert!(is_canonical("brand.generic_beacon"));
        assert!(!is_canonical("Continuity.Chain"));
        assert!(!is_canonical("continuity-chain"));
        assert!(!is_canonical("a.b.c"));
        assert!(!is_canonical(".chain"));
        assert!(!is_canonical("state.foo-bar"));
        assert!(!is_canonical("continuity.chain-"));
    }

    #[test]
    fn split_rejects_unknown_categories() {
        assert_eq!(
            split("data.stream"),
            Some((GlyphCategory::Data, "stream"))
        );
        assert_eq!(split("weather.rain"), None);
        assert_eq!(split("data."), None);
    }
}
