//! Built-in glyph table: 7 brand marks and 25 symbolic glyphs.
//!
//! Each glyph has an SVG asset under `assets/svg/` (named by the hyphenated
//! id), a unicode representation for terminals, and a `[KEYWORD]` text
//! representation for plain logs. Tags and related ids feed
//! [`crate::registry::GlyphRegistry::search_by_tag`] and `related`.

use crate::category::GlyphCategory;
use crate::descriptor::{AssetRef, GlyphDescriptor, GlyphMetadata};
use crate::id;

struct Entry {
    id: &'static str,
    display_name: &'static str,
    description: &'static str,
    category: GlyphCategory,
    unicode: &'static str,
    text: &'static str,
    tags: &'static [&'static str],
    related: &'static [&'static str],
}

use GlyphCategory::*;

#[rustfmt::skip]
const ENTRIES: &[Entry] = &[
    // -- Brand (7) --
    Entry { id: "brand.mirrordna",       display_name: "MirrorDNA",           description: "Identity and continuity protocol",  category: Brand,      unicode: "\u{25C8}", text: "[MIRRORDNA]", tags: &["protocol", "identity", "continuity"], related: &["identity.dna", "continuity.chain"] },
    Entry { id: "brand.lingos",          display_name: "LingOS",              description: "Language-native OS",                category: Brand,      unicode: "\u{232C}", text: "[LINGOS]", tags: &["os", "language", "dialogue"], related: &[] },
    Entry { id: "brand.activemirroros",  display_name: "Active MirrorOS",     description: "Intelligence that remembers",       category: Brand,      unicode: "\u{25C9}", text: "[ACTIVEMIRROROS]", tags: &["product", "memory"], related: &["brand.mirrordna"] },
    Entry { id: "brand.trustbydesign",   display_name: "TrustByDesign",       description: "Safety and governance framework",   category: Brand,      unicode: "\u{26E8}", text: "[TRUSTBYDESIGN]", tags: &["safety", "governance"], related: &["governance.balance", "state.protected"] },
    Entry { id: "brand.agentdna",        display_name: "AgentDNA",            description: "Agent personality schemas",         category: Brand,      unicode: "\u{2687}", text: "[AGENTDNA]", tags: &["agent", "identity", "schema"], related: &["identity.dna"] },
    Entry { id: "brand.glyphtrail",      display_name: "Glyphtrail",          description: "Interaction lineage logs",          category: Brand,      unicode: "\u{22EF}", text: "[GLYPHTRAIL]", tags: &["lineage", "logging", "continuity"], related: &["continuity.chain"] },
    Entry { id: "brand.generic_beacon",  display_name: "Generic Beacon",      description: "Universal beacon marker",           category: Brand,      unicode: "\u{2726}", text: "[BEACON]", tags: &["marker", "event"], related: &["events.flag"] },

    // -- Continuity (4) --
    Entry { id: "continuity.chain",      display_name: "Continuity Chain",    description: "Unbroken session continuity",       category: Continuity, unicode: "\u{26D3}", text: "[CHAIN]", tags: &["continuity", "session", "persistence"], related: &["continuity.link", "continuity.broken"] },
    Entry { id: "continuity.link",       display_name: "Single Link",         description: "Individual connection point",       category: Continuity, unicode: "\u{1F517}", text: "[LINK]", tags: &["continuity", "connection"], related: &["continuity.chain"] },
    Entry { id: "continuity.infinity",   display_name: "Infinite Continuity", description: "Eternal persistence",               category: Continuity, unicode: "\u{221E}", text: "[INFINITY]", tags: &["continuity", "persistence", "memory"], related: &["continuity.chain"] },
    Entry { id: "continuity.broken",     display_name: "Broken Chain",        description: "Break in continuity",               category: Continuity, unicode: "\u{2298}", text: "[BROKEN]", tags: &["continuity", "error", "break"], related: &["continuity.chain"] },

    // -- Identity (3) --
    Entry { id: "identity.dna",          display_name: "DNA Helix",           description: "Agent identity marker",             category: Identity,   unicode: "\u{1F9EC}", text: "[DNA]", tags: &["identity", "agent"], related: &["identity.mask", "brand.agentdna"] },
    Entry { id: "identity.mask",         display_name: "Persona Mask",        description: "Agent personality",                 category: Identity,   unicode: "\u{1F3AD}", text: "[MASK]", tags: &["identity", "persona"], related: &["identity.dna"] },
    Entry { id: "identity.diamond",      display_name: "Identity Diamond",    description: "Unique identity marker",            category: Identity,   unicode: "\u{25C6}", text: "[IDENTITY]", tags: &["identity", "unique"], related: &["identity.dna"] },

    // -- State (4) --
    Entry { id: "state.verified",        display_name: "Verified",            description: "Verified state",                    category: State,      unicode: "\u{2713}", text: "[VERIFIED]", tags: &["state", "trust", "verification"], related: &["governance.certified"] },
    Entry { id: "state.active",          display_name: "Active State",        description: "System actively running",           category: State,      unicode: "\u{25CF}", text: "[ACTIVE]", tags: &["state", "running"], related: &[] },
    Entry { id: "state.protected",       display_name: "Protected",           description: "Trust boundary",                    category: State,      unicode: "\u{1F6E1}", text: "[PROTECTED]", tags: &["state", "trust", "safety"], related: &["state.locked"] },
    Entry { id: "state.locked",          display_name: "Locked",              description: "Secured state",                     category: State,      unicode: "\u{1F512}", text: "[LOCKED]", tags: &["state", "security"], related: &["state.protected"] },

    // -- Events (5) --
    Entry { id: "events.flag",           display_name: "Event Flag",          description: "Event milestone",                   category: Events,     unicode: "\u{2691}", text: "[FLAG]", tags: &["event", "milestone"], related: &[] },
    Entry { id: "events.cycle",          display_name: "Cycle Event",         description: "Recurring event",                   category: Events,     unicode: "\u{21BB}", text: "[CYCLE]", tags: &["event", "recurring"], related: &[] },
    Entry { id: "events.warning",        display_name: "Warning Event",       description: "Caution required",                  category: Events,     unicode: "\u{26A0}", text: "[WARNING]", tags: &["event", "warning"], related: &[] },
    Entry { id: "events.start",          display_name: "Start Event",         description: "Beginning of session",              category: Events,     unicode: "\u{25B6}", text: "[START]", tags: &["event", "session"], related: &["events.stop"] },
    Entry { id: "events.stop",           display_name: "Stop Event",          description: "End of session",                    category: Events,     unicode: "\u{25A0}", text: "[STOP]", tags: &["event", "session"], related: &["events.start"] },

    // -- Reflection (3) --
    Entry { id: "reflection.mirror",        display_name: "Mirror",           description: "Self-reflection",                   category: Reflection, unicode: "\u{25D0}", text: "[MIRROR]", tags: &["reflection"], related: &["reflection.recursive"] },
    Entry { id: "reflection.bidirectional", display_name: "Bidirectional",    description: "Two-way reflection",                category: Reflection, unicode: "\u{21C4}", text: "[BIDIRECTIONAL]", tags: &["reflection", "dialogue"], related: &["reflection.mirror"] },
    Entry { id: "reflection.recursive",     display_name: "Recursive",        description: "Self-referential",                  category: Reflection, unicode: "\u{21BA}", text: "[RECURSIVE]", tags: &["reflection", "recursion"], related: &["reflection.mirror"] },

    // -- Governance (2) --
    Entry { id: "governance.balance",    display_name: "Balance",             description: "Governance balance",                category: Governance, unicode: "\u{2696}", text: "[BALANCE]", tags: &["governance", "fairness"], related: &["governance.certified"] },
    Entry { id: "governance.certified",  display_name: "Certified",           description: "Compliance certification",          category: Governance, unicode: "\u{272A}", text: "[CERTIFIED]", tags: &["governance", "compliance", "trust"], related: &["state.verified"] },

    // -- Navigation (2) --
    Entry { id: "navigation.home",       display_name: "Home",                description: "Return to origin",                  category: Navigation, unicode: "\u{2302}", text: "[HOME]", tags: &["navigation"], related: &["navigation.forward"] },
    Entry { id: "navigation.forward",    display_name: "Forward",             description: "Move forward",                      category: Navigation, unicode: "\u{2192}", text: "[FORWARD]", tags: &["navigation"], related: &["navigation.home"] },

    // -- Data (2) --
    Entry { id: "data.memory",           display_name: "Memory",              description: "Stored memory",                     category: Data,       unicode: "\u{25A4}", text: "[MEMORY]", tags: &["data", "memory", "storage"], related: &["continuity.infinity"] },
    Entry { id: "data.stream",           display_name: "Data Stream",         description: "Flowing data",                      category: Data,       unicode: "\u{224B}", text: "[STREAM]", tags: &["data", "flow"], related: &["data.memory"] },
];

/// Registry document version of the built-in table.
pub const CATALOG_VERSION: &str = "1.0.0";

/// Build descriptors for every built-in glyph, in table order.
pub fn builtin_descriptors() -> Vec<GlyphDescriptor> {
    ENTRIES
        .iter()
        .map(|e| GlyphDescriptor {
            id: e.id.to_string(),
            display_name: e.display_name.to_string(),
            description: e.description.to_string(),
            category: e.category,
            asset: AssetRef::svg(&id::to_hyphenated(e.id)),
            unicode: e.unicode.to_string(),
            text: e.text.to_string(),
            emoji: None,
            metadata: GlyphMetadata {
                tags: e.tags.iter().map(|t| t.to_string()).collect(),
                related_glyphs: e.related.iter().map(|r| r.to_string()).collect(),
                accessibility: Some(e.description.to_string()),
                use_cases: Vec::new(),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_32_glyphs() {
        assert_eq!(builtin_descriptors().len(), 32);
    }

    #[test]
    fn categories_count() {
        let all = builtin_descriptors();
        let count = |cat| all.iter().filter(|d| d.category == cat).count();
        assert_eq!(count(Brand), 7);
        assert_eq!(count(Continuity), 4);
        assert_eq!(count(Identity), 3);
        assert_eq!(count(State), 4);
        assert_eq!(count(Events), 5);
        assert_eq!(count(Reflection), 3);
        assert_eq!(count(Governance), 2);
        assert_eq!(count(Navigation), 2);
        assert_eq!(count(Data), 2);
    }

    #[test]
    fn assets_use_legacy_file_names() {
        let all = builtin_descriptors();
        let chain = all.iter().find(|d| d.id == "continuity.chain").unwrap();
        assert_eq!(chain.asset.path(), Some("assets/svg/continuity-chain.svg"));
        let brand = all.iter().find(|d| d.id == "brand.generic_beacon").unwrap();
        assert_eq!(brand.asset.path(), Some("assets/svg/generic_beacon.svg"));
    }

    #[test]
    fn every_glyph_is_tagged_with_known_relations() {
        let all = builtin_descriptors();
        for d in &all {
            assert!(!d.metadata.tags.is_empty(), "glyph {} has no tags", d.id);
            for r in &d.metadata.related_glyphs {
                assert_ne!(r, &d.id, "glyph {} relates to itself", d.id);
                assert!(all.iter().any(|o| &o.id == r), "glyph {} relates to {r}", d.id);
            }
        }
    }

    #[test]
    fn id_prefix_matches_category() {
        for d in builtin_descriptors() {
            let (cat, _) = id::split(&d.id).expect("canonical id");
            assert_eq!(cat, d.category, "glyph {}", d.id);
        }
    }
}
