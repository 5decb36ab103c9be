//! End-to-end tests: registry → resolver → binder → markup.
//!
//! These mirror how a UI layer consumes the crate: resolve an id with
//! options, bind it, and read only the resulting attribute bag.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use beacon_glyphs::bind::{ClickHandler, Role, bind};
use beacon_glyphs::category::GlyphCategory;
use beacon_glyphs::compose::{Badge, BadgeVariant, StatusKind, StatusLine};
use beacon_glyphs::group::{GroupDirection, GroupGap, GroupLayout};
use beacon_glyphs::id;
use beacon_glyphs::markup::HtmlWriter;
use beacon_glyphs::options::{GlyphColor, GlyphVariant, RenderOptions, SizeToken};
use beacon_glyphs::registry::GlyphRegistry;
use beacon_glyphs::resolve::Resolver;

fn resolver() -> Resolver<'static> {
    Resolver::new(GlyphRegistry::builtin())
}

#[test]
fn every_id_resolves_with_its_description() {
    let reg = GlyphRegistry::builtin();
    let r = resolver();
    for d in reg.list_all() {
        let bound = bind(&r.resolve(&d.id, &RenderOptions::new()), None);
        assert_eq!(bound.attributes.aria_label, d.description);
        assert!(!bound.attributes.is_fallback);
        assert_eq!(bound.attributes.role, Role::Img);
    }
}

#[test]
fn legacy_and_canonical_spellings_agree() {
    let r = resolver();
    let opts = RenderOptions::new().size(SizeToken::Lg);
    for d in GlyphRegistry::builtin().list_all() {
        let legacy = id::to_hyphenated(&d.id);
        let a = r.resolve(&d.id, &opts);
        let b = r.resolve(&legacy, &opts);
        assert_eq!(a.canonical_id, b.canonical_id, "{legacy}");
        assert_eq!(a.classes, b.classes, "{legacy}");
    }
}

#[test]
fn categories_partition_the_registry() {
    let reg = GlyphRegistry::builtin();
    let total: usize = GlyphCategory::ALL
        .iter()
        .map(|c| reg.list_by_category(*c).len())
        .sum();
    assert_eq!(total, reg.len());
    assert_eq!(reg.list_by_category(GlyphCategory::Brand).len(), 7);
}

#[test]
fn unknown_glyph_end_to_end() {
    let bound = bind(
        &resolver().resolve("unknown-glyph-123", &RenderOptions::new().class_name("mine")),
        None,
    );
    assert!(bound.attributes.is_fallback);
    assert_eq!(bound.attributes.aria_label, "Unknown glyph: unknown-glyph-123");
    assert!(bound.attributes.class.ends_with("mine"));

    let html = HtmlWriter::new().glyph(&bound);
    assert!(html.starts_with("<span"));
    assert!(html.contains("bg-glyph-error"));
}

#[test]
fn full_option_set_renders_in_order() {
    let opts = RenderOptions::parse(Some("lg"), Some("success"), Some("outline"), Some("spin"))
        .unwrap()
        .interactive(true)
        .class_name("hero");
    assert_eq!(opts.color, Some(GlyphColor::Success));
    assert_eq!(opts.variant, Some(GlyphVariant::Outline));

    let p = resolver().resolve("state.verified", &opts);
    assert_eq!(
        p.class_string(),
        "bg-glyph bg-state-verified bg-size-lg bg-variant-outline bg-color-success bg-animate-spin bg-interactive hero"
    );
    let bound = bind(&p, None);
    assert_eq!(bound.attributes.tab_index, Some(0));
    assert_eq!(bound.attributes.style_string(), "width: 48px; height: 48px");
}

#[test]
fn malformed_options_are_rejected_before_resolution() {
    assert!(RenderOptions::parse(Some("huge"), None, None, None).is_err());
    assert!(RenderOptions::parse(None, Some("chartreuse"), None, None).is_err());
    assert!(RenderOptions::parse(None, None, Some("dashed"), None).is_err());
    assert!(RenderOptions::parse(None, None, None, Some("wobble")).is_err());
}

#[test]
fn click_dispatch_respects_disabled() {
    let count = Arc::new(AtomicUsize::new(0));
    let c = Arc::clone(&count);
    let handler: ClickHandler = Arc::new(move || {
        c.fetch_add(1, Ordering::SeqCst);
    });

    let r = resolver();
    let enabled = bind(&r.resolve("navigation.forward", &RenderOptions::new()), Some(Arc::clone(&handler)));
    let disabled = bind(
        &r.resolve("navigation.forward", &RenderOptions::new().disabled(true)),
        Some(handler),
    );

    assert!(enabled.click());
    assert!(!disabled.click());
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(disabled.attributes.role, Role::Button);
    assert!(disabled.attributes.aria_disabled);
}

#[test]
fn composite_markup() {
    let r = resolver();
    let writer = HtmlWriter::with_asset_base("/static");

    let layout = GroupLayout::new(GroupDirection::Horizontal, GroupGap::Lg, Some("row"));
    let glyphs: Vec<_> = ["identity.dna", "state.active", "state.protected"]
        .iter()
        .map(|id| bind(&r.resolve(id, &RenderOptions::new()), None))
        .collect();
    let html = writer.group(&layout, &glyphs);
    assert!(html.contains(r#"class="bg-glyph-group row""#));
    assert!(html.contains(r#"style="gap: 0.75rem""#));
    assert!(html.contains(r#"src="/static/assets/svg/state-protected.svg""#));

    let badge = Badge::new(&r, "continuity.chain", "Continuous", BadgeVariant::Default, None, None);
    assert!(writer.badge(&badge).starts_with(r#"<span class="bg-badge">"#));

    let status = StatusLine::new(&r, "state.active", "System Active", Some(StatusKind::Warning), true, None);
    assert!(writer.status(&status).contains("bg-status-dot-warning"));
}
