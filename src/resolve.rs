//! Glyph resolution: id + options → [`ResolvedPresentation`].
//!
//! Resolution is pure and total. A missing glyph is not an error: it yields
//! a fallback presentation (`is_fallback = true`, error class token, no
//! asset) and a `warn`-level diagnostic.

use serde::{Deserialize, Serialize};

use crate::descriptor::AssetRef;
use crate::id;
use crate::options::{GlyphSize, RenderOptions};
use crate::registry::GlyphRegistry;

/// Base class carried by every glyph.
pub const BASE_CLASS: &str = "bg-glyph";
/// Class that marks a fallback presentation.
pub const FALLBACK_CLASS: &str = "bg-glyph-error";
/// Label prefix for fallback presentations.
pub const FALLBACK_LABEL_PREFIX: &str = "Unknown glyph: ";

/// Resolver behavior knobs.
#[derive(Debug, Clone, Default)]
pub struct ResolverConfig {
    /// Include the full list of known ids in the unknown-glyph diagnostic.
    pub list_known_on_miss: bool,
}

/// Result of resolving one glyph id with one set of options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPresentation {
    /// The id exactly as the caller passed it.
    pub requested_id: String,
    /// Canonical id of the matched descriptor; `None` for fallbacks.
    pub canonical_id: Option<String>,
    /// Accessibility label. Never empty.
    pub label: String,
    pub display_name: Option<String>,
    pub asset: Option<AssetRef>,
    pub size: GlyphSize,
    /// Width and height in pixels.
    pub size_px: u32,
    /// Composed classes, caller class last.
    pub classes: Vec<String>,
    pub style: Vec<(String, String)>,
    pub interactive: bool,
    pub disabled: bool,
    pub is_fallback: bool,
}

impl ResolvedPresentation {
    /// Classes joined with single spaces.
    pub fn class_string(&self) -> String {
        self.classes.join(" ")
    }
}

/// Resolves ids against an explicit registry handle.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'r> {
    registry: &'r GlyphRegistry,
    list_known_on_miss: bool,
}

impl<'r> Resolver<'r> {
    pub fn new(registry: &'r GlyphRegistry) -> Self {
        Self::with_config(registry, &ResolverConfig::default())
    }

    pub fn with_config(registry: &'r GlyphRegistry, config: &ResolverConfig) -> Self {
        Self {
            registry,
            list_known_on_miss: config.list_known_on_miss,
        }
    }

    pub fn registry(&self) -> &'r GlyphRegistry {
        self.registry
    }

    /// Resolve `id` (canonical or legacy spelling) with `options`.
    pub fn resolve(&self, id: &str, options: &RenderOptions) -> ResolvedPresentation {
        let canonical = id::canonicalize(id);
        let size = options.size.unwrap_or_default();

        let Some(descriptor) = self.registry.lookup(&canonical) else {
            self.warn_unknown(id);
            return ResolvedPresentation {
                requested_id: id.to_string(),
                canonical_id: None,
                label: format!("{FALLBACK_LABEL_PREFIX}{id}"),
                display_name: None,
                asset: None,
                size,
                size_px: size.pixels(),
                classes: compose_classes(FALLBACK_CLASS.to_string(), size, options),
                style: options.style.clone(),
                interactive: options.interactive,
                disabled: options.disabled,
                is_fallback: true,
            };
        };

        let label = options
            .label
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or(&descriptor.description)
            .to_string();
        let id_class = format!("bg-{}", descriptor.id.replacen('.', "-", 1));

        ResolvedPresentation {
            requested_id: id.to_string(),
            canonical_id: Some(descriptor.id.clone()),
            label,
            display_name: Some(descriptor.display_name.clone()),
            asset: Some(descriptor.asset.clone()),
            size,
            size_px: size.pixels(),
            classes: compose_classes(id_class, size, options),
            style: options.style.clone(),
            interactive: options.interactive,
            disabled: options.disabled,
            is_fallback: false,
        }
    }

    fn warn_unknown(&self, id: &str) {
        if self.list_known_on_miss {
            let known = self.registry.ids().collect::<Vec<_>>().join(", ");
            tracing::warn!(id, %known, "unknown glyph");
        } else {
            tracing::warn!(id, "unknown glyph");
        }
    }
}

/// Class order: base, id modifier, size, variant, color, animation,
/// interactive, disabled, caller class.
fn compose_classes(id_class: String, size: GlyphSize, options: &RenderOptions) -> Vec<String> {
    let mut classes = vec![BASE_CLASS.to_string(), id_class];

    if let Some(token) = size.token() {
        classes.push(format!("bg-size-{token}"));
    }
    if let Some(variant) = options.variant {
        classes.push(format!("bg-variant-{variant}"));
    }
    if let Some(color) = options.color {
        classes.push(format!("bg-color-{color}"));
    }
    if let Some(animation) = options.animation {
        classes.push(format!("bg-animate-{animation}"));
    }
    if options.interactive {
        classes.push("bg-interactive".to_string());
    }
    if options.disabled {
        classes.push("bg-disabled".to_string());
    }
    if let Some(extra) = options.class_name.as_deref() {
        let extra = extra.trim();
        if !extra.is_empty() {
            classes.push(extra.to_string());
        }
    }
    classes
}
