//! Presentation binding: resolved presentation + click handler → the
//! attribute bag a UI layer renders.
//!
//! Role policy: `button` whenever a click handler is attached, `img`
//! otherwise. A disabled glyph with a handler keeps the `button` role, is
//! marked `aria-disabled`, is not tab-reachable, and never fires its handler.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::descriptor::AssetRef;
use crate::resolve::ResolvedPresentation;

/// Click callback attached to a glyph.
pub type ClickHandler = Arc<dyn Fn() + Send + Sync>;

/// ARIA role of a rendered glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Img,
    Button,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Img => "img",
            Role::Button => "button",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render-ready attributes for one glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlyphAttributes {
    pub role: Role,
    pub aria_label: String,
    pub aria_disabled: bool,
    /// `Some(0)` when keyboard-reachable.
    pub tab_index: Option<i32>,
    pub class: String,
    /// Ordered style declarations: width, height, then caller overrides.
    pub style: Vec<(String, String)>,
    /// Image source for file-backed assets.
    pub src: Option<String>,
    /// Alt text (display name) for file-backed assets.
    pub alt: Option<String>,
    /// Inline SVG content, when the asset is inline.
    pub inline_svg: Option<String>,
    pub is_fallback: bool,
}

impl GlyphAttributes {
    /// Style declarations formatted as a CSS declaration list.
    pub fn style_string(&self) -> String {
        self.style
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// A glyph ready to render, with its guarded click dispatch.
#[derive(Clone)]
pub struct BoundGlyph {
    pub attributes: GlyphAttributes,
    handler: Option<ClickHandler>,
    disabled: bool,
}

impl BoundGlyph {
    /// Dispatch a click. The handler runs only when present and the glyph is
    /// not disabled; returns whether it ran.
    pub fn click(&self) -> bool {
        match &self.handler {
            Some(handler) if !self.disabled => {
                handler();
                true
            }
            _ => false,
        }
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

impl fmt::Debug for BoundGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundGlyph")
            .field("attributes", &self.attributes)
            .field("has_handler", &self.has_handler())
            .field("disabled", &self.disabled)
            .finish()
    }
}

/// Bind a resolved presentation to its render attributes.
pub fn bind(presentation: &ResolvedPresentation, handler: Option<ClickHandler>) -> BoundGlyph {
    let disabled = presentation.disabled;
    let clickable = handler.is_some();

    let role = if clickable { Role::Button } else { Role::Img };
    let reachable = (clickable || presentation.interactive) && !disabled;

    let px = format!("{}px", presentation.size_px);
    let mut style = vec![("width".to_string(), px.clone()), ("height".to_string(), px)];
    style.extend(presentation.style.iter().cloned());

    let (src, inline_svg) = match &presentation.asset {
        Some(AssetRef::Path(p)) => (Some(p.clone()), None),
        Some(AssetRef::Inline(svg)) => (None, Some(svg.clone())),
        None => (None, None),
    };
    let alt = src.as_ref().and(presentation.display_name.clone());

    BoundGlyph {
        attributes: GlyphAttributes {
            role,
            aria_label: presentation.label.clone(),
            aria_disabled: disabled && clickable,
            tab_index: reachable.then_some(0),
            class: presentation.class_string(),
            style,
            src,
            alt,
            inline_svg,
            is_fallback: presentation.is_fallback,
        },
        handler,
        disabled,
    }
}
