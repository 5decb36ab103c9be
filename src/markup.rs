//! HTML emission for bound glyphs and the composites built on them.
//!
//! File-backed glyphs become `<img>`. Inline SVG and fallback glyphs become
//! `<span>`. Every attribute value is escaped; inline SVG content is trusted
//! registry data and is emitted verbatim.

use std::borrow::Cow;
use std::fmt::Write as _;

use crate::bind::{BoundGlyph, GlyphAttributes};
use crate::compose::{Badge, StatusLine};
use crate::group::GroupLayout;

/// Text content rendered inside a fallback glyph.
pub const FALLBACK_TEXT: &str = "?";

/// Escape a value for a double-quoted attribute.
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

/// Escape a text node.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    html_escape::encode_text(text)
}

/// HTML writer. `asset_base` is prefixed to relative image sources.
#[derive(Debug, Clone, Default)]
pub struct HtmlWriter {
    asset_base: String,
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset_base(asset_base: impl Into<String>) -> Self {
        Self {
            asset_base: asset_base.into(),
        }
    }

    fn source(&self, src: &str) -> String {
        if self.asset_base.is_empty() || src.starts_with('/') || src.contains("://") {
            return src.to_string();
        }
        format!("{}/{}", self.asset_base.trim_end_matches('/'), src)
    }

    /// One glyph element.
    pub fn glyph(&self, glyph: &BoundGlyph) -> String {
        let attrs = &glyph.attributes;
        let mut out = String::new();

        match (&attrs.src, &attrs.inline_svg) {
            (Some(src), _) => {
                out.push_str("<img");
                push_common(&mut out, attrs);
                push_attr(&mut out, "src", &self.source(src));
                push_attr(&mut out, "alt", attrs.alt.as_deref().unwrap_or(""));
                out.push_str(" />");
            }
            (None, Some(svg)) => {
                out.push_str("<span");
                push_common(&mut out, attrs);
                out.push('>');
                out.push_str(svg);
                out.push_str("</span>");
            }
            (None, None) => {
                out.push_str("<span");
                push_common(&mut out, attrs);
                push_attr(&mut out, "title", &attrs.aria_label);
                out.push('>');
                out.push_str(FALLBACK_TEXT);
                out.push_str("</span>");
            }
        }
        out
    }

    /// A group container around already-bound glyphs.
    pub fn group(&self, layout: &GroupLayout, glyphs: &[BoundGlyph]) -> String {
        let mut out = String::from("<div");
        push_attr(&mut out, "class", &layout.class);
        push_attr(&mut out, "style", &layout.style_string());
        out.push('>');
        for glyph in glyphs {
            out.push_str(&self.glyph(glyph));
        }
        out.push_str("</div>");
        out
    }

    pub fn badge(&self, badge: &Badge) -> String {
        let mut out = String::from("<span");
        push_attr(&mut out, "class", &badge.class);
        if badge.has_handler() {
            push_attr(&mut out, "role", "button");
            push_attr(&mut out, "tabindex", "0");
        }
        out.push('>');
        out.push_str(&self.glyph(&badge.glyph));
        let _ = write!(out, "<span>{}</span></span>", escape_text(&badge.label));
        out
    }

    pub fn status(&self, status: &StatusLine) -> String {
        let mut out = String::from("<div");
        push_attr(&mut out, "class", &status.class);
        out.push('>');
        out.push_str(&self.glyph(&status.glyph));
        let _ = write!(out, "<span>{}</span>", escape_text(&status.label));
        if let Some(dot) = &status.dot {
            out.push_str("<span");
            push_attr(&mut out, "class", &dot.class);
            push_attr(&mut out, "aria-label", &dot.aria_label);
            out.push_str("></span>");
        }
        out.push_str("</div>");
        out
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, " {name}=\"{}\"", escape_attr(value));
}

fn push_common(out: &mut String, attrs: &GlyphAttributes) {
    push_attr(out, "class", &attrs.class);
    push_attr(out, "role", attrs.role.as_str());
    push_attr(out, "aria-label", &attrs.aria_label);
    if attrs.aria_disabled {
        push_attr(out, "aria-disabled", "true");
    }
    if let Some(index) = attrs.tab_index {
        push_attr(out, "tabindex", &index.to_string());
    }
    push_attr(out, "style", &attrs.style_string());
}
