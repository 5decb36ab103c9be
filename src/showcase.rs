//! Catalog showcase: every registered glyph grouped by category.
//!
//! Two outputs: a standalone HTML page (cards with display name,
//! description and a click-to-copy usage snippet) and a terminal legend
//! with optional ANSI color.

use std::fmt::Write as _;

use crate::bind;
use crate::category::GlyphCategory;
use crate::descriptor::GlyphDescriptor;
use crate::markup::{HtmlWriter, escape_attr, escape_text};
use crate::options::{RenderOptions, SizeToken};
use crate::registry::GlyphRegistry;
use crate::resolve::Resolver;

// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const CYAN: &str = "\x1b[36m";
const YELLOW: &str = "\x1b[33m";
const MAGENTA: &str = "\x1b[35m";
const GREEN: &str = "\x1b[32m";
const BLUE: &str = "\x1b[34m";

/// Configuration for the terminal legend.
#[derive(Debug, Clone)]
pub struct LegendConfig {
    /// Enable ANSI color codes.
    pub color: bool,
    /// Show `[KEYWORD]` text instead of the unicode character.
    pub plain_text: bool,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            color: color_detect(),
            plain_text: false,
        }
    }
}

/// The snippet a card copies to the clipboard.
pub fn usage_snippet(descriptor: &GlyphDescriptor) -> String {
    format!("<BeaconGlyph id=\"{}\" />", descriptor.id)
}

const PAGE_STYLE: &str = "\
body { font-family: system-ui, sans-serif; margin: 2rem; color: #1f2937; }
h1 { margin-bottom: 0.25rem; }
section { margin-top: 2rem; }
.glyph-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 1rem; }
.glyph-card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem; text-align: center; cursor: pointer; }
.glyph-card:hover { border-color: #6366f1; }
.glyph-name { font-weight: 600; margin-top: 0.5rem; }
.glyph-desc { font-size: 0.85rem; color: #6b7280; }
.glyph-code { font-family: monospace; font-size: 0.75rem; margin-top: 0.5rem; background: #f3f4f6; padding: 0.25rem; }
";

const COPY_SCRIPT: &str = "\
document.querySelectorAll('.glyph-card').forEach(card => {
  card.addEventListener('click', () => {
    const code = card.dataset.snippet;
    navigator.clipboard.writeText(code).then(() => {
      const bg = card.style.background;
      card.style.background = '#d1fae5';
      setTimeout(() => { card.style.background = bg; }, 300);
    });
  });
});
";

/// Render the full HTML showcase page.
pub fn render_html(registry: &GlyphRegistry, writer: &HtmlWriter) -> String {
    let resolver = Resolver::new(registry);
    let options = RenderOptions::new().size(SizeToken::Lg);
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\" />\n");
    out.push_str("<title>BeaconGlyphs</title>\n<style>\n");
    out.push_str(PAGE_STYLE);
    out.push_str("</style>\n</head>\n<body>\n<h1>BeaconGlyphs</h1>\n");
    let _ = writeln!(out, "<p>{} glyphs. Click a card to copy its usage.</p>", registry.len());

    out.push_str("<nav>");
    for category in registry.categories() {
        let _ = write!(out, "<a href=\"#{}\">{}</a> ", category.as_str(), category.title());
    }
    out.push_str("</nav>\n");

    for category in registry.categories() {
        let _ = writeln!(
            out,
            "<section id=\"{}\">\n<h2>{}</h2>\n<div class=\"glyph-grid\">",
            category.as_str(),
            category.title()
        );
        for descriptor in registry.list_by_category(category) {
            let glyph = bind::bind(&resolver.resolve(&descriptor.id, &options), None);
            let snippet = usage_snippet(descriptor);
            let _ = writeln!(
                out,
                "<div class=\"glyph-card\" data-snippet=\"{snippet_attr}\">\
                 <div class=\"glyph-display\">{glyph}</div>\
                 <div class=\"glyph-name\">{name}</div>\
                 <div class=\"glyph-desc\">{desc}</div>\
                 <div class=\"glyph-code\">{snippet_text}</div></div>",
                snippet_attr = escape_attr(&snippet),
                glyph = writer.glyph(&glyph),
                name = escape_text(&descriptor.display_name),
                desc = escape_text(&descriptor.description),
                snippet_text = escape_text(&snippet),
            );
        }
        out.push_str("</div>\n</section>\n");
    }

    out.push_str("<script>\n");
    out.push_str(COPY_SCRIPT);
    out.push_str("</script>\n</body>\n</html>\n");
    out
}

/// Render a terminal legend of every registered glyph.
pub fn render_legend(registry: &GlyphRegistry, config: &LegendConfig) -> String {
    let (bold, reset) = if config.color { (BOLD, RESET) } else { ("", "") };
    let mut lines = Vec::new();

    lines.push(format!("{bold}BeaconGlyphs Legend{reset}"));
    lines.push(String::new());

    for category in registry.categories() {
        let glyphs = registry.list_by_category(category);
        lines.push(format!("  {bold}{}{reset} ({}):", category.title(), glyphs.len()));
        for glyph in glyphs {
            let display = if config.plain_text {
                glyph.text.as_str()
            } else {
                glyph.unicode.as_str()
            };
            let display = if config.color {
                format!("{}{display}{RESET}", category_color(category))
            } else {
                display.to_string()
            };
            lines.push(format!(
                "    {display}  {:<26} {}",
                glyph.id, glyph.description
            ));
        }
        lines.push(String::new());
    }

    lines.push(format!("  {} glyphs", registry.len()));
    lines.join("\n")
}

fn category_color(category: GlyphCategory) -> &'static str {
    match category {
        GlyphCategory::Brand => BOLD,
        GlyphCategory::Continuity => CYAN,
        GlyphCategory::Identity => MAGENTA,
        GlyphCategory::State => GREEN,
        GlyphCategory::Events => YELLOW,
        GlyphCategory::Reflection => BLUE,
        GlyphCategory::Governance | GlyphCategory::Navigation | GlyphCategory::Data => DIM,
    }
}

/// TERM heuristic: color when `TERM` is set to something other than `dumb`
/// and `NO_COLOR` is unset. Whether stdout is a terminal is not checked.
fn color_detect() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::env::var("TERM").is_ok_and(|t| t != "dumb")
}
