// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # beacon-glyphs
//!
//! A fixed registry of named, SVG-backed glyphs plus the presentational
//! helpers that turn a glyph id into a render-ready description.
//!
//! ## Architecture
//!
//! - **Registry** (`registry`, `catalog`): immutable canonical id → descriptor map
//! - **Ids** (`id`): canonical `<category>.<name>` form and the legacy adapter
//! - **Resolver** (`resolve`): lookup, fallback policy, sizes, class composition
//! - **Binder** (`bind`): role, label, keyboard reachability, guarded clicks
//! - **Layout** (`group`, `compose`): glyph groups, badges, status lines
//! - **Output** (`markup`, `showcase`, `trail`): HTML, catalog pages, session trails
//!
//! ## Library usage
//!
//! ```no_run
//! use beacon_glyphs::bind::bind;
//! use beacon_glyphs::markup::HtmlWriter;
//! use beacon_glyphs::options::{RenderOptions, SizeToken};
//! use beacon_glyphs::registry::GlyphRegistry;
//! use beacon_glyphs::resolve::Resolver;
//!
//! let resolver = Resolver::new(GlyphRegistry::builtin());
//! let presentation = resolver.resolve("continuity-chain", &RenderOptions::new().size(SizeToken::Lg));
//! assert_eq!(presentation.canonical_id.as_deref(), Some("continuity.chain"));
//!
//! let html = HtmlWriter::new().glyph(&bind(&presentation, None));
//! println!("{html}");
//! ```

pub mod bind;
pub mod catalog;
pub mod category;
pub mod compose;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod group;
pub mod id;
pub mod markup;
pub mod options;
pub mod registry;
pub mod resolve;
pub mod showcase;
pub mod trail;

pub use bind::{BoundGlyph, ClickHandler, GlyphAttributes, Role, bind};
pub use category::GlyphCategory;
pub use descriptor::{AssetRef, GlyphDescriptor, GlyphMetadata};
pub use error::{BeaconError, BeaconResult};
pub use options::{GlyphAnimation, GlyphColor, GlyphSize, GlyphVariant, RenderOptions, SizeToken};
pub use registry::GlyphRegistry;
pub use resolve::{ResolvedPresentation, Resolver, ResolverConfig};
