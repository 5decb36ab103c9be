//! Rich diagnostic error types for beacon-glyphs.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes and help text. Unknown glyph ids have no variant
//! here: a missed lookup is data (`None` or a fallback presentation).

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for beacon-glyphs.
#[derive(Debug, Error, Diagnostic)]
pub enum BeaconError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Options(#[from] OptionsError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Registry errors
// ---------------------------------------------------------------------------

/// A malformed registry entry or document. Fatal at construction time.
#[derive(Debug, Error, Diagnostic)]
pub enum RegistryError {
    #[error("duplicate glyph id: \"{id}\"")]
    #[diagnostic(
        code(beacon::registry::duplicate_id),
        help("Every glyph id must be unique. Rename or remove one of the entries.")
    )]
    DuplicateId { id: String },

    #[error("glyph \"{id}\" has an empty {field}")]
    #[diagnostic(
        code(beacon::registry::empty_field),
        help("Fill in the field; every glyph needs a name, description, asset, and representations.")
    )]
    EmptyField { id: String, field: &'static str },

    #[error("glyph id \"{id}\" is not in lowercase `category.name` form")]
    #[diagnostic(
        code(beacon::registry::id_format),
        help(
            "Canonical ids are dotted and lowercase, e.g. `continuity.chain`. \
             Use `beacon_glyphs::id::canonicalize` to convert hyphenated ids."
        )
    )]
    InvalidIdFormat { id: String },

    #[error("glyph \"{id}\" is filed under category `{category}` but its id prefix is `{prefix}`")]
    #[diagnostic(
        code(beacon::registry::category_mismatch),
        help("The id prefix must name the glyph's category.")
    )]
    CategoryMismatch {
        id: String,
        category: String,
        prefix: String,
    },

    #[error("unknown glyph category: \"{category}\"")]
    #[diagnostic(
        code(beacon::registry::unknown_category),
        help(
            "Valid categories: brand, continuity, identity, state, events, \
             reflection, governance, navigation, data."
        )
    )]
    UnknownCategory { category: String },

    #[error("text representation \"{text}\" is used by both \"{id}\" and \"{existing}\"")]
    #[diagnostic(
        code(beacon::registry::duplicate_text),
        help("Plain-text representations must be unique so they stay unambiguous in logs.")
    )]
    DuplicateText {
        text: String,
        id: String,
        existing: String,
    },

    #[error("glyph \"{id}\" text representation \"{text}\" is not an uppercase [KEYWORD]")]
    #[diagnostic(
        code(beacon::registry::text_format),
        help("Text representations look like `[CHAIN]`: brackets around an uppercase keyword.")
    )]
    InvalidTextFormat { id: String, text: String },

    #[error("glyph \"{id}\" lists related glyph \"{related}\", which is not registered")]
    #[diagnostic(
        code(beacon::registry::unknown_related),
        help("`metadata.relatedGlyphs` may only name canonical ids present in the same registry.")
    )]
    UnknownRelatedGlyph { id: String, related: String },

    #[error("failed to read registry file: {path}")]
    #[diagnostic(
        code(beacon::registry::read),
        help("Check that the file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse registry document: {message}")]
    #[diagnostic(
        code(beacon::registry::parse),
        help("The document must be a JSON object with `version`, `description`, and a `glyphs` array.")
    )]
    Parse { message: String },
}

// ---------------------------------------------------------------------------
// Options errors
// ---------------------------------------------------------------------------

/// A render option token that is not part of its closed set.
#[derive(Debug, Error, Diagnostic)]
pub enum OptionsError {
    #[error("invalid size token: \"{token}\"")]
    #[diagnostic(
        code(beacon::options::size),
        help("Valid size tokens: sm, md, lg. Or pass a pixel count such as `64`.")
    )]
    InvalidSizeToken { token: String },

    #[error("invalid {option} token: \"{token}\"")]
    #[diagnostic(
        code(beacon::options::malformed),
        help("Valid values: {expected}.")
    )]
    MalformedOptions {
        option: &'static str,
        token: String,
        expected: &'static str,
    },
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config: {path}")]
    #[diagnostic(
        code(beacon::config::read),
        help("Check that the file exists and is readable, or omit --config to use defaults.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {message}")]
    #[diagnostic(
        code(beacon::config::parse),
        help("The config file must be valid TOML. See BeaconConfig for the accepted keys.")
    )]
    Parse { path: String, message: String },
}

/// Convenience alias for results using the top-level error.
pub type BeaconResult<T> = std::result::Result<T, BeaconError>;

/// Result type for registry construction and loading.
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;

/// Result type for option parsing.
pub type OptionsResult<T> = std::result::Result<T, OptionsError>;

/// Result type for config loading.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
