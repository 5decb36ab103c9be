//! Render options: closed token sets for size, color, variant, and animation.
//!
//! Tokens parse strictly via [`FromStr`]; an unknown token is an
//! [`OptionsError`] at construction time, so the resolver only ever sees
//! valid options.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{OptionsError, OptionsResult};

/// Named size token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeToken {
    Sm,
    #[default]
    Md,
    Lg,
}

impl SizeToken {
    pub const ALL: [SizeToken; 3] = [SizeToken::Sm, SizeToken::Md, SizeToken::Lg];

    /// Pixel dimension for this token.
    pub fn pixels(self) -> u32 {
        match self {
            SizeToken::Sm => 24,
            SizeToken::Md => 32,
            SizeToken::Lg => 48,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SizeToken::Sm => "sm",
            SizeToken::Md => "md",
            SizeToken::Lg => "lg",
        }
    }

    /// Parse a token, falling back to the default (`md`) with a warning when
    /// the token is unrecognized. For loosely-typed inputs such as markup
    /// attributes; typed callers should use [`FromStr`].
    pub fn parse_or_default(token: &str) -> Self {
        token.parse::<SizeToken>().unwrap_or_else(|e| {
            tracing::warn!(token, "{e}; using default size");
            SizeToken::default()
        })
    }
}

impl FromStr for SizeToken {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| OptionsError::InvalidSizeToken {
                token: s.to_string(),
            })
    }
}

/// Requested size: a named token or an absolute pixel count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GlyphSize {
    Token(SizeToken),
    Pixels(u32),
}

impl GlyphSize {
    /// Pixel dimension; pixel sizes pass through unchanged.
    pub fn pixels(self) -> u32 {
        match self {
            GlyphSize::Token(t) => t.pixels(),
            GlyphSize::Pixels(px) => px,
        }
    }

    /// The token, if this size is named.
    pub fn token(self) -> Option<SizeToken> {
        match self {
            GlyphSize::Token(t) => Some(t),
            GlyphSize::Pixels(_) => None,
        }
    }
}

impl Default for GlyphSize {
    fn default() -> Self {
        GlyphSize::Token(SizeToken::default())
    }
}

impl From<SizeToken> for GlyphSize {
    fn from(t: SizeToken) -> Self {
        GlyphSize::Token(t)
    }
}

impl From<u32> for GlyphSize {
    fn from(px: u32) -> Self {
        GlyphSize::Pixels(px)
    }
}

/// Accepts `sm`/`md`/`lg` or a decimal pixel count.
impl FromStr for GlyphSize {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(px) = s.parse::<u32>() {
            return Ok(GlyphSize::Pixels(px));
        }
        s.parse::<SizeToken>().map(GlyphSize::Token)
    }
}

/// Declares a closed, lowercase-serialized token enum with `as_str`,
/// `Display`, and a strict `FromStr`.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $option:literal {
            $first:ident => $first_token:literal
            $(, $variant:ident => $token:literal)* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $first,
            $($variant),*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$name::$first, $($name::$variant),*];

            pub fn as_str(self) -> &'static str {
                match self {
                    $name::$first => $first_token,
                    $($name::$variant => $token),*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = OptionsError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $first_token => Ok($name::$first),
                    $($token => Ok($name::$variant),)*
                    _ => Err(OptionsError::MalformedOptions {
                        option: $option,
                        token: s.to_string(),
                        expected: concat!($first_token $(, ", ", $token)*),
                    }),
                }
            }
        }
    };
}

token_enum! {
    /// Color theme token.
    GlyphColor, "color" {
        Primary => "primary",
        Success => "success",
        Warning => "warning",
        Error => "error",
        Info => "info",
        Muted => "muted",
    }
}

token_enum! {
    /// Visual variant token.
    GlyphVariant, "variant" {
        Filled => "filled",
        Outline => "outline",
    }
}

token_enum! {
    /// Animation token.
    GlyphAnimation, "animation" {
        Pulse => "pulse",
        Spin => "spin",
        Bounce => "bounce",
    }
}

impl fmt::Display for SizeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-call render options. Everything defaults to "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// `None` means the default size (`md`).
    pub size: Option<GlyphSize>,
    pub color: Option<GlyphColor>,
    pub variant: Option<GlyphVariant>,
    pub animation: Option<GlyphAnimation>,
    /// Keyboard-reachable even without a click handler.
    pub interactive: bool,
    pub disabled: bool,
    /// Replaces the descriptor description as the accessibility label when
    /// non-empty.
    pub label: Option<String>,
    /// Extra class string, appended after every generated class.
    pub class_name: Option<String>,
    /// Inline style overrides, applied in order after the computed size.
    pub style: Vec<(String, String)>,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: impl Into<GlyphSize>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn color(mut self, color: GlyphColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn variant(mut self, variant: GlyphVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn animation(mut self, animation: GlyphAnimation) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.push((property.into(), value.into()));
        self
    }

    /// Strictly parse string-typed options (CLI flags, attribute maps).
    pub fn parse(
        size: Option<&str>,
        color: Option<&str>,
        variant: Option<&str>,
        animation: Option<&str>,
    ) -> OptionsResult<Self> {
        Ok(Self {
            size: size.map(str::parse).transpose()?,
            color: color.map(str::parse).transpose()?,
            variant: variant.map(str::parse).transpose()?,
            animation: animation.map(str::parse).transpose()?,
            ..Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_table() {
        assert_eq!(SizeToken::Sm.pixels(), 24);
        assert_eq!(SizeToken::Md.pixels(), 32);
        assert_eq!(SizeToken::Lg.pixels(), 48);
        assert_eq!(GlyphSize::default().pixels(), 32);
        assert_eq!(GlyphSize::Pixels(64).pixels(), 64);
    }

    #[test]
    fn size_parsing() {
        assert_eq!("lg".parse::<GlyphSize>().unwrap(), GlyphSize::Token(SizeToken::Lg));
        assert_eq!("64".parse::<GlyphSize>().unwrap(), GlyphSize::Pixels(64));
        assert!(matches!(
            "huge".parse::<GlyphSize>(),
            Err(OptionsError::InvalidSizeToken { token }) if token == "huge"
        ));
    }

    #[test]
    fn lenient_size_falls_back_to_md() {
        assert_eq!(SizeToken::parse_or_default("sm"), SizeToken::Sm);
        assert_eq!(SizeToken::parse_or_default("2xl"), SizeToken::Md);
    }

    #[test]
    fn token_enums_parse_strictly() {
        assert_eq!("success".parse::<GlyphColor>().unwrap(), GlyphColor::Success);
        assert_eq!("outline".parse::<GlyphVariant>().unwrap(), GlyphVariant::Outline);
        assert_eq!("spin".parse::<GlyphAnimation>().unwrap(), GlyphAnimation::Spin);

        let err = "neon".parse::<GlyphColor>().unwrap_err();
        match err {
            OptionsError::MalformedOptions { option, expected, .. } => {
                assert_eq!(option, "color");
                assert!(expected.contains("primary"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_builds_options() {
        let opts = RenderOptions::parse(Some("sm"), None, Some("outline"), Some("pulse")).unwrap();
        assert_eq!(opts.size, Some(GlyphSize::Token(SizeToken::Sm)));
        assert_eq!(opts.variant, Some(GlyphVariant::Outline));
        assert_eq!(opts.animation, Some(GlyphAnimation::Pulse));
        assert!(RenderOptions::parse(None, Some("plaid"), None, None).is_err());
    }

    #[test]
    fn builder_accumulates_style_in_order() {
        let opts = RenderOptions::new()
            .size(64_u32)
            .style("opacity", "0.5")
            .style("margin", "0");
        assert_eq!(opts.size, Some(GlyphSize::Pixels(64)));
        assert_eq!(opts.style[0].0, "opacity");
        assert_eq!(opts.style[1].0, "margin");
    }

    #[test]
    fn options_deserialize_from_json() {
        let opts: RenderOptions =
            serde_json::from_str(r#"{ "size": "lg", "color": "info", "disabled": true }"#).unwrap();
        assert_eq!(opts.size, Some(GlyphSize::Token(SizeToken::Lg)));
        assert_eq!(opts.color, Some(GlyphColor::Info));
        assert!(opts.disabled);

        let opts: RenderOptions = serde_json::from_str(r#"{ "size": 40 }"#).unwrap();
        assert_eq!(opts.size, Some(GlyphSize::Pixels(40)));
    }
}
