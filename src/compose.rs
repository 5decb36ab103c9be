//! Composite presentations built on a single glyph: badges and status lines.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bind::{self, BoundGlyph, ClickHandler};
use crate::error::OptionsError;
use crate::options::{RenderOptions, SizeToken};
use crate::resolve::Resolver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    #[default]
    Default,
    Primary,
    Success,
    Warning,
    Error,
}

impl BadgeVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeVariant::Default => "default",
            BadgeVariant::Primary => "primary",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Error => "error",
        }
    }
}

impl FromStr for BadgeVariant {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(BadgeVariant::Default),
            "primary" => Ok(BadgeVariant::Primary),
            "success" => Ok(BadgeVariant::Success),
            "warning" => Ok(BadgeVariant::Warning),
            "error" => Ok(BadgeVariant::Error),
            _ => Err(OptionsError::MalformedOptions {
                option: "badge variant",
                token: s.to_string(),
                expected: "default, primary, success, warning, error",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Warning,
    Error,
    Info,
}

impl StatusKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Warning => "warning",
            StatusKind::Error => "error",
            StatusKind::Info => "info",
        }
    }
}

impl FromStr for StatusKind {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(StatusKind::Success),
            "warning" => Ok(StatusKind::Warning),
            "error" => Ok(StatusKind::Error),
            "info" => Ok(StatusKind::Info),
            _ => Err(OptionsError::MalformedOptions {
                option: "status",
                token: s.to_string(),
                expected: "success, warning, error, info",
            }),
        }
    }
}

/// A small glyph next to a text label.
#[derive(Clone)]
pub struct Badge {
    pub class: String,
    pub label: String,
    pub glyph: BoundGlyph,
    handler: Option<ClickHandler>,
}

impl Badge {
    /// The glyph is always rendered at `sm`; the click handler belongs to
    /// the badge, not the glyph.
    pub fn new(
        resolver: &Resolver<'_>,
        glyph_id: &str,
        label: impl Into<String>,
        variant: BadgeVariant,
        class_name: Option<&str>,
        handler: Option<ClickHandler>,
    ) -> Self {
        let presentation = resolver.resolve(glyph_id, &RenderOptions::new().size(SizeToken::Sm));

        let mut classes = vec!["bg-badge".to_string()];
        if variant != BadgeVariant::Default {
            classes.push(format!("bg-badge-{}", variant.as_str()));
        }
        if let Some(extra) = class_name.map(str::trim).filter(|c| !c.is_empty()) {
            classes.push(extra.to_string());
        }

        Self {
            class: classes.join(" "),
            label: label.into(),
            glyph: bind::bind(&presentation, None),
            handler,
        }
    }

    pub fn click(&self) -> bool {
        match &self.handler {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }
}

impl fmt::Debug for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Badge")
            .field("class", &self.class)
            .field("label", &self.label)
            .field("glyph", &self.glyph)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

/// A status line: glyph, label, and an optional status dot.
#[derive(Debug, Clone)]
pub struct StatusLine {
    pub class: String,
    pub label: String,
    pub glyph: BoundGlyph,
    pub dot: Option<StatusDot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusDot {
    pub class: String,
    pub aria_label: String,
}

impl StatusLine {
    /// The glyph is rendered at `md`. The dot appears only when `show_dot`
    /// is set and a status is given.
    pub fn new(
        resolver: &Resolver<'_>,
        glyph_id: &str,
        label: impl Into<String>,
        status: Option<StatusKind>,
        show_dot: bool,
        class_name: Option<&str>,
    ) -> Self {
        let presentation = resolver.resolve(glyph_id, &RenderOptions::new().size(SizeToken::Md));

        let mut class = "bg-status".to_string();
        if let Some(extra) = class_name.map(str::trim).filter(|c| !c.is_empty()) {
            class.push(' ');
            class.push_str(extra);
        }

        let dot = status.filter(|_| show_dot).map(|s| StatusDot {
            class: format!("bg-status-dot bg-status-dot-{}", s.as_str()),
            aria_label: format!("Status: {}", s.as_str()),
        });

        Self {
            class,
            label: label.into(),
            glyph: bind::bind(&presentation, None),
            dot,
        }
    }
}
