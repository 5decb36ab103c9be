//! The closed set of glyph categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Category of a glyph. Also the first segment of every canonical id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphCategory {
    /// Product and protocol marks (MirrorDNA, LingOS, ...).
    Brand,
    /// Session continuity: chains, links, breaks.
    Continuity,
    /// Agent identity markers.
    Identity,
    /// System state indicators.
    State,
    /// Session events and milestones.
    Events,
    /// Reflection and self-reference.
    Reflection,
    /// Governance and compliance.
    Governance,
    /// Navigation affordances.
    Navigation,
    /// Data at rest and in motion.
    Data,
}

impl GlyphCategory {
    /// Every category, in canonical display order.
    pub const ALL: [GlyphCategory; 9] = [
        GlyphCategory::Brand,
        GlyphCategory::Continuity,
        GlyphCategory::Identity,
        GlyphCategory::State,
        GlyphCategory::Events,
        GlyphCategory::Reflection,
        GlyphCategory::Governance,
        GlyphCategory::Navigation,
        GlyphCategory::Data,
    ];

    /// The lowercase token used in ids and documents.
    pub fn as_str(self) -> &'static str {
        match self {
            GlyphCategory::Brand => "brand",
            GlyphCategory::Continuity => "continuity",
            GlyphCategory::Identity => "identity",
            GlyphCategory::State => "state",
            GlyphCategory::Events => "events",
            GlyphCategory::Reflection => "reflection",
            GlyphCategory::Governance => "governance",
            GlyphCategory::Navigation => "navigation",
            GlyphCategory::Data => "data",
        }
    }

    /// Heading used by the showcase and terminal legend.
    pub fn title(self) -> &'static str {
        match self {
            GlyphCategory::Brand => "Brand",
            GlyphCategory::Continuity => "Continuity",
            GlyphCategory::Identity => "Identity",
            GlyphCategory::State => "State",
            GlyphCategory::Events => "Events",
            GlyphCategory::Reflection => "Reflection",
            GlyphCategory::Governance => "Governance",
            GlyphCategory::Navigation => "Navigation",
            GlyphCategory::Data => "Data",
        }
    }

    /// Parse a category token, returning `None` outside the closed set.
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == token)
    }
}

impl fmt::Display for GlyphCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GlyphCategory {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| RegistryError::UnknownCategory {
            category: s.to_string(),
        })
    }
}
