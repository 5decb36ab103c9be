//! Layout for several glyphs shown together. Pure layout: no registry access.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupDirection {
    #[default]
    Horizontal,
    Vertical,
}

impl GroupDirection {
    /// Container class: rows are groups, columns are stacks.
    pub fn class(self) -> &'static str {
        match self {
            GroupDirection::Horizontal => "bg-glyph-group",
            GroupDirection::Vertical => "bg-glyph-stack",
        }
    }
}

impl FromStr for GroupDirection {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" | "row" => Ok(GroupDirection::Horizontal),
            "vertical" | "column" => Ok(GroupDirection::Vertical),
            _ => Err(OptionsError::MalformedOptions {
                option: "direction",
                token: s.to_string(),
                expected: "horizontal, vertical",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupGap {
    Sm,
    #[default]
    Md,
    Lg,
}

impl GroupGap {
    /// CSS gap value.
    pub fn css(self) -> &'static str {
        match self {
            GroupGap::Sm => "0.25rem",
            GroupGap::Md => "0.5rem",
            GroupGap::Lg => "0.75rem",
        }
    }
}

impl FromStr for GroupGap {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sm" => Ok(GroupGap::Sm),
            "md" => Ok(GroupGap::Md),
            "lg" => Ok(GroupGap::Lg),
            _ => Err(OptionsError::MalformedOptions {
                option: "gap",
                token: s.to_string(),
                expected: "sm, md, lg",
            }),
        }
    }
}

/// Container attributes for a glyph group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupLayout {
    pub class: String,
    pub gap: &'static str,
}

impl GroupLayout {
    pub fn new(direction: GroupDirection, gap: GroupGap, class_name: Option<&str>) -> Self {
        let mut class = direction.class().to_string();
        if let Some(extra) = class_name.map(str::trim).filter(|c| !c.is_empty()) {
            class.push(' ');
            class.push_str(extra);
        }
        Self {
            class,
            gap: gap.css(),
        }
    }

    pub fn style_string(&self) -> String {
        format!("gap: {}", self.gap)
    }
}

impl Default for GroupLayout {
    fn default() -> Self {
        Self::new(GroupDirection::default(), GroupGap::default(), None)
    }
}
