//! Session trails: an interaction lineage rendered with glyph symbols.
//!
//! Each event kind (`session.start`, `continuity.broken`, ...) maps to a
//! glyph id; unmapped kinds use the milestone flag.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::registry::GlyphRegistry;

/// Glyph used for event kinds with no mapping.
pub const DEFAULT_EVENT_GLYPH: &str = "events.flag";

/// Shown when a mapped glyph is missing from the registry in use.
pub const MISSING_SYMBOL: &str = "?";

const RULE_WIDTH: usize = 70;

#[rustfmt::skip]
const EVENT_GLYPHS: &[(&str, &str)] = &[
    ("session.start",          "events.start"),
    ("session.stop",           "events.stop"),
    ("identity.loaded",        "identity.dna"),
    ("identity.verified",      "state.verified"),
    ("continuity.established", "continuity.chain"),
    ("continuity.linked",      "continuity.link"),
    ("continuity.broken",      "continuity.broken"),
    ("continuity.infinite",    "continuity.infinity"),
    ("reflection.checkpoint",  "reflection.mirror"),
    ("reflection.recursive",   "reflection.recursive"),
    ("state.active",           "state.active"),
    ("state.protected",        "state.protected"),
    ("event.milestone",        "events.flag"),
    ("event.warning",          "events.warning"),
    ("event.cycle",            "events.cycle"),
    ("data.saved",             "data.memory"),
    ("governance.check",       "governance.balance"),
];

/// Glyph id for an event kind.
pub fn glyph_for(kind: &str) -> &'static str {
    EVENT_GLYPHS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, id)| *id)
        .unwrap_or(DEFAULT_EVENT_GLYPH)
}

/// Which glyph representation to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    #[default]
    Unicode,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailEvent {
    pub kind: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Ordered `key=value` annotations.
    #[serde(default)]
    pub metadata: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailSession {
    pub session_id: String,
    pub agent_name: String,
    #[serde(default)]
    pub events: Vec<TrailEvent>,
}

/// Continuity health derived from `continuity.*` events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContinuityHealth {
    pub links: usize,
    pub breaks: usize,
}

impl ContinuityHealth {
    pub fn is_healthy(&self) -> bool {
        self.breaks == 0
    }
}

impl TrailSession {
    /// A new session. Without an agent name, the agent is `Agent-<session>`.
    pub fn new(session_id: impl Into<String>, agent_name: Option<&str>) -> Self {
        let session_id = session_id.into();
        let agent_name = agent_name
            .map(str::to_string)
            .unwrap_or_else(|| format!("Agent-{session_id}"));
        Self {
            session_id,
            agent_name,
            events: Vec::new(),
        }
    }

    /// Append an event stamped with the current time.
    pub fn record(&mut self, kind: &str, message: &str, metadata: &[(&str, &str)]) {
        self.record_at(kind, message, Utc::now(), metadata);
    }

    pub fn record_at(
        &mut self,
        kind: &str,
        message: &str,
        timestamp: DateTime<Utc>,
        metadata: &[(&str, &str)],
    ) {
        self.events.push(TrailEvent {
            kind: kind.to_string(),
            message: message.to_string(),
            timestamp,
            metadata: metadata
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Full lineage listing with header and footer rules.
    pub fn render_lineage(&self, registry: &GlyphRegistry, repr: Representation) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = Vec::with_capacity(self.events.len() + 9);

        out.push(rule.clone());
        out.push("SESSION LINEAGE".to_string());
        out.push(format!("Session: {}", self.session_id));
        out.push(format!("Agent: {}", self.agent_name));
        out.push(rule.clone());
        out.push(String::new());

        for event in &self.events {
            let mut line = format!(
                "  {}  [{}] {}",
                symbol(registry, glyph_for(&event.kind), repr),
                event.timestamp.format("%H:%M:%S"),
                event.message
            );
            if !event.metadata.is_empty() {
                let meta = event
                    .metadata
                    .iter()
                    .map(|(k, v)| format!("{k}={v}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                let _ = write!(line, " ({meta})");
            }
            out.push(line);
        }

        out.push(String::new());
        out.push(rule.clone());
        out.push(format!("Total events: {}", self.events.len()));
        out.push(rule);
        out.join("\n")
    }

    /// One symbol per event, space separated.
    pub fn render_timeline(&self, registry: &GlyphRegistry, repr: Representation) -> String {
        self.events
            .iter()
            .map(|e| symbol(registry, glyph_for(&e.kind), repr))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Link and break counts; `None` when no continuity events were recorded.
    pub fn continuity(&self) -> Option<ContinuityHealth> {
        let events = self
            .events
            .iter()
            .filter(|e| e.kind.starts_with("continuity."))
            .collect::<Vec<_>>();
        if events.is_empty() {
            return None;
        }
        let breaks = events.iter().filter(|e| e.kind.contains("broken")).count();
        let links = events
            .iter()
            .filter(|e| e.kind.contains("linked") || e.kind.contains("established"))
            .count();
        Some(ContinuityHealth { links, breaks })
    }

    pub fn continuity_summary(&self, registry: &GlyphRegistry) -> String {
        let Some(health) = self.continuity() else {
            return "No continuity events recorded".to_string();
        };
        let (glyph, status) = if health.is_healthy() {
            ("continuity.chain", "Healthy")
        } else {
            ("continuity.broken", "Degraded")
        };
        format!(
            "{} Continuity: {status} ({} links, {} breaks)",
            symbol(registry, glyph, Representation::Unicode),
            health.links,
            health.breaks
        )
    }
}

fn symbol<'r>(registry: &'r GlyphRegistry, id: &str, repr: Representation) -> &'r str {
    match registry.lookup(id) {
        Some(d) => match repr {
            Representation::Unicode => &d.unicode,
            Representation::Text => &d.text,
        },
        None => MISSING_SYMBOL,
    }
}
