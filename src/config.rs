//! User configuration, persisted as TOML.
//!
//! Looked up at `$XDG_CONFIG_HOME/beacon-glyphs/config.toml` (falling back
//! to `~/.config`). A missing file means all defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BeaconResult, ConfigError, ConfigResult};
use crate::options::{GlyphSize, RenderOptions};
use crate::registry::GlyphRegistry;
use crate::resolve::ResolverConfig;

const APP_DIR: &str = "beacon-glyphs";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeaconConfig {
    /// External registry JSON replacing the built-in table.
    pub registry_path: Option<PathBuf>,
    /// Prefix for relative asset paths in emitted markup.
    pub asset_base: String,
    /// List every known id when an unknown glyph is requested.
    pub list_known_on_miss: bool,
    /// Size used when a caller gives none. `sm`, `md`, `lg`, or pixels.
    pub default_size: GlyphSize,
}

impl BeaconConfig {
    /// Default config location, if a home directory can be determined.
    pub fn default_path() -> Option<PathBuf> {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Read and parse a config file. The file must exist.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    fn from_toml(content: &str, path: &Path) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load the explicit path if given, else the default location if it
    /// exists, else defaults.
    pub fn discover(explicit: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn to_toml(&self) -> String {
        // Every field is a plain value; serialization cannot fail.
        toml::to_string_pretty(self).unwrap_or_default()
    }

    pub fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig {
            list_known_on_miss: self.list_known_on_miss,
        }
    }

    /// Fill in the configured default size when the options carry none.
    pub fn apply_defaults(&self, options: RenderOptions) -> RenderOptions {
        if options.size.is_some() {
            return options;
        }
        options.size(self.default_size)
    }

    /// The configured external registry, or `None` to use the built-in one.
    pub fn load_registry(&self) -> BeaconResult<Option<GlyphRegistry>> {
        match &self.registry_path {
            Some(path) => Ok(Some(GlyphRegistry::load(path)?)),
            None => Ok(None),
        }
    }
}
