//! Configuration loader and path helpers.
//!
//! Uses Figment to merge `docindex.toml` + `docindex.<env>.toml` + `DOCINDEX_*` env vars.
//! Configured paths accept `~` and `${VAR}`.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::error::Error;

/// How records that repeat a location are handled at load time.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Collapse repeats into the first occurrence, joining their text.
    #[default]
    Merge,
    /// Fail the load on the first repeat.
    Reject,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexSettings {
    pub path: String,
    pub duplicates: DuplicatePolicy,
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self { path: "search_index.js".to_string(), duplicates: DuplicatePolicy::Merge }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchSettings {
    pub default_limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self { default_limit: 20 }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub index: IndexSettings,
    #[serde(default)]
    pub search: SearchSettings,
}

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file("docindex.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("docindex.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("docindex.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("docindex.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("DOCINDEX_").split("__"));

        Self::from_figment(figment)
    }

    /// Wrap an already assembled figment, validating the typed settings.
    pub fn from_figment(figment: Figment) -> anyhow::Result<Self> {
        let config = Self { figment };
        config.settings()?;
        Ok(config)
    }

    pub fn settings(&self) -> anyhow::Result<Settings> {
        let settings: Settings = self
            .figment
            .extract()
            .map_err(|e| anyhow::anyhow!("Failed to extract settings: {}", e))?;
        if settings.search.default_limit == 0 {
            return Err(Error::InvalidConfig("search.default_limit must be greater than 0".to_string()).into());
        }
        Ok(settings)
    }

    /// Configured index path with `~` and env vars expanded.
    pub fn index_path(&self) -> anyhow::Result<PathBuf> {
        Ok(expand_path(self.settings()?.index.path))
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}
