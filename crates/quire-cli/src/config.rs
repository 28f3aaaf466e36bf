//! Configuration for the Quire demo.
//!
//! Provides the [`QuireConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `QUIRE_CONFIG` environment variable
//! 3. XDG default: `~/.config/quire/config.toml`
//! 4. Built-in defaults
//!
//! Environment variables use the `QUIRE_` prefix and override file values,
//! e.g. `QUIRE_USERS="sara,sami"` or `QUIRE_DOCUMENTS_PROTECTED="..."`.
//! Environment values arrive as strings, so the username lists also accept
//! a comma-separated string.

use confyg::{Confygery, env};
use quire_core::{Error, Result};
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the demo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuireConfig {
    /// Usernames placed on the allow-list before any read.
    #[serde(deserialize_with = "usernames")]
    pub allowed_users: Vec<String>,

    /// Users who attempt to read, in order. The first also reads the
    /// unprotected document.
    #[serde(deserialize_with = "usernames")]
    pub users: Vec<String>,

    /// Document texts.
    pub documents: DocumentsConfig,
}

/// Content of the demo documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentsConfig {
    /// Text of the document read without any check.
    pub unprotected: String,

    /// Text of the document behind the proxy.
    pub protected: String,
}

// ============================================================================
// Username lists
// ============================================================================

/// Deserialize a username list from a sequence or a comma-separated string.
fn usernames<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct Usernames;

    impl<'de> Visitor<'de> for Usernames {
        type Value = Vec<String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a list of usernames or a comma-separated string")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
            Ok(split_usernames(v))
        }

        fn visit_seq<A: SeqAccess<'de>>(
            self,
            mut seq: A,
        ) -> std::result::Result<Self::Value, A::Error> {
            let mut names = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(name) = seq.next_element::<String>()? {
                names.push(name);
            }
            Ok(names)
        }
    }

    deserializer.deserialize_any(Usernames)
}

/// Split `"sara, sami"` into trimmed, non-empty usernames.
fn split_usernames(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for QuireConfig {
    fn default() -> Self {
        Self {
            allowed_users: vec!["sara".to_string()],
            users: vec!["sara".to_string(), "sami".to_string()],
            documents: DocumentsConfig::default(),
        }
    }
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            unprotected: "This is an unprotected document.".to_string(),
            protected: "This is a protected document.".to_string(),
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl QuireConfig {
    /// Load configuration from file, environment, and defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                log::debug!("Loading config from {}", path.display());
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level("QUIRE");
        env_opts.add_section("documents");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var("QUIRE_CONFIG") {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("quire").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================
