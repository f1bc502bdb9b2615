// SPDX-License-Identifier: MPL-2.0
//! Loading the localization settings from a `settings.toml` file.
//!
//! Settings are read once at startup and never written back.
//!
//! # Examples
//!
//! ```no_run
//! use page_i18n::config;
//!
//! let config = config::load().unwrap_or_default();
//! println!("default locale: {}", config.default_locale_tag());
//! ```

pub mod defaults;

pub use defaults::{DEFAULT_LOCALE, DEFAULT_SANITIZE_MARKUP};

use crate::error::Result;
use crate::i18n::LocaleTag;
use defaults::{APP_NAME, CONFIG_FILE};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Forces a locale, bypassing environment detection.
    #[serde(default)]
    pub language: Option<String>,
    /// Returned by the resolver when no reported preference is supported.
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// Table consulted when the active one lacks a key. Falls back to
    /// `default_locale` when unset.
    #[serde(default)]
    pub fallback_locale: Option<String>,
    /// Stored and exposed, never acted upon by the registry.
    #[serde(default)]
    pub sanitize_markup: bool,
    /// Extra `.ftl` bundles; same-locale files override the embedded ones.
    #[serde(default)]
    pub bundle_dir: Option<PathBuf>,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            default_locale: default_locale(),
            fallback_locale: None,
            sanitize_markup: DEFAULT_SANITIZE_MARKUP,
            bundle_dir: None,
        }
    }
}

impl Config {
    /// The configured default as a tag, or [`DEFAULT_LOCALE`] when the
    /// configured string does not parse.
    pub fn default_locale_tag(&self) -> LocaleTag {
        LocaleTag::parse(&self.default_locale).unwrap_or_else(|_| LocaleTag::default())
    }

    pub fn fallback_locale_tag(&self) -> LocaleTag {
        self.fallback_locale
            .as_deref()
            .and_then(|tag| LocaleTag::parse(tag).ok())
            .unwrap_or_else(|| self.default_locale_tag())
    }

    /// The forced locale, if one is set and parses.
    pub fn language_tag(&self) -> Option<LocaleTag> {
        self.language
            .as_deref()
            .and_then(|tag| LocaleTag::parse(tag).ok())
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid settings, using defaults");
            Ok(Config::default())
        }
    }
}
