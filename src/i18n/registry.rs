// SPDX-License-Identifier: MPL-2.0
//! The translation registry: one table per locale, an active locale and a
//! fallback locale.
//!
//! # Lookup policy
//!
//! 1. the active locale's table, if it has the key;
//! 2. the fallback locale's table, if it has the key;
//! 3. the key itself, so a miss renders as visible, diagnosable text.
//!
//! Lookups never fail and never return an empty string: an empty stored
//! value counts as a miss.
//! Tables are replaced wholesale on re-registration and never removed.

use super::bundle;
use super::locale::LocaleTag;
use super::table::TranslationTable;
use crate::config::Config;
use std::collections::{BTreeSet, HashMap};

/// Per-locale key coverage measured against the union of all keys.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleCoverage {
    pub locale: LocaleTag,
    pub present: usize,
    pub missing: Vec<String>,
}

impl LocaleCoverage {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct TranslationRegistry {
    tables: HashMap<LocaleTag, TranslationTable>,
    active: LocaleTag,
    fallback: LocaleTag,
    sanitize_markup: bool,
}

impl Default for TranslationRegistry {
    fn default() -> Self {
        Self::new(LocaleTag::default())
    }
}

impl TranslationRegistry {
    /// An empty registry. The fallback locale is also the initial active one.
    pub fn new(fallback: LocaleTag) -> Self {
        Self {
            tables: HashMap::new(),
            active: fallback.clone(),
            fallback,
            sanitize_markup: false,
        }
    }

    /// Embedded bundles, then the configured bundle directory on top.
    ///
    /// An unreadable bundle directory is logged and ignored.
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::new(config.fallback_locale_tag())
            .with_sanitize_markup(config.sanitize_markup);

        for (locale, table) in bundle::embedded_tables() {
            registry.register(locale, table);
        }

        if let Some(dir) = &config.bundle_dir {
            match bundle::load_dir(dir) {
                Ok(tables) => {
                    for (locale, table) in tables {
                        registry.register(locale, table);
                    }
                }
                Err(err) => {
                    tracing::warn!(dir = %dir.display(), %err, "bundle directory unavailable");
                }
            }
        }

        registry
    }

    /// Stores the sanitization setting. Values are never altered by the
    /// registry; consumers inserting them into markup decide what it means.
    pub fn with_sanitize_markup(mut self, enabled: bool) -> Self {
        self.sanitize_markup = enabled;
        self
    }

    pub fn sanitize_markup(&self) -> bool {
        self.sanitize_markup
    }

    /// Adds the table for `locale`, replacing any previous one entirely.
    pub fn register(&mut self, locale: LocaleTag, table: TranslationTable) {
        tracing::debug!(%locale, keys = table.len(), "registering translation table");
        if self.tables.insert(locale.clone(), table).is_some() {
            tracing::debug!(%locale, "replaced existing translation table");
        }
    }

    /// Always succeeds. Without a table for `locale`, lookups use the
    /// fallback until one is registered.
    pub fn set_active_locale(&mut self, locale: LocaleTag) {
        if !self.tables.contains_key(&locale) {
            tracing::debug!(%locale, fallback = %self.fallback, "active locale has no table yet");
        }
        self.active = locale;
    }

    pub fn active_locale(&self) -> &LocaleTag {
        &self.active
    }

    pub fn fallback_locale(&self) -> &LocaleTag {
        &self.fallback
    }

    pub fn has_locale(&self, locale: &str) -> bool {
        self.tables.contains_key(locale)
    }

    /// Registered locales, sorted.
    pub fn locales(&self) -> Vec<LocaleTag> {
        let mut locales: Vec<LocaleTag> = self.tables.keys().cloned().collect();
        locales.sort_unstable();
        locales
    }

    /// Steps 1 and 2 of the lookup policy; `None` is a miss in both tables.
    pub fn get(&self, key: &str) -> Option<&str> {
        [&self.active, &self.fallback]
            .into_iter()
            .filter_map(|locale| self.tables.get(locale))
            .find_map(|table| table.get(key).filter(|value| !value.is_empty()))
    }

    pub fn lookup(&self, key: &str) -> String {
        match self.get(key) {
            Some(value) => value.to_string(),
            None => {
                tracing::debug!(key, locale = %self.active, "missing translation");
                key.to_string()
            }
        }
    }

    fn all_keys(&self) -> BTreeSet<&str> {
        self.tables.values().flat_map(|table| table.keys()).collect()
    }

    /// Every key defined by any registered table, sorted.
    pub fn keys(&self) -> Vec<&str> {
        self.all_keys().into_iter().collect()
    }

    /// Keys some registered table defines that `locale`'s table lacks.
    ///
    /// Ignores the fallback: this reports gaps in the table itself. A locale
    /// with no table is missing every key.
    pub fn missing_keys(&self, locale: &str) -> Vec<String> {
        let table = self.tables.get(locale);
        self.all_keys()
            .into_iter()
            .filter(|key| !table.is_some_and(|t| t.contains_key(key)))
            .map(String::from)
            .collect()
    }

    /// Coverage of every registered locale, sorted by locale.
    pub fn coverage(&self) -> Vec<LocaleCoverage> {
        let total = self.all_keys().len();
        self.locales()
            .into_iter()
            .map(|locale| {
                let missing = self.missing_keys(locale.as_str());
                LocaleCoverage {
                    present: total - missing.len(),
                    missing,
                    locale,
                }
            })
            .collect()
    }
}
