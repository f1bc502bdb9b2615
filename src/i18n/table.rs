// SPDX-License-Identifier: MPL-2.0
//! Key to display-string tables, parsed from Fluent sources.
//!
//! Values are opaque: inline markup such as `<strong>` or `&apos;` passes
//! through untouched.

use super::locale::LocaleTag;
use crate::error::{Error, Result};
use fluent_bundle::{FluentBundle, FluentResource};
use fluent_syntax::ast;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from an FTL source, one message per key.
    ///
    /// Every message is formatted once, without arguments, so lookups are
    /// plain map reads. Messages that only carry attributes are skipped, as
    /// are terms.
    pub fn from_ftl(locale: &LocaleTag, source: &str) -> Result<Self> {
        let resource = FluentResource::try_new(source.to_string())
            .map_err(|(_, errors)| Error::Bundle(format!("{locale}: {errors:?}")))?;

        let mut bundle: FluentBundle<&FluentResource> = FluentBundle::new(vec![locale.to_langid()]);
        bundle.set_use_isolating(false);
        bundle
            .add_resource(&resource)
            .map_err(|errors| Error::Bundle(format!("{locale}: {errors:?}")))?;

        let mut entries = HashMap::new();
        for entry in resource.entries() {
            let ast::Entry::Message(message) = entry else {
                continue;
            };
            let key = message.id.name;
            let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) else {
                continue;
            };
            let mut errors = vec![];
            let value = bundle.format_pattern(pattern, None, &mut errors);
            if !errors.is_empty() {
                tracing::warn!(%locale, key, ?errors, "skipping message that needs arguments");
                continue;
            }
            entries.insert(key.to_string(), value.into_owned());
        }

        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for TranslationTable {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}
