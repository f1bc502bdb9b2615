// SPDX-License-Identifier: MPL-2.0
//! Locale tags and the rule that picks the active locale from the
//! visitor's reported language preference.
//!
//! Resolution only looks at the language subtag of the first reported
//! preference: `es-MX` and `es-ES` both select the `es` table, since the
//! tables are not region specific.

use crate::config::DEFAULT_LOCALE;
use crate::error::{Error, Result};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use unic_langid::LanguageIdentifier;

/// A canonicalized language tag such as `en` or `es-MX`.
///
/// Always non-empty. Language subtags are lowercase, regions uppercase and
/// `_` separators are rewritten to `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleTag(String);

impl LocaleTag {
    pub fn parse(tag: &str) -> Result<Self> {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidLocale(tag.to_string()));
        }
        let langid: LanguageIdentifier = trimmed
            .parse()
            .map_err(|_| Error::InvalidLocale(tag.to_string()))?;
        // `und` parses, but names no language we could ever serve.
        if langid.language.as_str() == "und" {
            return Err(Error::InvalidLocale(tag.to_string()));
        }
        Ok(Self(langid.to_string()))
    }

    /// The language subtag alone: `es-MX` becomes `es`.
    pub fn primary(&self) -> LocaleTag {
        match self.0.split_once('-') {
            Some((language, _)) => Self(language.to_string()),
            None => self.clone(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_langid(&self) -> LanguageIdentifier {
        // Canonical tags always re-parse.
        self.0.parse().unwrap_or_default()
    }
}

impl Default for LocaleTag {
    fn default() -> Self {
        Self(DEFAULT_LOCALE.to_string())
    }
}

impl FromStr for LocaleTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LocaleTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LocaleTag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// What the hosting environment reports about the visitor's language.
///
/// Mirrors a browser's `navigator.language` plus the legacy
/// `navigator.userLanguage` field. The primary field wins when both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentPreference {
    pub language: Option<String>,
    pub user_language: Option<String>,
}

impl EnvironmentPreference {
    pub fn new(language: Option<String>, user_language: Option<String>) -> Self {
        Self {
            language,
            user_language,
        }
    }

    /// Reads the operating system locale as the primary preference.
    pub fn from_system() -> Self {
        Self::new(sys_locale::get_locale(), None)
    }

    /// Reported tags in priority order, blank fields skipped.
    pub fn preferences(&self) -> Vec<&str> {
        [self.language.as_deref(), self.user_language.as_deref()]
            .into_iter()
            .flatten()
            .filter(|tag| !tag.trim().is_empty())
            .collect()
    }
}

/// Picks the locale to activate from the reported preferences.
///
/// Only the first preference is considered. Its language subtag is returned
/// when it is one of `supported_locales`, otherwise `default_locale` is.
/// Empty or unparsable input also yields `default_locale`.
pub fn resolve_active_locale<S: AsRef<str>>(
    reported_preferences: &[S],
    supported_locales: &[LocaleTag],
    default_locale: &LocaleTag,
) -> LocaleTag {
    let Some(primary) = reported_preferences.first() else {
        tracing::debug!(default = %default_locale, "no reported language, using default");
        return default_locale.clone();
    };
    let primary = primary.as_ref();

    let language = match LocaleTag::parse(primary) {
        Ok(tag) => tag.primary(),
        Err(_) => {
            tracing::debug!(tag = primary, default = %default_locale, "malformed language tag");
            return default_locale.clone();
        }
    };

    if supported_locales.contains(&language) {
        language
    } else {
        tracing::debug!(%language, default = %default_locale, "unsupported language");
        default_locale.clone()
    }
}

/// Session-scoped resolver: the first resolution is cached and returned by
/// every later call, whatever its arguments.
#[derive(Debug)]
pub struct LocaleResolver {
    default_locale: LocaleTag,
    resolved: OnceLock<LocaleTag>,
}

impl Default for LocaleResolver {
    fn default() -> Self {
        Self::new(LocaleTag::default())
    }
}

impl LocaleResolver {
    pub fn new(default_locale: LocaleTag) -> Self {
        Self {
            default_locale,
            resolved: OnceLock::new(),
        }
    }

    pub fn default_locale(&self) -> &LocaleTag {
        &self.default_locale
    }

    pub fn resolve<S: AsRef<str>>(
        &self,
        reported_preferences: &[S],
        supported_locales: &[LocaleTag],
    ) -> &LocaleTag {
        self.resolved.get_or_init(|| {
            let locale = resolve_active_locale(
                reported_preferences,
                supported_locales,
                &self.default_locale,
            );
            tracing::debug!(%locale, "active locale resolved");
            locale
        })
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    pub fn resolved(&self) -> Option<&LocaleTag> {
        self.resolved.get()
    }
}
