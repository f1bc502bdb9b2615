// SPDX-License-Identifier: MPL-2.0
//! Localization of the page copy.
//!
//! # Features
//!
//! - Translation tables loaded from embedded or on-disk `.ftl` bundles
//! - Locale detection from CLI, config, or the visitor's environment
//! - Fallback to a default locale, then to the key itself, on any miss
//!
//! Nothing here fails the caller for a localization problem: an unknown
//! key renders as the key, an unknown locale renders the fallback table and
//! a malformed language tag selects the default locale.

pub mod bundle;
pub mod locale;
pub mod registry;
pub mod table;

pub use locale::{resolve_active_locale, EnvironmentPreference, LocaleResolver, LocaleTag};
pub use registry::{LocaleCoverage, TranslationRegistry};
pub use table::TranslationTable;

use crate::config::Config;

/// Builds the registry from `config` and activates the resolved locale.
///
/// Sources are tried in order: `cli_lang`, then `config.language`, then the
/// environment. A forced value is taken only when it parses and its
/// language has a table; otherwise the next source decides.
pub fn init(
    cli_lang: Option<&str>,
    environment: &EnvironmentPreference,
    config: &Config,
) -> TranslationRegistry {
    let mut registry = TranslationRegistry::from_config(config);
    let resolver = LocaleResolver::new(config.default_locale_tag());
    let supported = registry.locales();

    let cli_tag = cli_lang.and_then(|lang| LocaleTag::parse(lang).ok());
    let forced = [cli_tag, config.language_tag()]
        .into_iter()
        .flatten()
        .find(|tag| {
            let available = supported.contains(&tag.primary());
            if !available {
                tracing::debug!(%tag, "forced language has no table, trying next source");
            }
            available
        });

    let locale = match forced {
        Some(tag) => resolver.resolve(&[tag.as_str()], &supported),
        None => resolver.resolve(environment.preferences().as_slice(), &supported),
    }
    .clone();
    registry.set_active_locale(locale);
    registry
}
