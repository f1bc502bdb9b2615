// SPDX-License-Identifier: MPL-2.0
//! `page_i18n` holds the localized copy of a static marketing page.
//!
//! A [`i18n::TranslationRegistry`] owns one string table per locale and
//! answers lookups with fallback; [`i18n::resolve_active_locale`] turns the
//! visitor's reported language into the locale to activate.

pub mod config;
pub mod error;
pub mod i18n;
