// SPDX-License-Identifier: MPL-2.0
//! Where translation tables come from: `.ftl` files embedded in the binary
//! and, optionally, a local directory of overrides.
//!
//! A bundle's file name is its locale tag (`en.ftl`, `es-MX.ftl`). Files
//! that fail to load are logged and skipped so one broken bundle never
//! blanks the page.

use super::locale::LocaleTag;
use super::table::TranslationTable;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const BUNDLE_EXTENSION: &str = "ftl";

fn locale_from_file_name(file_name: &str) -> Result<LocaleTag> {
    let stem = file_name
        .strip_suffix(".ftl")
        .ok_or_else(|| Error::Bundle(format!("not an .ftl file: {file_name}")))?;
    LocaleTag::parse(stem)
}

/// Tables compiled into the binary, sorted by locale.
pub fn embedded_tables() -> Vec<(LocaleTag, TranslationTable)> {
    let mut tables = Vec::new();
    for file in Asset::iter() {
        let file_name = file.as_ref();
        let Some(content) = Asset::get(file_name) else {
            continue;
        };
        let source = String::from_utf8_lossy(content.data.as_ref());
        match locale_from_file_name(file_name)
            .and_then(|locale| TranslationTable::from_ftl(&locale, &source).map(|t| (locale, t)))
        {
            Ok(loaded) => tables.push(loaded),
            Err(err) => tracing::warn!(file = file_name, %err, "skipping embedded bundle"),
        }
    }
    tables.sort_by(|a, b| a.0.cmp(&b.0));
    tables
}

/// Reads every `.ftl` file in `dir`, sorted by locale.
///
/// Only a missing or unreadable directory is an error; individual files
/// that fail are skipped.
pub fn load_dir(dir: &Path) -> Result<Vec<(LocaleTag, TranslationTable)>> {
    let mut tables = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(BUNDLE_EXTENSION) {
            continue;
        }
        match load_file(&path) {
            Ok(loaded) => tables.push(loaded),
            Err(err) => tracing::warn!(path = %path.display(), %err, "skipping bundle file"),
        }
    }
    tables.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(tables)
}

pub fn load_file(path: &Path) -> Result<(LocaleTag, TranslationTable)> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| Error::Bundle(format!("unusable file name: {}", path.display())))?;
    let locale = locale_from_file_name(file_name)?;
    let source = fs::read_to_string(path)?;
    let table = TranslationTable::from_ftl(&locale, &source)?;
    Ok((locale, table))
}
