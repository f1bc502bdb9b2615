// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

/// Infrastructure failures: reading config or bundles, parsing tags.
///
/// Localization misses (unknown key, unregistered locale, malformed
/// browser tag) are not errors; see [`crate::i18n`].
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Invalid locale tag: {0:?}")]
    InvalidLocale(String),
    #[error("Bundle Error: {0}")]
    Bundle(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
