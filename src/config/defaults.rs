// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

/// Locale used when the environment reports nothing usable.
pub const DEFAULT_LOCALE: &str = "en";

/// Markup in bundle values is inserted as-is unless this is turned on.
pub const DEFAULT_SANITIZE_MARKUP: bool = false;

/// Settings file name inside the application config directory.
pub const CONFIG_FILE: &str = "settings.toml";

/// Directory name under the platform config dir.
pub const APP_NAME: &str = "PageI18n";
