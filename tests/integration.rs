// SPDX-License-Identifier: MPL-2.0
use page_i18n::config::{self, Config};
use page_i18n::i18n::{self, EnvironmentPreference, LocaleTag, TranslationRegistry, TranslationTable};
use std::fs;
use tempfile::tempdir;

fn tag(s: &str) -> LocaleTag {
    LocaleTag::parse(s).expect("valid tag")
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");
    let browser = EnvironmentPreference::new(Some("en-US".to_string()), None);

    fs::write(&temp_config_file_path, "default_locale = \"en\"\n")
        .expect("Failed to write initial config file");
    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let registry_en = i18n::init(None, &browser, &loaded);
    assert_eq!(registry_en.active_locale().as_str(), "en");
    assert_eq!(registry_en.lookup("FEATURES"), "Features");

    fs::write(&temp_config_file_path, "language = \"es\"\n")
        .expect("Failed to write spanish config file");
    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load spanish config from path");
    let registry_es = i18n::init(None, &browser, &loaded);
    assert_eq!(registry_es.active_locale().as_str(), "es");
    assert_eq!(registry_es.lookup("FEATURES"), "Características");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_unavailable_cli_language_yields_to_browser() {
    let browser = EnvironmentPreference::new(Some("es-ES".to_string()), None);
    let registry = i18n::init(Some("fr"), &browser, &Config::default());
    assert_eq!(registry.active_locale().as_str(), "es");
}

#[test]
fn test_github_blurb_keeps_trailing_space() {
    let registry = TranslationRegistry::from_config(&Config::default());
    assert!(registry.lookup("GH").ends_with("of course. "));
}

#[test]
fn test_browser_language_selects_table() {
    let mexican = EnvironmentPreference::new(Some("es-MX".to_string()), None);
    let registry = i18n::init(None, &mexican, &Config::default());
    assert_eq!(registry.active_locale().as_str(), "es");

    let legacy_only = EnvironmentPreference::new(None, Some("es".to_string()));
    let registry = i18n::init(None, &legacy_only, &Config::default());
    assert_eq!(registry.active_locale().as_str(), "es");

    let french = EnvironmentPreference::new(Some("fr-FR".to_string()), Some("es".to_string()));
    let registry = i18n::init(None, &french, &Config::default());
    assert_eq!(registry.active_locale().as_str(), "en");
}

#[test]
fn test_empty_environment_uses_configured_default() {
    let config = Config {
        default_locale: "es".to_string(),
        ..Config::default()
    };
    let registry = i18n::init(None, &EnvironmentPreference::default(), &config);
    assert_eq!(registry.active_locale().as_str(), "es");
    assert_eq!(registry.fallback_locale().as_str(), "es");
}

#[test]
fn test_bundle_dir_overrides_and_adds_locales() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("fr.ftl"), "FEATURES = Fonctionnalités\n").unwrap();
    fs::write(dir.path().join("es.ftl"), "FEATURES = Funciones\n").unwrap();

    let config = Config {
        bundle_dir: Some(dir.path().to_path_buf()),
        ..Config::default()
    };
    let french = EnvironmentPreference::new(Some("fr-CA".to_string()), None);
    let registry = i18n::init(None, &french, &config);

    assert_eq!(registry.active_locale().as_str(), "fr");
    assert_eq!(registry.lookup("FEATURES"), "Fonctionnalités");
    // The partial French table leans on English for everything else.
    assert_eq!(registry.lookup("KNOW_MORE"), "MORE INFO?");
    assert!(!registry.missing_keys("fr").is_empty());

    let mut registry = registry;
    registry.set_active_locale(tag("es"));
    // The override replaced the embedded Spanish table wholesale.
    assert_eq!(registry.lookup("FEATURES"), "Funciones");
    assert_eq!(registry.lookup("KNOW_MORE"), "MORE INFO?");
}

#[test]
fn test_never_registered_locale_renders_fallback() {
    let mut registry = TranslationRegistry::new(tag("en"));
    registry.register(
        tag("en"),
        [("TAGLINE", "A multi-user <strong>file sync client</strong>")]
            .into_iter()
            .collect::<TranslationTable>(),
    );
    registry.set_active_locale(tag("de"));

    assert_eq!(
        registry.lookup("TAGLINE"),
        "A multi-user <strong>file sync client</strong>"
    );
    assert_eq!(registry.lookup("FOOTER"), "FOOTER");
}

#[test]
fn test_sanitize_flag_flows_from_config() {
    let config = Config {
        sanitize_markup: true,
        ..Config::default()
    };
    let registry = i18n::init(None, &EnvironmentPreference::default(), &config);
    assert!(registry.sanitize_markup());
    assert!(registry.lookup("TAGLINE").contains("<strong>"));
}
