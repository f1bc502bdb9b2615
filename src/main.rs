// SPDX-License-Identifier: MPL-2.0
use page_i18n::config;
use page_i18n::i18n::{self, EnvironmentPreference};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = pico_args::Arguments::from_env();
    let lang: Option<String> = match args.opt_value_from_str("--lang") {
        Ok(lang) => lang,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let config_path: Option<PathBuf> = match args.opt_value_from_str("--config") {
        Ok(path) => path,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let key = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    let loaded = match &config_path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    let config = loaded.unwrap_or_else(|err| {
        tracing::warn!(%err, "could not read settings, using defaults");
        config::Config::default()
    });

    let registry = i18n::init(lang.as_deref(), &EnvironmentPreference::from_system(), &config);
    tracing::info!(locale = %registry.active_locale(), "page copy ready");

    match key {
        Some(key) => println!("{}", registry.lookup(&key)),
        None => {
            for key in registry.keys() {
                println!("{key} = {}", registry.lookup(key));
            }
        }
    }
    ExitCode::SUCCESS
}
