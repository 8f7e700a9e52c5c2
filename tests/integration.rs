// SPDX-License-Identifier: MPL-2.0
use ehon::config::{self, DEFAULT_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD};
use ehon::i18n::fluent::I18n;
use ehon::ui::theming::ThemeMode;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    fs::write(&config_path, "[general]\nlanguage = \"en-US\"\n")
        .expect("Failed to write initial config file");
    let english = config::load_from_path(&config_path).expect("Failed to load english config");
    let i18n_en = I18n::new(None, &english);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("nav-next"), "Next");

    fs::write(&config_path, "[general]\nlanguage = \"ja\"\n")
        .expect("Failed to write japanese config file");
    let japanese = config::load_from_path(&config_path).expect("Failed to load japanese config");
    let i18n_ja = I18n::new(None, &japanese);
    assert_eq!(i18n_ja.current_locale().to_string(), "ja");
    assert_eq!(i18n_ja.tr("nav-end"), "おわり");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_language_beats_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[general]\nlanguage = \"en-US\"\n",
    )
    .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let i18n = I18n::new(Some("ja".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "ja");
}

#[test]
fn test_full_settings_file_is_applied() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        r#"
[general]
language = "en-US"
theme_mode = "dark"

[navigation]
swipe_threshold = 80.0
"#,
    )
    .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(config.general.language.as_deref(), Some("en-US"));
    assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    assert_eq!(config.navigation.swipe_threshold(), 80.0);
}

#[test]
fn test_missing_settings_file_uses_defaults_silently() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(config.navigation.swipe_threshold(), DEFAULT_SWIPE_THRESHOLD);
}

#[test]
fn test_broken_settings_file_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[general\nlanguage = ")
        .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    let warning = warning.expect("a parse error should be reported");
    assert_eq!(warning.i18n_key(), "error-config-invalid");
    assert_eq!(config, config::Config::default());
}

#[test]
fn test_out_of_range_threshold_is_clamped() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[navigation]\nswipe_threshold = 5000.0\n",
    )
    .expect("Failed to write config file");

    let (config, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config.navigation.swipe_threshold(), MAX_SWIPE_THRESHOLD);
}
