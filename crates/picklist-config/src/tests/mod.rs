use super::*;

#[test]
fn default_config_has_expected_tick_rate() {
    let config = AppConfig::default();
    assert_eq!(config.tick_rate_ms(), 250);
}

#[test]
fn zero_tick_rate_is_clamped() {
    let raw = r#"
[general]
tick_rate_ms = 0
"#;
    let config: AppConfig = toml::from_str(raw).unwrap();
    assert_eq!(config.general.tick_rate_ms, 0);
    assert_eq!(config.tick_rate_ms(), 1);
}

#[test]
fn default_config_has_all_general_fields() {
    let config = AppConfig::default();
    assert!(config.general.mouse);
    assert_eq!(config.general.title, "Items");
}

#[test]
fn default_theme_uses_red_and_green_rows() {
    let config = AppConfig::default();
    assert_eq!(config.theme.selected_bg, "green");
    assert_eq!(config.theme.unselected_bg, "red");
}

#[test]
fn embedded_defaults_match_struct_defaults() {
    let config = AppConfig::default();
    let general = GeneralConfig::default();
    let theme = ThemeConfig::default();
    assert_eq!(config.general.tick_rate_ms, general.tick_rate_ms);
    assert_eq!(config.general.title, general.title);
    assert_eq!(config.theme.selected_bg, theme.selected_bg);
    assert_eq!(config.theme.unselected_fg, theme.unselected_fg);
    assert_eq!(config.theme.status_fg, theme.status_fg);
}

#[test]
fn default_keybindings_present_and_valid() {
    let config = AppConfig::default();
    assert_eq!(config.keybindings.get("quit"), Some("q"));
    assert_eq!(config.keybindings.get("activate"), Some("enter"));
    assert!(validate_keybindings(&config.keybindings).is_empty());
    assert!(check_collisions(&config.keybindings).is_empty());
}

#[test]
fn parse_general_from_toml() {
    let raw = r#"
[general]
tick_rate_ms = 100
title = "Fruit"
"#;
    let config: AppConfig = toml::from_str(raw).unwrap();
    assert_eq!(config.general.tick_rate_ms, 100);
    assert_eq!(config.general.title, "Fruit");
    assert!(config.general.mouse);
}

#[test]
fn kebab_case_aliases_accepted() {
    let raw = r##"
[general]
tick-rate-ms = 50

[theme]
selected-bg = "#00ff00"
"##;
    let config: AppConfig = toml::from_str(raw).unwrap();
    assert_eq!(config.general.tick_rate_ms, 50);
    assert_eq!(config.theme.selected_bg, "#00ff00");
    assert_eq!(config.theme.unselected_bg, "red");
}

#[test]
fn partial_toml_only_general_merges_with_defaults() {
    let mut base = AppConfig::default();
    let user_toml = r#"
[general]
tick_rate_ms = 500
"#;
    let user: AppConfig = toml::from_str(user_toml).unwrap();
    base.merge(user);

    assert_eq!(base.general.tick_rate_ms, 500);
    assert_eq!(base.keybindings.get("quit"), Some("q"));
    assert_eq!(base.theme.selected_bg, "green");
}

#[test]
fn user_keybinding_overrides_single_key() {
    let mut base = AppConfig::default();
    let user_toml = r#"
[keybindings]
quit = "ctrl+q"
"#;
    let user: AppConfig = toml::from_str(user_toml).unwrap();
    base.merge(user);

    assert_eq!(base.keybindings.get("quit"), Some("ctrl+q"));
    assert_eq!(base.keybindings.get("reload"), Some("r"));
}

#[test]
fn load_from_reads_file_and_merges() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[general]\nmouse = false\n").unwrap();

    let config = AppConfig::load_from(&path).unwrap();
    assert!(!config.general.mouse);
    assert_eq!(config.keybindings.get("cursor_down"), Some("down"));
}

#[test]
fn load_from_rejects_invalid_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[general\n").unwrap();

    assert!(AppConfig::load_from(&path).is_err());
}

#[test]
fn save_then_load_preserves_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let mut config = AppConfig::default();
    config.general.title = "Saved".into();
    config.save(&path).unwrap();

    let loaded = AppConfig::load_from(&path).unwrap();
    assert_eq!(loaded.general.title, "Saved");
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    AppConfig::init_at(&path).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);

    let err = AppConfig::init_at(&path).unwrap_err();
    assert!(err.to_string().contains("already exists"));
}
