//! Integration tests for the user configuration file

use folio_core::particles::EngineConfig;
use folio_core::theme::ThemeMode;
use folio_core::Config;
use serial_test::serial;
use tempfile::TempDir;

struct HomeGuard {
    previous: Option<String>,
    _dir: TempDir,
}

impl HomeGuard {
    fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let previous = std::env::var("HOME").ok();
        std::env::set_var("HOME", dir.path());
        Self { previous, _dir: dir }
    }
}

impl Drop for HomeGuard {
    fn drop(&mut self) {
        match &self.previous {
            Some(home) => std::env::set_var("HOME", home),
            None => std::env::remove_var("HOME"),
        }
    }
}

#[test]
#[serial]
fn test_missing_config_loads_defaults() {
    let _home = HomeGuard::new();

    let config = Config::load_or_default().expect("defaults");

    assert_eq!(config, Config::default());
    assert!(!Config::get_config_path().exists());
}

#[test]
#[serial]
fn test_theme_toggle_persists() {
    let _home = HomeGuard::new();

    let mut config = Config::load_or_default().expect("defaults");
    config.set_theme(config.theme.toggled());
    config.save().expect("save");

    let path = Config::get_config_path();
    assert!(path.ends_with(".folio/config.yaml"));
    assert!(path.exists());

    let reloaded = Config::load_or_default().expect("reload");
    assert_eq!(reloaded.theme, ThemeMode::Light);
}

#[test]
#[serial]
fn test_effect_overrides_round_trip() {
    let _home = HomeGuard::new();

    let mut config = Config::default();
    config.effects.ambient.max_speed = Some(3.5);
    config.effects.hero.connections = None;
    config.save().expect("save");

    let reloaded = Config::load_or_default().expect("reload");
    assert_eq!(reloaded.effects.ambient.max_speed, Some(3.5));
    assert!(reloaded.effects.hero.connections.is_none());
    assert_eq!(reloaded.effects.trail, EngineConfig::trail());
}

#[test]
#[serial]
fn test_corrupt_config_falls_back_to_defaults() {
    let _home = HomeGuard::new();
    let path = Config::get_config_path();
    std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
    std::fs::write(&path, "effects: [broken").expect("write");

    let config = Config::load_or_default().expect("fallback");

    assert_eq!(config, Config::default());
}
