//! Settings persistence tests
//!
//! Tests for loading, saving and defaulting `settings.yaml`.

use edgebar::config::{SidebarConfig, DEFAULT_EDGE_SNAP_DISTANCE};
use edgebar::config_paths;
use edgebar::geometry::ScreenLayout;
use edgebar::model::{AppModel, DEFAULT_DRAG_THRESHOLD};
use tempfile::tempdir;

// ========================================================================
// Defaults
// ========================================================================

#[test]
fn test_missing_file_gives_defaults_and_creates_it() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.yaml");

    let config = SidebarConfig::load_from(&path);

    assert!(!config.start_hidden);
    assert_eq!(config.drag_threshold, DEFAULT_DRAG_THRESHOLD);
    assert_eq!(config.edge_snap_distance, DEFAULT_EDGE_SNAP_DISTANCE);
    assert!(path.exists(), "default settings file should be written");

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("Startup: false"));
}

#[test]
fn test_empty_file_gives_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.yaml");
    std::fs::write(&path, "").unwrap();

    assert_eq!(SidebarConfig::load_from(&path), SidebarConfig::default());
}

#[test]
fn test_invalid_yaml_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.yaml");
    std::fs::write(&path, "Startup: [not, a, bool").unwrap();

    assert_eq!(SidebarConfig::load_from(&path), SidebarConfig::default());
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.yaml");
    std::fs::write(&path, "Startup: true\n").unwrap();

    let config = SidebarConfig::load_from(&path);

    assert!(config.start_hidden);
    assert_eq!(config.drag_threshold, DEFAULT_DRAG_THRESHOLD);
    assert_eq!(config.file_browser_command, None);
}

// ========================================================================
// Round trip
// ========================================================================

#[test]
fn test_start_hidden_persists_across_instances() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.yaml");

    let config = SidebarConfig {
        start_hidden: true,
        ..SidebarConfig::default()
    };
    config.save_to(&path).unwrap();

    let reloaded = SidebarConfig::load_from(&path);
    assert!(reloaded.start_hidden);
}

#[test]
fn test_commands_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.yaml");

    let config = SidebarConfig {
        text_editor_command: Some("kate --new".to_string()),
        file_browser_command: Some("thunar".to_string()),
        edge_snap_distance: 32,
        ..SidebarConfig::default()
    };
    config.save_to(&path).unwrap();

    assert_eq!(SidebarConfig::load_from(&path), config);
}

#[test]
fn test_unset_commands_are_not_written() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.yaml");

    SidebarConfig::default().save_to(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(!content.contains("text_editor_command"));
    assert!(!content.contains("file_browser_command"));
}

#[test]
fn test_model_takes_launch_hidden_from_preference() {
    let config = SidebarConfig {
        start_hidden: true,
        ..SidebarConfig::default()
    };
    let model = AppModel::new(config, ScreenLayout::default());
    assert!(model.launch_hidden);
}

// ========================================================================
// Paths
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    let dir = config_paths::config_dir().unwrap();
    assert!(dir.to_string_lossy().contains("edgebar"));
}

#[test]
fn test_settings_file_ends_with_yaml() {
    let path = config_paths::settings_file().unwrap();
    assert_eq!(path.file_name().unwrap(), "settings.yaml");
}
