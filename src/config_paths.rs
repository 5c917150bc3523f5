//! Centralized file locations for edgebar
//!
//! The settings file sits next to the executable so a portable copy carries its
//! preferences with it. Logs go to the per-user config directory:
//! - Unix/macOS: `~/.config/edgebar/logs/`
//! - Windows: `%APPDATA%\edgebar\logs\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "edgebar";
const SETTINGS_FILE: &str = "settings.yaml";

/// `<exe dir>/settings.yaml`
pub fn settings_file() -> Option<PathBuf> {
    let exe = env::current_exe().ok()?;
    exe.parent().map(|dir| dir.join(SETTINGS_FILE))
}

/// Base per-user config directory for edgebar
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/edgebar`
///   - Else: `~/.config/edgebar`
///
/// Windows:
///   - `%APPDATA%\edgebar`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/edgebar/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&logs)?;
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_file_is_next_to_executable() {
        let path = settings_file().unwrap();
        let exe_dir = env::current_exe().unwrap().parent().unwrap().to_path_buf();
        assert_eq!(path.parent().unwrap(), exe_dir);
        assert!(path.to_string_lossy().ends_with("settings.yaml"));
    }

    #[test]
    fn test_logs_dir_is_under_config_dir() {
        let config = config_dir().unwrap();
        let logs = logs_dir().unwrap();
        assert!(logs.starts_with(&config));
        assert!(config.to_string_lossy().contains("edgebar"));
    }
}
