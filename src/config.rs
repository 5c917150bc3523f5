//! Sidebar settings persistence
//!
//! Stores preferences in `settings.yaml` next to the executable. The file is
//! read once at startup and written once on exit; any failure leaves the
//! in-memory settings at their defaults.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::DEFAULT_DRAG_THRESHOLD;

/// Default distance (px) within which a released panel snaps flush to an edge
pub const DEFAULT_EDGE_SNAP_DISTANCE: i32 = 20;

/// Settings that persist across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarConfig {
    /// Start hidden behind the edge indicator
    #[serde(rename = "Startup", default)]
    pub start_hidden: bool,

    /// Pointer travel (Manhattan px) that turns a press into a drag
    #[serde(default = "default_drag_threshold")]
    pub drag_threshold: i32,

    /// Released panels closer than this to an edge snap flush to it
    #[serde(default = "default_edge_snap_distance")]
    pub edge_snap_distance: i32,

    /// Command for the file browser button (platform file manager when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_browser_command: Option<String>,

    /// Command for the text editor button (platform default when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_editor_command: Option<String>,
}

fn default_drag_threshold() -> i32 {
    DEFAULT_DRAG_THRESHOLD
}

fn default_edge_snap_distance() -> i32 {
    DEFAULT_EDGE_SNAP_DISTANCE
}

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            start_hidden: false,
            drag_threshold: default_drag_threshold(),
            edge_snap_distance: default_edge_snap_distance(),
            file_browser_command: None,
            text_editor_command: None,
        }
    }
}

impl SidebarConfig {
    /// Load settings from `path`, or return defaults if missing or invalid
    ///
    /// A missing file is created with default contents so the user has
    /// something to edit.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Settings file not found at {}, writing defaults",
                path.display()
            );
            let config = Self::default();
            if let Err(e) = config.save_to(path) {
                tracing::warn!("Could not create default settings: {:#}", e);
            }
            return config;
        }

        match Self::read(path) {
            Ok(config) => {
                tracing::info!("Loaded settings from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}; using defaults", e);
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings at {}", path.display()))?;

        // An empty file parses as YAML null; treat it as "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse settings at {}", path.display()))
    }

    /// Save settings to `path`
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory {}", parent.display())
            })?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;

        tracing::info!("Saved settings to {}", path.display());
        Ok(())
    }
}
