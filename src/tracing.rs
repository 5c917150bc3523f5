//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging dock state
//! transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=dock=debug,message=debug` - scoped filtering
//! - `RUST_LOG=edgebar::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/edgebar/logs/edgebar.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::geometry::{Point, Side};
use crate::model::{AppModel, DockState};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`); the file layer always
/// logs at debug level.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "edgebar.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of the dock state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockSnapshot {
    pub state: DockState,
    pub panel_position: Point,
    pub last_docked_side: Side,
    /// Direction of the shown indicator, if any
    pub indicator: Option<Side>,
}

impl DockSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            state: model.panel.state,
            panel_position: model.panel.position,
            last_docked_side: model.panel.last_docked_side,
            indicator: model.indicators.visible().map(|i| i.direction),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &DockSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.state != other.state {
            changes.push(format!("state: {:?} → {:?}", self.state, other.state));
        }
        if self.panel_position != other.panel_position {
            changes.push(format!(
                "panel: ({},{}) → ({},{})",
                self.panel_position.x,
                self.panel_position.y,
                other.panel_position.x,
                other.panel_position.y
            ));
        }
        if self.last_docked_side != other.last_docked_side {
            changes.push(format!(
                "docked side: {:?} → {:?}",
                self.last_docked_side, other.last_docked_side
            ));
        }
        if self.indicator != other.indicator {
            changes.push(format!(
                "indicator: {:?} → {:?}",
                self.indicator, other.indicator
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
