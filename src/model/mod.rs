//! Application model - the complete state of the sidebar
//!
//! This module contains all the state types following the Elm Architecture pattern.
//! Nothing in here knows about the windowing toolkit.

pub mod drag;
pub mod indicator;
pub mod panel;

pub use drag::{DragOutcome, DragSession, DEFAULT_DRAG_THRESHOLD};
pub use indicator::{Indicator, Indicators, INDICATOR_SIZE};
pub use panel::{DockState, Panel, PanelButton, PANEL_SIZE};

use crate::config::SidebarConfig;
use crate::geometry::{Point, ScreenLayout};

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    pub panel: Panel,
    pub indicators: Indicators,
    /// Last known screen geometry
    pub screens: ScreenLayout,
    /// Persisted settings, saved back on exit
    pub config: SidebarConfig,
    /// Whether the panel hides itself on startup (preference or `--hidden`)
    pub launch_hidden: bool,
}

impl AppModel {
    /// Create the model with the panel flush right on the primary screen,
    /// vertically centered
    pub fn new(config: SidebarConfig, screens: ScreenLayout) -> Self {
        let primary = screens.primary;
        let position = Point::new(
            primary.right() - panel::PANEL_SIZE.width,
            primary.y + primary.height / 2 - panel::PANEL_SIZE.height / 2,
        );

        Self {
            panel: Panel::new(position),
            indicators: Indicators::default(),
            screens,
            launch_hidden: config.start_hidden,
            config,
        }
    }

    /// Check the panel/indicator invariants, panicking with context on failure
    ///
    /// - visible panel: no indicator is shown
    /// - hidden panel: exactly one indicator is shown, pointing at the hidden side
    pub fn assert_invariants_with_context(&self, context: &str) {
        let visible = self.indicators.visible_count();
        match self.panel.state.hidden_side() {
            None => assert_eq!(
                visible, 0,
                "[{}] panel is visible but {} indicator(s) are shown",
                context, visible
            ),
            Some(side) => {
                assert_eq!(
                    visible, 1,
                    "[{}] panel hidden on {:?} but {} indicator(s) are shown",
                    context, side, visible
                );
                let shown = self.indicators.visible().map(|i| i.direction);
                assert_eq!(
                    shown,
                    Some(side),
                    "[{}] indicator direction does not match hidden side",
                    context
                );
            }
        }
    }
}
