//! App message handlers (startup, screen changes, quit)

use crate::commands::Cmd;
use crate::geometry::Point;
use crate::messages::AppMsg;
use crate::model::AppModel;

use super::dock;

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Started => {
            if model.launch_hidden {
                let screen = model.screens.primary;
                let size = model.panel.size;
                model.panel.position = Point::new(
                    screen.x + (screen.width - size.width) / 2,
                    screen.y + (screen.height - size.height) / 2,
                );
                dock::hide_to_side(model);
                tracing::info!(side = ?model.panel.last_docked_side, "started hidden");
            }
            Some(Cmd::SyncWindows)
        }

        AppMsg::ScreensChanged(layout) => {
            if model.screens == layout {
                return None;
            }
            tracing::info!(primary = ?layout.primary, combined = ?layout.combined, "screens changed");
            model.screens = layout;
            dock::align_indicators(model);
            Some(Cmd::SyncWindows)
        }

        AppMsg::Quit => Some(Cmd::Exit),
    }
}
