//! Panel update handlers
//!
//! Pointer handling (click vs drag), action buttons, and window-system events
//! for the panel.

use crate::commands::{Cmd, Tool};
use crate::messages::{PanelMsg, PointerMsg};
use crate::model::{AppModel, DragOutcome, DragSession, PanelButton};

use super::dock;

/// Update function for panel messages
pub fn update_panel(model: &mut AppModel, msg: PanelMsg) -> Option<Cmd> {
    match msg {
        PanelMsg::Pointer { event, button } => handle_pointer(model, event, button),

        PanelMsg::Hover(button) => {
            if model.panel.hovered_button == button {
                return None;
            }
            model.panel.hovered_button = button;
            Some(Cmd::Redraw)
        }

        PanelMsg::Hide | PanelMsg::Minimized => {
            dock::hide_to_side(model);
            Some(Cmd::SyncWindows)
        }

        PanelMsg::Moved(position) => {
            if model.panel.position == position {
                return None;
            }
            model.panel.position = position;
            dock::align_indicators(model);
            Some(Cmd::SyncWindows)
        }

        PanelMsg::Closed => {
            // A dock-hide keeps its indicator; any other close takes them down
            if !model.panel.state.is_hidden() {
                model.indicators.hide_all();
            }
            Some(Cmd::Exit)
        }
    }
}

fn handle_pointer(
    model: &mut AppModel,
    event: PointerMsg,
    button: Option<PanelButton>,
) -> Option<Cmd> {
    match event {
        PointerMsg::Pressed(at) => {
            if !model.panel.is_visible() {
                return None;
            }
            model.panel.drag = Some(DragSession::press(at));
            model.panel.pressed_button = button;
            Some(Cmd::Redraw)
        }

        PointerMsg::Moved(at) => {
            let threshold = model.config.drag_threshold;
            let session = model.panel.drag.as_mut()?;
            let delta = session.motion(at, threshold)?;

            model.panel.position = model.panel.position + delta;
            dock::align_indicators(model);
            Some(Cmd::SyncWindows)
        }

        PointerMsg::Released(_) => {
            let session = model.panel.drag.take()?;
            let pressed = model.panel.pressed_button.take();

            match session.release() {
                DragOutcome::Click => match pressed {
                    Some(b) if button == Some(b) => Some(activate_button(model, b)),
                    _ => Some(Cmd::Redraw),
                },
                DragOutcome::Dragged => {
                    dock::finish_panel_drag(model);
                    Some(Cmd::SyncWindows)
                }
            }
        }
    }
}

fn activate_button(model: &mut AppModel, button: PanelButton) -> Cmd {
    tracing::debug!(?button, "panel button clicked");
    match button {
        PanelButton::Hide => {
            dock::hide_to_side(model);
            Cmd::SyncWindows
        }
        PanelButton::FileBrowser => Cmd::batch(vec![Cmd::Redraw, Cmd::Launch(Tool::FileBrowser)]),
        PanelButton::TextEditor => Cmd::batch(vec![Cmd::Redraw, Cmd::Launch(Tool::TextEditor)]),
    }
}
