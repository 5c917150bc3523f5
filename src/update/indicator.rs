//! Indicator update handlers

use crate::commands::Cmd;
use crate::geometry::Side;
use crate::messages::{IndicatorMsg, PointerMsg};
use crate::model::{AppModel, DragOutcome, DragSession};

use super::dock;

/// Update function for messages addressed to the indicator in `slot`
pub fn update_indicator(model: &mut AppModel, slot: Side, msg: IndicatorMsg) -> Option<Cmd> {
    let IndicatorMsg::Pointer(event) = msg;
    let threshold = model.config.drag_threshold;

    match event {
        PointerMsg::Pressed(at) => {
            let indicator = model.indicators.get_mut(slot);
            if !indicator.visible {
                return None;
            }
            indicator.drag = Some(DragSession::press(at));
            None
        }

        PointerMsg::Moved(at) => {
            let indicator = model.indicators.get_mut(slot);
            let session = indicator.drag.as_mut()?;
            let delta = session.motion(at, threshold)?;

            indicator.position = indicator.position + delta;
            Some(Cmd::SyncWindows)
        }

        PointerMsg::Released(_) => {
            let indicator = model.indicators.get_mut(slot);
            let session = indicator.drag.take()?;

            match session.release() {
                DragOutcome::Click => {
                    let side = indicator.direction;
                    tracing::debug!(?slot, ?side, "indicator clicked, restoring panel");
                    dock::restore_from(model, slot);
                }
                DragOutcome::Dragged => {
                    dock::snap_indicator(model, slot);
                }
            }
            Some(Cmd::SyncWindows)
        }
    }
}
