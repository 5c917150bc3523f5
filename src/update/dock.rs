//! Dock/hide state machine
//!
//! Transitions between `Visible`, `DockedHidden(side)` and `AutoHidden(side)`,
//! edge snapping of the panel and of the indicators, and indicator alignment.
//! Every function here is total: any reachable model produces a valid next
//! state.

use crate::geometry::{Point, Side};
use crate::model::{AppModel, DockState};

/// Side whose half of the primary screen holds the panel's midpoint
///
/// Exact ties go to the right.
pub fn side_for_panel(model: &AppModel) -> Side {
    let screen = model.screens.primary;
    if model.panel.mid_x() < screen.x + screen.width / 2 {
        Side::Left
    } else {
        Side::Right
    }
}

/// Whether at most half of the panel's width overlaps the combined screen area
pub fn is_mostly_off_screen(model: &AppModel) -> bool {
    let on_screen = model.screens.combined.intersection(&model.panel.rect());
    on_screen.width <= model.panel.size.width / 2
}

/// Hide the panel to the side its midpoint is on (manual dock-hide)
///
/// Valid from any state; also used for minimize and launch-hidden.
pub fn hide_to_side(model: &mut AppModel) {
    let side = side_for_panel(model);
    hide_as(model, DockState::DockedHidden(side));
}

/// Hide the panel after a drag left most of it off-screen
pub fn auto_hide_to_side(model: &mut AppModel) {
    let side = side_for_panel(model);
    hide_as(model, DockState::AutoHidden(side));
}

fn hide_as(model: &mut AppModel, state: DockState) {
    let Some(side) = state.hidden_side() else {
        return;
    };

    model.panel.state = state;
    model.panel.last_docked_side = side;
    model.panel.drag = None;
    model.panel.pressed_button = None;
    model.panel.hovered_button = None;

    model.indicators.get_mut(side.opposite()).hide();
    let indicator = model.indicators.get_mut(side);
    indicator.visible = true;
    indicator.direction = side;

    align_indicators(model);
}

/// Snap a visible panel flush to an edge it was released near
///
/// Returns the side it snapped to, if any.
pub fn snap_to_edge(model: &mut AppModel) -> Option<Side> {
    let screen = model.screens.primary;
    let snap = model.config.edge_snap_distance;
    let panel = &mut model.panel;

    if panel.position.x + panel.size.width > screen.right() - snap {
        panel.position.x = screen.right() - panel.size.width;
        panel.last_docked_side = Side::Right;
        Some(Side::Right)
    } else if panel.position.x < screen.x + snap {
        panel.position.x = screen.x;
        panel.last_docked_side = Side::Left;
        Some(Side::Left)
    } else {
        None
    }
}

/// Finalize a panel drag: auto-hide if mostly off-screen, else edge-snap
pub fn finish_panel_drag(model: &mut AppModel) {
    if model.panel.state != DockState::Visible {
        return;
    }

    if is_mostly_off_screen(model) {
        auto_hide_to_side(model);
    } else if let Some(side) = snap_to_edge(model) {
        tracing::debug!(?side, x = model.panel.position.x, "panel snapped to edge");
    }
}

/// Bring the panel back from behind the indicator in `slot`
///
/// The indicator's direction decides the side. Restoring from the right puts
/// the panel's top at the clicked indicator's vertical center, which may have
/// been dragged while hidden. Restoring from the left keeps the panel's
/// previous vertical position.
pub fn restore_from(model: &mut AppModel, slot: Side) {
    let indicator = model.indicators.get(slot);
    let side = indicator.direction;

    if side == Side::Right {
        let screen = model.screens.primary;
        let center_y = indicator.center_y();
        model.panel.position = Point::new(screen.right() - model.panel.size.width, center_y);
    }

    model.indicators.hide_all();
    model.panel.state = DockState::Visible;
    snap_to_edge(model);
}

/// Snap an indicator flush to whichever screen edge is nearer
///
/// Exact ties go to the right. The vertical position is clamped so the
/// indicator stays on screen. When the shown indicator changes edge, the
/// hidden panel follows it to the new side and lines up with it vertically.
pub fn snap_indicator(model: &mut AppModel, slot: Side) {
    let screen = model.screens.primary;
    let indicator = model.indicators.get_mut(slot);
    let size = indicator.size;
    let pos = indicator.position;

    let to_left = pos.x - screen.x;
    let to_right = screen.right() - (pos.x + size.width);

    let side = if to_left < to_right {
        Side::Left
    } else {
        Side::Right
    };
    let x = match side {
        Side::Left => screen.x,
        Side::Right => screen.right() - size.width,
    };
    let y = pos.y.min(screen.bottom() - size.height).max(screen.y);

    let changed_edge = indicator.direction != side;
    indicator.position = Point::new(x, y);
    indicator.direction = side;

    if changed_edge && indicator.visible && model.panel.state.is_hidden() {
        let panel = &mut model.panel;
        panel.state = panel.state.with_side(side);
        panel.last_docked_side = side;
        // Keep the panel where align_indicators would put this indicator
        panel.position = Point::new(
            match side {
                Side::Left => screen.x,
                Side::Right => screen.right() - panel.size.width,
            },
            y - (panel.size.height - size.height) / 2,
        );
    }
}

/// Keep visible indicators flush to their edge and centered on the panel
pub fn align_indicators(model: &mut AppModel) {
    let screen = model.screens.primary;
    let panel = model.panel.rect();

    for slot in Side::ALL {
        let indicator = model.indicators.get_mut(slot);
        if !indicator.visible {
            continue;
        }
        let x = match indicator.direction {
            Side::Left => screen.x,
            Side::Right => screen.right() - indicator.size.width,
        };
        let y = panel.y + (panel.height - indicator.size.height) / 2;
        indicator.position = Point::new(x, y);
    }
}
