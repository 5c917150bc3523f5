//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use edgebar::commands::Cmd;
use edgebar::config::SidebarConfig;
use edgebar::geometry::{Point, Rect, ScreenLayout, Side};
use edgebar::messages::{IndicatorMsg, Msg, PanelMsg, PointerMsg};
use edgebar::model::{AppModel, Indicator, PanelButton};
use edgebar::update::update;
use edgebar::view::geometry::button_rect;

/// Single 1920x1080 primary screen
pub const SCREEN: Rect = Rect::new(0, 0, 1920, 1080);

/// Model on a single 1920x1080 screen with default settings
///
/// The panel starts flush right, vertically centered: (1870, 480).
pub fn test_model() -> AppModel {
    AppModel::new(SidebarConfig::default(), ScreenLayout::single(SCREEN))
}

/// Model with the visible panel placed at (x, y)
pub fn model_with_panel_at(x: i32, y: i32) -> AppModel {
    let mut model = test_model();
    model.panel.position = Point::new(x, y);
    model
}

/// Global position of the center of a panel button
pub fn button_center(model: &AppModel, button: PanelButton) -> Point {
    let rect = button_rect(model.panel.size, button);
    model.panel.position + Point::new(rect.x + rect.width / 2, rect.y + rect.height / 2)
}

/// A point on the panel that is not on any button
pub fn panel_grip(model: &AppModel) -> Point {
    model.panel.position + Point::new(3, model.panel.size.height - 6)
}

pub fn panel_pointer(model: &mut AppModel, event: PointerMsg, button: Option<PanelButton>) -> Option<Cmd> {
    update(model, Msg::Panel(PanelMsg::Pointer { event, button }))
}

/// Press and release on a button without moving
pub fn click_panel_button(model: &mut AppModel, button: PanelButton) -> Option<Cmd> {
    let at = button_center(model, button);
    panel_pointer(model, PointerMsg::Pressed(at), Some(button));
    panel_pointer(model, PointerMsg::Released(at), Some(button))
}

/// Drag the panel by `delta` in one pointer move, grabbing it off-button
pub fn drag_panel_by(model: &mut AppModel, delta: Point) -> Option<Cmd> {
    let from = panel_grip(model);
    let to = from + delta;
    panel_pointer(model, PointerMsg::Pressed(from), None);
    panel_pointer(model, PointerMsg::Moved(to), None);
    panel_pointer(model, PointerMsg::Released(to), None)
}

/// Drag the panel so its top-left corner ends at `target`
pub fn drag_panel_to(model: &mut AppModel, target: Point) -> Option<Cmd> {
    let delta = target - model.panel.position;
    drag_panel_by(model, delta)
}

pub fn indicator_pointer(model: &mut AppModel, slot: Side, event: PointerMsg) -> Option<Cmd> {
    update(model, Msg::Indicator(slot, IndicatorMsg::Pointer(event)))
}

/// Click the center of the indicator in `slot`
pub fn click_indicator(model: &mut AppModel, slot: Side) -> Option<Cmd> {
    let rect = model.indicators.get(slot).rect();
    let at = Point::new(rect.x + rect.width / 2, rect.y + rect.height / 2);
    indicator_pointer(model, slot, PointerMsg::Pressed(at));
    indicator_pointer(model, slot, PointerMsg::Released(at))
}

/// Drag the indicator in `slot` so its top-left corner ends at `target`
pub fn drag_indicator_to(model: &mut AppModel, slot: Side, target: Point) -> Option<Cmd> {
    let origin = model.indicators.get(slot).position;
    let from = origin + Point::new(10, 30);
    let to = from + (target - origin);
    indicator_pointer(model, slot, PointerMsg::Pressed(from));
    indicator_pointer(model, slot, PointerMsg::Moved(to));
    indicator_pointer(model, slot, PointerMsg::Released(to))
}

pub fn visible_indicator(model: &AppModel) -> Option<&Indicator> {
    model.indicators.visible()
}
