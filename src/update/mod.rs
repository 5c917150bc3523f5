//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. One message is
//! handled at a time, to completion, before the next one is looked at.

mod app;
pub mod dock;
mod indicator;
mod panel;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::DockSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use indicator::update_indicator;
pub use panel::update_panel;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Panel(m) => panel::update_panel(model, m),
        Msg::Indicator(slot, m) => indicator::update_indicator(model, slot, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after dock state, logs the diff and checks the
/// panel/indicator invariants. Pointer moves are too noisy to log.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::{IndicatorMsg, PanelMsg, PointerMsg};

    let is_noisy = matches!(
        &msg,
        Msg::Panel(PanelMsg::Pointer {
            event: PointerMsg::Moved(_),
            ..
        }) | Msg::Panel(PanelMsg::Hover(_))
            | Msg::Indicator(_, IndicatorMsg::Pointer(PointerMsg::Moved(_)))
    );

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = DockSnapshot::from_model(model);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    if let Some(diff) = before.diff(&DockSnapshot::from_model(model)) {
        debug!(target: "dock", %diff, "state changed");
    }

    model.assert_invariants_with_context(&msg_name);

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Panel::Hide`
/// - `Indicator(Right)::Pointer(Released(Point { x: 1900, y: 500 }))`
/// - `App::Started`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Panel(m) => format!("Panel::{:?}", m),
        Msg::Indicator(slot, m) => format!("Indicator({:?})::{:?}", slot, m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
