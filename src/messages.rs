//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. Pointer positions are
//! always global screen coordinates; the runtime converts from window-local
//! coordinates before building a message.

use crate::geometry::{Point, ScreenLayout, Side};
use crate::model::PanelButton;

/// Primary-button pointer input delivered to one widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerMsg {
    Pressed(Point),
    Moved(Point),
    Released(Point),
}

/// Panel window messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelMsg {
    /// Pointer input on the panel; `button` is the action button under the
    /// pointer at the time of the event, if any
    Pointer {
        event: PointerMsg,
        button: Option<PanelButton>,
    },
    /// Pointer hovering over a button (or none)
    Hover(Option<PanelButton>),
    /// Hide the panel to the nearer edge
    Hide,
    /// The window system minimized the panel
    Minimized,
    /// The window system moved the panel
    Moved(Point),
    /// The panel window is being closed
    Closed,
}

/// Edge indicator messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorMsg {
    Pointer(PointerMsg),
}

/// Application-level messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    /// Windows exist; apply the launch-hidden preference
    Started,
    /// Monitors were added, removed or rearranged
    ScreensChanged(ScreenLayout),
    /// Leave the event loop
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Panel(PanelMsg),
    /// Message for the indicator in the given slot
    Indicator(Side, IndicatorMsg),
    App(AppMsg),
}
