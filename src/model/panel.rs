//! Sidebar panel state

use crate::geometry::{Point, Rect, Side, Size};

use super::drag::DragSession;

/// Fixed panel size in pixels
pub const PANEL_SIZE: Size = Size::new(50, 120);

/// Where the panel currently is relative to the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockState {
    /// Fully shown
    Visible,
    /// Hidden on purpose (hide button, minimize, launch hidden)
    DockedHidden(Side),
    /// Hidden because a drag left most of the panel off-screen
    AutoHidden(Side),
}

impl DockState {
    pub fn is_hidden(&self) -> bool {
        !matches!(self, DockState::Visible)
    }

    /// Side the panel is hidden on, `None` when visible
    pub fn hidden_side(&self) -> Option<Side> {
        match self {
            DockState::Visible => None,
            DockState::DockedHidden(side) | DockState::AutoHidden(side) => Some(*side),
        }
    }

    pub fn is_auto_hidden(&self) -> bool {
        matches!(self, DockState::AutoHidden(_))
    }

    /// Same hiding mode on another side
    pub fn with_side(self, side: Side) -> DockState {
        match self {
            DockState::Visible => DockState::Visible,
            DockState::DockedHidden(_) => DockState::DockedHidden(side),
            DockState::AutoHidden(_) => DockState::AutoHidden(side),
        }
    }
}

/// Action buttons hosted on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelButton {
    Hide,
    FileBrowser,
    TextEditor,
}

impl PanelButton {
    pub const ALL: [PanelButton; 3] = [
        PanelButton::Hide,
        PanelButton::FileBrowser,
        PanelButton::TextEditor,
    ];
}

#[derive(Debug, Clone)]
pub struct Panel {
    /// Top-left corner in global coordinates
    pub position: Point,
    pub size: Size,
    pub state: DockState,
    /// Edge the panel was last snapped or hidden to
    pub last_docked_side: Side,
    /// Pointer session while the primary button is held on the panel
    pub drag: Option<DragSession>,
    /// Button under the pointer when the current press started
    pub pressed_button: Option<PanelButton>,
    pub hovered_button: Option<PanelButton>,
}

impl Panel {
    pub fn new(position: Point) -> Self {
        Self {
            position,
            size: PANEL_SIZE,
            state: DockState::Visible,
            last_docked_side: Side::Right,
            drag: None,
            pressed_button: None,
            hovered_button: None,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// Horizontal midpoint in global coordinates
    pub fn mid_x(&self) -> i32 {
        self.position.x + self.size.width / 2
    }

    pub fn is_visible(&self) -> bool {
        !self.state.is_hidden()
    }

    /// Whether a press is held and has not turned into a drag yet
    pub fn is_pressing(&self, button: PanelButton) -> bool {
        self.pressed_button == Some(button) && self.drag.is_some_and(|d| !d.dragging)
    }
}
