//! Edge indicator state
//!
//! An indicator is the small arrow tab that marks where the hidden panel went.
//! There are exactly two, one per screen edge, created once and only ever
//! shown or hidden.

use crate::geometry::{Point, Rect, Side, Size};

use super::drag::DragSession;

/// Fixed indicator size in pixels
pub const INDICATOR_SIZE: Size = Size::new(20, 60);

#[derive(Debug, Clone)]
pub struct Indicator {
    /// Slot this indicator belongs to; its direction resets to this when hidden
    pub home: Side,
    /// Side the arrow currently sits on; flips when dragged to the other edge
    pub direction: Side,
    /// Top-left corner in global coordinates
    pub position: Point,
    pub size: Size,
    pub visible: bool,
    /// Pointer session while the primary button is held on this indicator
    pub drag: Option<DragSession>,
}

impl Indicator {
    pub fn new(home: Side) -> Self {
        Self {
            home,
            direction: home,
            position: Point::default(),
            size: INDICATOR_SIZE,
            visible: false,
            drag: None,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    /// Vertical center in global coordinates
    pub fn center_y(&self) -> i32 {
        self.position.y + self.size.height / 2
    }

    /// Hide and forget any direction change made while it was shown
    pub fn hide(&mut self) {
        self.visible = false;
        self.direction = self.home;
        self.drag = None;
    }
}

/// The pair of indicators owned by the panel
#[derive(Debug, Clone)]
pub struct Indicators {
    pub left: Indicator,
    pub right: Indicator,
}

impl Default for Indicators {
    fn default() -> Self {
        Self {
            left: Indicator::new(Side::Left),
            right: Indicator::new(Side::Right),
        }
    }
}

impl Indicators {
    pub fn get(&self, slot: Side) -> &Indicator {
        match slot {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn get_mut(&mut self, slot: Side) -> &mut Indicator {
        match slot {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Indicator> {
        [&self.left, &self.right].into_iter()
    }

    /// The indicator currently on screen, if any
    pub fn visible(&self) -> Option<&Indicator> {
        self.iter().find(|i| i.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.iter().filter(|i| i.visible).count()
    }

    pub fn hide_all(&mut self) {
        self.left.hide();
        self.right.hide();
    }
}
