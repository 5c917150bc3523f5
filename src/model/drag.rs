//! Press/move/release tracking that tells a click apart from a drag

use crate::geometry::Point;

/// Default start-drag distance in pixels
pub const DEFAULT_DRAG_THRESHOLD: i32 = 10;

/// How a press/release cycle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Pointer never moved past the threshold
    Click,
    /// Pointer moved past the threshold; the widget was dragged
    Dragged,
}

/// Transient state between a primary-button press and its release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    /// Last recorded global pointer position
    pub last: Point,
    /// Whether the movement crossed the threshold
    pub dragging: bool,
}

impl DragSession {
    /// Start a session at the press position
    pub fn press(at: Point) -> Self {
        Self {
            last: at,
            dragging: false,
        }
    }

    /// Feed a pointer move; returns the delta to translate the widget by.
    ///
    /// Until the threshold is crossed the recorded position stays at the press
    /// point, so small moves accumulate. Once dragging, the delta is
    /// incremental from the previous move.
    pub fn motion(&mut self, at: Point, threshold: i32) -> Option<Point> {
        let delta = at - self.last;

        if !self.dragging && delta.manhattan_length() > threshold {
            self.dragging = true;
        }

        if self.dragging {
            self.last = at;
            Some(delta)
        } else {
            None
        }
    }

    /// End the session
    pub fn release(self) -> DragOutcome {
        if self.dragging {
            DragOutcome::Dragged
        } else {
            DragOutcome::Click
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_moves_stay_a_click() {
        let mut session = DragSession::press(Point::new(100, 100));
        assert_eq!(session.motion(Point::new(103, 104), 10), None);
        assert_eq!(session.motion(Point::new(95, 96), 10), None);
        assert_eq!(session.release(), DragOutcome::Click);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut session = DragSession::press(Point::new(0, 0));
        assert_eq!(session.motion(Point::new(6, 4), 10), None);
        assert!(!session.dragging);

        assert_eq!(session.motion(Point::new(6, 5), 10), Some(Point::new(6, 5)));
        assert!(session.dragging);
    }

    #[test]
    fn test_deltas_are_incremental_after_threshold() {
        let mut session = DragSession::press(Point::new(0, 0));
        assert_eq!(session.motion(Point::new(20, 0), 10), Some(Point::new(20, 0)));
        assert_eq!(session.motion(Point::new(25, 3), 10), Some(Point::new(5, 3)));
        assert_eq!(session.motion(Point::new(25, 3), 10), Some(Point::new(0, 0)));
        assert_eq!(session.release(), DragOutcome::Dragged);
    }

    #[test]
    fn test_returning_to_start_after_drag_is_still_a_drag() {
        let mut session = DragSession::press(Point::new(50, 50));
        session.motion(Point::new(80, 50), 10);
        session.motion(Point::new(50, 50), 10);
        assert_eq!(session.release(), DragOutcome::Dragged);
    }
}
