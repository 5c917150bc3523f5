//! Panel layout and hit-testing
//!
//! Pure functions over window-local pixel coordinates, so they can be tested
//! without a window.

use crate::geometry::{Point, Rect, Size};
use crate::model::PanelButton;

/// Inset of the rounded panel body from the window edge
pub const PANEL_BODY_INSET: i32 = 2;
/// Corner radius of the rounded panel body
pub const PANEL_CORNER_RADIUS: i32 = 15;
/// Corner radius of the indicator background
pub const INDICATOR_CORNER_RADIUS: i32 = 3;

const HIDE_BUTTON_SIZE: i32 = 25;
const HIDE_BUTTON_TOP: i32 = 10;
const TOOL_BUTTON_SIZE: i32 = 30;
const BUTTON_SPACING: i32 = 6;

/// Rounded body of the panel inside its window
pub fn panel_body_rect(size: Size) -> Rect {
    Rect::new(
        PANEL_BODY_INSET,
        PANEL_BODY_INSET,
        size.width - 2 * PANEL_BODY_INSET,
        size.height - 2 * PANEL_BODY_INSET,
    )
}

/// Window-local rect of a panel button
///
/// The hide button sits at the top, the two tool buttons are stacked
/// below it. All buttons are horizontally centered.
pub fn button_rect(size: Size, button: PanelButton) -> Rect {
    let hide = Rect::new(
        (size.width - HIDE_BUTTON_SIZE) / 2,
        HIDE_BUTTON_TOP,
        HIDE_BUTTON_SIZE,
        HIDE_BUTTON_SIZE,
    );
    let tool_x = (size.width - TOOL_BUTTON_SIZE) / 2;
    let first_tool_y = hide.bottom() + BUTTON_SPACING + 1;

    match button {
        PanelButton::Hide => hide,
        PanelButton::FileBrowser => {
            Rect::new(tool_x, first_tool_y, TOOL_BUTTON_SIZE, TOOL_BUTTON_SIZE)
        }
        PanelButton::TextEditor => Rect::new(
            tool_x,
            first_tool_y + TOOL_BUTTON_SIZE + BUTTON_SPACING,
            TOOL_BUTTON_SIZE,
            TOOL_BUTTON_SIZE,
        ),
    }
}

/// Which button, if any, is under a window-local point
pub fn panel_button_at(size: Size, local: Point) -> Option<PanelButton> {
    PanelButton::ALL
        .into_iter()
        .find(|&button| button_rect(size, button).contains(local))
}

/// Arrow triangle for an indicator of the given size
///
/// `points_left` selects the arrow direction. Returns the tip followed by
/// the two base corners.
pub fn arrow_triangle(size: Size, points_left: bool) -> [(i32, i32); 3] {
    let mid = size.height / 2;
    let (tip_x, base_x) = if points_left { (5, 15) } else { (15, 5) };
    [(tip_x, mid), (base_x, mid - 8), (base_x, mid + 8)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PANEL_SIZE;

    #[test]
    fn test_buttons_fit_inside_panel_body() {
        let body = panel_body_rect(PANEL_SIZE);
        for button in PanelButton::ALL {
            let rect = button_rect(PANEL_SIZE, button);
            assert_eq!(
                rect.intersection(&body),
                rect,
                "{:?} overflows the panel body",
                button
            );
        }
    }

    #[test]
    fn test_buttons_do_not_overlap() {
        let rects: Vec<Rect> = PanelButton::ALL
            .iter()
            .map(|&b| button_rect(PANEL_SIZE, b))
            .collect();
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                assert!(a.intersection(b).is_empty());
            }
        }
    }

    #[test]
    fn test_hit_test_finds_each_button_center() {
        for button in PanelButton::ALL {
            let rect = button_rect(PANEL_SIZE, button);
            let center = Point::new(rect.x + rect.width / 2, rect.y + rect.height / 2);
            assert_eq!(panel_button_at(PANEL_SIZE, center), Some(button));
        }
    }

    #[test]
    fn test_hit_test_misses_panel_margin() {
        assert_eq!(panel_button_at(PANEL_SIZE, Point::new(1, 1)), None);
        assert_eq!(panel_button_at(PANEL_SIZE, Point::new(25, 115)), None);
    }
}
