//! Button rendering primitives
//!
//! Pure functions: callers determine the visual state from the model and
//! pass it in. Labels are drawn as small vector glyphs.

use crate::geometry::Rect;
use crate::model::PanelButton;
use crate::theme::Theme;

use super::frame::Frame;

/// Visual state of a button, determined by the caller from UI interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Normal,
    Hovered,
    Pressed,
}

/// Render a panel button with its glyph centered in `rect`
pub fn render_button(
    frame: &mut Frame,
    theme: &Theme,
    rect: Rect,
    button: PanelButton,
    state: ButtonState,
) {
    let btn = &theme.button;

    let bg = match state {
        ButtonState::Normal => btn.background.to_argb_u32(),
        ButtonState::Hovered => btn.background_hover.to_argb_u32(),
        ButtonState::Pressed => btn.background_pressed.to_argb_u32(),
    };
    let fg = btn.glyph.to_argb_u32();

    match button {
        PanelButton::Hide => {
            frame.fill_rounded_rect(rect, 6, bg);
            frame.stroke_rounded_rect(rect, 6, btn.border.to_argb_u32());
        }
        PanelButton::FileBrowser | PanelButton::TextEditor => {
            frame.fill_rounded_rect(rect, 8, bg);
        }
    }

    let cx = rect.x + rect.width / 2;
    let cy = rect.y + rect.height / 2;

    match button {
        // ─
        PanelButton::Hide => {
            frame.fill_rect(Rect::new(cx - 6, cy - 1, 12, 2), fg);
        }
        // Folder: tab on top of a body
        PanelButton::FileBrowser => {
            frame.fill_rect(Rect::new(cx - 9, cy - 7, 7, 3), fg);
            frame.fill_rect(Rect::new(cx - 9, cy - 4, 18, 11), fg);
        }
        // Sheet of paper with text lines
        PanelButton::TextEditor => {
            let page = Rect::new(cx - 7, cy - 9, 14, 18);
            frame.fill_rect(page, fg);
            let line = bg;
            for i in 0..4 {
                frame.fill_rect(Rect::new(page.x + 3, page.y + 3 + i * 4, 8, 1), line);
            }
        }
    }
}
