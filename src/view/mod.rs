//! Software rendering of the panel and indicator windows
//!
//! Each window owns one `Renderer`. Drawing goes to a persistent back buffer
//! through `Frame`, which is copied to the softbuffer surface on present.

pub mod button;
pub mod frame;
pub mod geometry;

use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use softbuffer::Surface;
use winit::window::Window;

use crate::geometry::{Rect, Side};
use crate::model::{AppModel, Indicator, Panel};
use crate::theme::Theme;

use button::{render_button, ButtonState};
use frame::Frame;

pub struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(window: Rc<Window>, context: &softbuffer::Context<Rc<Window>>) -> Result<Self> {
        let size = window.inner_size();

        let mut renderer = Self {
            surface: Surface::new(context, Rc::clone(&window))
                .map_err(|e| anyhow!("Failed to create surface: {}", e))?,
            back_buffer: Vec::new(),
            width: 0,
            height: 0,
        };
        renderer.resize(size.width, size.height)?;
        Ok(renderer)
    }

    /// Resize the surface and back buffer; zero sizes are clamped to 1
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let (Some(w), Some(h)) = (NonZeroU32::new(width.max(1)), NonZeroU32::new(height.max(1)))
        else {
            return Ok(());
        };
        if (w.get(), h.get()) == (self.width, self.height) {
            return Ok(());
        }

        self.width = w.get();
        self.height = h.get();
        self.back_buffer
            .resize((self.width as usize) * (self.height as usize), 0);

        self.surface
            .resize(w, h)
            .map_err(|e| anyhow!("Failed to resize surface: {}", e))
    }

    /// Draw into the back buffer with `draw`, then present it
    fn present_with(&mut self, draw: impl FnOnce(&mut Frame)) -> Result<()> {
        {
            let mut frame = Frame::new(
                &mut self.back_buffer,
                self.width as usize,
                self.height as usize,
            );
            draw(&mut frame);
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow!("Failed to get surface buffer: {}", e))?;
        let len = buffer.len().min(self.back_buffer.len());
        buffer[..len].copy_from_slice(&self.back_buffer[..len]);
        buffer
            .present()
            .map_err(|e| anyhow!("Failed to present buffer: {}", e))
    }

    pub fn render_panel(&mut self, model: &AppModel, theme: &Theme) -> Result<()> {
        self.present_with(|frame| draw_panel(frame, &model.panel, theme))
    }

    pub fn render_indicator(&mut self, model: &AppModel, slot: Side, theme: &Theme) -> Result<()> {
        let indicator = model.indicators.get(slot);
        self.present_with(|frame| draw_indicator(frame, indicator, theme))
    }
}

/// Paint the panel body and its buttons
pub fn draw_panel(frame: &mut Frame, panel: &Panel, theme: &Theme) {
    frame.clear(theme.clear.to_argb_u32());

    let body = geometry::panel_body_rect(panel.size);
    frame.fill_rounded_rect(
        body,
        geometry::PANEL_CORNER_RADIUS,
        theme.panel_background.to_argb_u32(),
    );
    frame.stroke_rounded_rect(
        body,
        geometry::PANEL_CORNER_RADIUS,
        theme.panel_border.to_argb_u32(),
    );

    for button in crate::model::PanelButton::ALL {
        let state = if panel.is_pressing(button) {
            ButtonState::Pressed
        } else if panel.hovered_button == Some(button) && panel.drag.is_none() {
            ButtonState::Hovered
        } else {
            ButtonState::Normal
        };
        render_button(
            frame,
            theme,
            geometry::button_rect(panel.size, button),
            button,
            state,
        );
    }
}

/// Paint an indicator tab with an arrow pointing back into the screen
pub fn draw_indicator(frame: &mut Frame, indicator: &Indicator, theme: &Theme) {
    frame.clear(theme.clear.to_argb_u32());

    let size = indicator.size;
    frame.fill_rounded_rect(
        Rect::new(0, 0, size.width, size.height),
        geometry::INDICATOR_CORNER_RADIUS,
        theme.indicator_background.to_argb_u32(),
    );

    // A tab on the right edge points left, towards where the panel comes from
    let points_left = indicator.direction == Side::Right;
    let [a, b, c] = geometry::arrow_triangle(size, points_left);
    frame.fill_triangle(a, b, c, theme.indicator_arrow.to_argb_u32());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::model::{PanelButton, INDICATOR_SIZE, PANEL_SIZE};

    fn render_indicator_pixels(direction: Side) -> Vec<u32> {
        let theme = Theme::default();
        let mut indicator = Indicator::new(direction);
        indicator.visible = true;
        let mut buf = vec![0u32; (INDICATOR_SIZE.width * INDICATOR_SIZE.height) as usize];
        let mut frame = Frame::new(
            &mut buf,
            INDICATOR_SIZE.width as usize,
            INDICATOR_SIZE.height as usize,
        );
        draw_indicator(&mut frame, &indicator, &theme);
        buf
    }

    #[test]
    fn test_right_indicator_arrow_points_left() {
        let white = Theme::default().indicator_arrow.to_argb_u32();
        let buf = render_indicator_pixels(Side::Right);
        let at = |x: usize, y: usize| buf[y * INDICATOR_SIZE.width as usize + x];

        // Tip at x=5 on the center row, base spans x=15
        assert_eq!(at(6, 30), white);
        assert_eq!(at(14, 24), white);
        assert_ne!(at(6, 24), white);
    }

    #[test]
    fn test_left_indicator_arrow_points_right() {
        let white = Theme::default().indicator_arrow.to_argb_u32();
        let buf = render_indicator_pixels(Side::Left);
        let at = |x: usize, y: usize| buf[y * INDICATOR_SIZE.width as usize + x];

        assert_eq!(at(14, 30), white);
        assert_eq!(at(6, 24), white);
        assert_ne!(at(14, 24), white);
    }

    #[test]
    fn test_pressed_button_renders_pressed() {
        let theme = Theme::default();
        let mut panel = Panel::new(Point::new(0, 0));
        panel.drag = Some(crate::model::DragSession::press(Point::new(25, 60)));
        panel.pressed_button = Some(PanelButton::TextEditor);

        let mut buf = vec![0u32; (PANEL_SIZE.width * PANEL_SIZE.height) as usize];
        let mut frame = Frame::new(
            &mut buf,
            PANEL_SIZE.width as usize,
            PANEL_SIZE.height as usize,
        );
        draw_panel(&mut frame, &panel, &theme);

        let rect = geometry::button_rect(PANEL_SIZE, PanelButton::TextEditor);
        // Just inside the bottom edge, below the page glyph
        let x = (rect.x + rect.width / 2) as usize;
        let y = (rect.bottom() - 2) as usize;
        assert_eq!(
            frame.get_pixel(x, y),
            theme.button.background_pressed.to_argb_u32()
        );
    }

    #[test]
    fn test_panel_corners_stay_clear() {
        let theme = Theme::default();
        let panel = Panel::new(Point::new(0, 0));
        let mut buf = vec![0xDEAD_BEEF; (PANEL_SIZE.width * PANEL_SIZE.height) as usize];
        let mut frame = Frame::new(
            &mut buf,
            PANEL_SIZE.width as usize,
            PANEL_SIZE.height as usize,
        );
        draw_panel(&mut frame, &panel, &theme);
        assert_eq!(frame.get_pixel(0, 0), theme.clear.to_argb_u32());
        assert_eq!(frame.get_pixel(3, 3), theme.clear.to_argb_u32());
    }
}
