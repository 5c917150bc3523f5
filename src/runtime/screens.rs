//! Screen geometry from the winit monitor list

use winit::event_loop::ActiveEventLoop;
use winit::monitor::MonitorHandle;

use edgebar::geometry::{Rect, ScreenGeometry, ScreenLayout};

/// Reads the primary monitor and the union of all monitors
///
/// winit exposes full monitor bounds only, so the usable rectangle includes
/// any taskbar or dock.
pub struct MonitorGeometry<'a> {
    event_loop: &'a ActiveEventLoop,
}

impl<'a> MonitorGeometry<'a> {
    pub fn new(event_loop: &'a ActiveEventLoop) -> Self {
        Self { event_loop }
    }
}

fn monitor_rect(monitor: &MonitorHandle) -> Rect {
    let position = monitor.position();
    let size = monitor.size();
    Rect::new(
        position.x,
        position.y,
        size.width as i32,
        size.height as i32,
    )
}

impl ScreenGeometry for MonitorGeometry<'_> {
    fn layout(&self) -> ScreenLayout {
        let screens: Vec<Rect> = self
            .event_loop
            .available_monitors()
            .map(|m| monitor_rect(&m))
            .filter(|r| !r.is_empty())
            .collect();

        // Some platforms (Wayland) have no notion of a primary monitor
        let primary = self
            .event_loop
            .primary_monitor()
            .map(|m| monitor_rect(&m))
            .filter(|r| !r.is_empty())
            .or_else(|| screens.first().copied());

        match primary {
            Some(primary) => ScreenLayout::from_screens(primary, screens),
            None => {
                tracing::warn!("No monitors reported, assuming a 1920x1080 screen");
                ScreenLayout::default()
            }
        }
    }
}
