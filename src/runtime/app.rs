use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId, WindowLevel};

use edgebar::commands::Cmd;
use edgebar::geometry::{Point, ScreenGeometry, Side};
use edgebar::messages::{AppMsg, IndicatorMsg, Msg, PanelMsg, PointerMsg};
use edgebar::model::AppModel;
use edgebar::theme::Theme;
use edgebar::update::update;
use edgebar::view::geometry::panel_button_at;
use edgebar::view::Renderer;

use super::launch;
use super::screens::MonitorGeometry;

/// How often monitors are re-read (winit has no monitor-change event)
const SCREEN_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Window-manager move reports arriving this soon after we positioned the
/// panel ourselves are echoes of that, not user moves
const MOVE_ECHO_WINDOW: Duration = Duration::from_millis(250);

/// Which of our windows an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Panel,
    Indicator(Side),
}

struct Surface {
    window: Rc<Window>,
    renderer: Renderer,
    /// Last cursor position, window-local
    cursor: Option<PhysicalPosition<f64>>,
}

struct Windows {
    panel: Surface,
    left: Surface,
    right: Surface,
    _context: Context<Rc<Window>>,
}

impl Windows {
    fn get(&self, target: Target) -> &Surface {
        match target {
            Target::Panel => &self.panel,
            Target::Indicator(Side::Left) => &self.left,
            Target::Indicator(Side::Right) => &self.right,
        }
    }

    fn get_mut(&mut self, target: Target) -> &mut Surface {
        match target {
            Target::Panel => &mut self.panel,
            Target::Indicator(Side::Left) => &mut self.left,
            Target::Indicator(Side::Right) => &mut self.right,
        }
    }

    fn target_of(&self, id: WindowId) -> Option<Target> {
        [
            Target::Panel,
            Target::Indicator(Side::Left),
            Target::Indicator(Side::Right),
        ]
        .into_iter()
        .find(|&t| self.get(t).window.id() == id)
    }
}

pub struct App {
    model: AppModel,
    theme: Theme,
    settings_path: PathBuf,
    windows: Option<Windows>,
    last_sync: Instant,
    last_screen_poll: Instant,
}

impl App {
    pub fn new(model: AppModel, settings_path: PathBuf) -> Self {
        Self {
            model,
            theme: Theme::default(),
            settings_path,
            windows: None,
            last_sync: Instant::now(),
            last_screen_poll: Instant::now(),
        }
    }

    fn create_windows(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let panel = Rc::new(
            event_loop
                .create_window(window_attributes(
                    "SideBar",
                    self.model.panel.position,
                    self.model.panel.size.width,
                    self.model.panel.size.height,
                    self.model.panel.is_visible(),
                ))
                .context("Failed to create panel window")?,
        );
        let context = Context::new(Rc::clone(&panel))
            .map_err(|e| anyhow::anyhow!("Failed to create graphics context: {}", e))?;

        let mut indicator_windows = Vec::with_capacity(2);
        for slot in Side::ALL {
            let indicator = self.model.indicators.get(slot);
            let window = event_loop
                .create_window(window_attributes(
                    "SideBar indicator",
                    indicator.position,
                    indicator.size.width,
                    indicator.size.height,
                    indicator.visible,
                ))
                .with_context(|| format!("Failed to create {:?} indicator window", slot))?;
            indicator_windows.push(Rc::new(window));
        }
        let right = indicator_windows.pop().context("missing right indicator")?;
        let left = indicator_windows.pop().context("missing left indicator")?;

        let surface = |window: Rc<Window>| -> Result<Surface> {
            Ok(Surface {
                renderer: Renderer::new(Rc::clone(&window), &context)?,
                window,
                cursor: None,
            })
        };

        self.windows = Some(Windows {
            panel: surface(panel)?,
            left: surface(left)?,
            right: surface(right)?,
            _context: context,
        });
        Ok(())
    }

    fn dispatch(&mut self, event_loop: &ActiveEventLoop, msg: Msg) {
        let Some(cmd) = update(&mut self.model, msg) else {
            return;
        };

        if cmd.needs_sync() {
            self.sync_windows();
        }
        if cmd.needs_redraw() {
            self.request_redraw();
        }
        self.process_cmd(event_loop, cmd);
    }

    /// Global pointer position for a window-local cursor position
    ///
    /// Falls back to the model's idea of the window position where the
    /// platform can't report it.
    fn to_global(&self, target: Target, local: PhysicalPosition<f64>) -> Point {
        let origin = self
            .windows
            .as_ref()
            .and_then(|w| w.get(target).window.outer_position().ok())
            .map(|p| Point::new(p.x, p.y))
            .unwrap_or_else(|| match target {
                Target::Panel => self.model.panel.position,
                Target::Indicator(slot) => self.model.indicators.get(slot).position,
            });
        origin + Point::new(local.x.round() as i32, local.y.round() as i32)
    }

    fn pointer_msg(&self, target: Target, event: PointerMsg) -> Msg {
        match target {
            Target::Panel => {
                let button = self
                    .windows
                    .as_ref()
                    .and_then(|w| w.panel.cursor)
                    .and_then(|c| {
                        panel_button_at(
                            self.model.panel.size,
                            Point::new(c.x as i32, c.y as i32),
                        )
                    });
                Msg::Panel(PanelMsg::Pointer { event, button })
            }
            Target::Indicator(slot) => Msg::Indicator(slot, IndicatorMsg::Pointer(event)),
        }
    }

    /// Translate a window event into messages and run them
    fn handle_event(&mut self, event_loop: &ActiveEventLoop, target: Target, event: &WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                if target == Target::Panel {
                    self.dispatch(event_loop, Msg::Panel(PanelMsg::Closed));
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
                {
                    self.dispatch(event_loop, Msg::App(AppMsg::Quit));
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(windows) = &mut self.windows {
                    windows.get_mut(target).cursor = Some(*position);
                }
                let global = self.to_global(target, *position);

                if target == Target::Panel {
                    let hovered = panel_button_at(
                        self.model.panel.size,
                        Point::new(position.x as i32, position.y as i32),
                    );
                    self.dispatch(event_loop, Msg::Panel(PanelMsg::Hover(hovered)));
                }
                let msg = self.pointer_msg(target, PointerMsg::Moved(global));
                self.dispatch(event_loop, msg);
            }

            WindowEvent::CursorLeft { .. } => {
                if let Some(windows) = &mut self.windows {
                    windows.get_mut(target).cursor = None;
                }
                if target == Target::Panel {
                    self.dispatch(event_loop, Msg::Panel(PanelMsg::Hover(None)));
                }
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let Some(local) = self.windows.as_ref().and_then(|w| w.get(target).cursor) else {
                    return;
                };
                let global = self.to_global(target, local);
                let event = match state {
                    ElementState::Pressed => PointerMsg::Pressed(global),
                    ElementState::Released => PointerMsg::Released(global),
                };
                let msg = self.pointer_msg(target, event);
                self.dispatch(event_loop, msg);
            }

            WindowEvent::Resized(_) | WindowEvent::Occluded(_) => {
                if target == Target::Panel && self.panel_was_minimized() {
                    self.dispatch(event_loop, Msg::Panel(PanelMsg::Minimized));
                }
                if let (WindowEvent::Resized(size), Some(windows)) = (event, &mut self.windows) {
                    let surface = windows.get_mut(target);
                    if let Err(e) = surface.renderer.resize(size.width, size.height) {
                        tracing::warn!("{:#}", e);
                    }
                    surface.window.request_redraw();
                }
            }

            WindowEvent::Moved(position) => {
                let echo = self.last_sync.elapsed() < MOVE_ECHO_WINDOW;
                if target == Target::Panel && self.model.panel.drag.is_none() && !echo {
                    let at = Point::new(position.x, position.y);
                    self.dispatch(event_loop, Msg::Panel(PanelMsg::Moved(at)));
                }
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render(target) {
                    tracing::error!("Render failed: {:#}", e);
                }
            }

            _ => {}
        }
    }

    /// Undo an OS minimize of the panel; returns whether one happened
    fn panel_was_minimized(&self) -> bool {
        let Some(windows) = &self.windows else {
            return false;
        };
        if windows.panel.window.is_minimized() != Some(true) {
            return false;
        }
        windows.panel.window.set_minimized(false);
        true
    }

    fn render(&mut self, target: Target) -> Result<()> {
        let Some(windows) = &mut self.windows else {
            return Ok(());
        };
        let renderer = &mut windows.get_mut(target).renderer;
        match target {
            Target::Panel => renderer.render_panel(&self.model, &self.theme),
            Target::Indicator(slot) => renderer.render_indicator(&self.model, slot, &self.theme),
        }
    }

    /// Push model positions and visibility to the windows
    fn sync_windows(&mut self) {
        let Some(windows) = &self.windows else {
            return;
        };

        let panel = &self.model.panel;
        place(&windows.panel.window, panel.position, panel.is_visible());
        for slot in Side::ALL {
            let indicator = self.model.indicators.get(slot);
            place(
                &windows.get(Target::Indicator(slot)).window,
                indicator.position,
                indicator.visible,
            );
        }

        self.last_sync = Instant::now();
    }

    fn request_redraw(&self) {
        if let Some(windows) = &self.windows {
            for surface in [&windows.panel, &windows.left, &windows.right] {
                surface.window.request_redraw();
            }
        }
    }

    /// Run the side effects of `cmd`; window sync and redraw are done by
    /// `dispatch` once per command
    fn process_cmd(&self, event_loop: &ActiveEventLoop, cmd: Cmd) {
        match cmd {
            Cmd::None | Cmd::Redraw | Cmd::SyncWindows => {}
            Cmd::Launch(tool) => launch::launch(tool, &self.model.config),
            Cmd::Exit => event_loop.exit(),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(event_loop, cmd);
                }
            }
        }
    }

    fn poll_screens(&mut self, event_loop: &ActiveEventLoop) {
        self.last_screen_poll = Instant::now();
        let layout = MonitorGeometry::new(event_loop).layout();
        self.dispatch(event_loop, Msg::App(AppMsg::ScreensChanged(layout)));
    }
}

fn window_attributes(
    title: &str,
    position: Point,
    width: i32,
    height: i32,
    visible: bool,
) -> winit::window::WindowAttributes {
    let attributes = Window::default_attributes()
        .with_title(title)
        .with_decorations(false)
        .with_resizable(false)
        .with_transparent(true)
        .with_window_level(WindowLevel::AlwaysOnTop)
        .with_inner_size(PhysicalSize::new(width.max(1) as u32, height.max(1) as u32))
        .with_position(PhysicalPosition::new(position.x, position.y))
        .with_visible(visible);

    #[cfg(target_os = "windows")]
    let attributes = {
        use winit::platform::windows::WindowAttributesExtWindows;
        attributes.with_skip_taskbar(true)
    };

    attributes
}

fn place(window: &Window, position: Point, visible: bool) {
    window.set_outer_position(PhysicalPosition::new(position.x, position.y));
    window.set_visible(visible);
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.windows.is_some() {
            return;
        }

        // Geometry first, so the windows open where they belong
        let layout = MonitorGeometry::new(event_loop).layout();
        let launch_hidden = self.model.launch_hidden;
        self.model = AppModel::new(self.model.config.clone(), layout);
        self.model.launch_hidden = launch_hidden;
        self.last_screen_poll = Instant::now();

        if let Err(e) = self.create_windows(event_loop) {
            tracing::error!("{:#}", e);
            event_loop.exit();
            return;
        }

        self.dispatch(event_loop, Msg::App(AppMsg::Started));
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(target) = self.windows.as_ref().and_then(|w| w.target_of(window_id)) else {
            return;
        };
        self.handle_event(event_loop, target, &event);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.last_screen_poll.elapsed() >= SCREEN_POLL_INTERVAL {
            self.poll_screens(event_loop);
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(
            self.last_screen_poll + SCREEN_POLL_INTERVAL,
        ));
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Err(e) = self.model.config.save_to(&self.settings_path) {
            tracing::warn!("Could not save settings: {:#}", e);
        }
    }
}
