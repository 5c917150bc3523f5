use anyhow::Result;
use clap::Parser;
use winit::event_loop::EventLoop;

use edgebar::cli::CliArgs;
use edgebar::geometry::ScreenLayout;
use edgebar::{AppModel, SidebarConfig};

mod runtime;

use runtime::App;

fn main() -> Result<()> {
    edgebar::tracing::init();

    let startup = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;

    let config = SidebarConfig::load_from(&startup.settings_path);

    // Real screen geometry is only known once the event loop is running
    let mut model = AppModel::new(config, ScreenLayout::default());
    model.launch_hidden |= startup.force_hidden;

    let event_loop = EventLoop::new()?;
    let mut app = App::new(model, startup.settings_path);

    event_loop.run_app(&mut app)?;

    Ok(())
}
