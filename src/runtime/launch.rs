//! Fire-and-forget launching of the panel's tools

use std::process::Command;

use anyhow::{bail, Context, Result};

use edgebar::commands::Tool;
use edgebar::config::SidebarConfig;

#[cfg(target_os = "windows")]
const DEFAULT_TEXT_EDITOR: &str = "notepad";
#[cfg(target_os = "macos")]
const DEFAULT_TEXT_EDITOR: &str = "open -a TextEdit";
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const DEFAULT_TEXT_EDITOR: &str = "gnome-text-editor";

/// Start `tool` without waiting for it; failures are logged
pub fn launch(tool: Tool, config: &SidebarConfig) {
    let result = match tool {
        Tool::FileBrowser => match config.file_browser_command.as_deref() {
            Some(command) => spawn(command),
            None => open_file_manager(),
        },
        Tool::TextEditor => spawn(
            config
                .text_editor_command
                .as_deref()
                .unwrap_or(DEFAULT_TEXT_EDITOR),
        ),
    };

    match result {
        Ok(()) => tracing::info!(?tool, "launched"),
        Err(e) => tracing::warn!(?tool, "Failed to launch: {:#}", e),
    }
}

/// Spawn a whitespace-separated command line as a detached child
fn spawn(command_line: &str) -> Result<()> {
    let mut parts = command_line.split_whitespace();
    let Some(program) = parts.next() else {
        bail!("Empty command");
    };

    Command::new(program)
        .args(parts)
        .spawn()
        .with_context(|| format!("Could not start `{}`", command_line))?;
    Ok(())
}

/// Open the platform file manager on the home directory
fn open_file_manager() -> Result<()> {
    let home = dirs::home_dir().context("No home directory")?;
    open::that_detached(&home)
        .with_context(|| format!("Could not open {}", home.display()))
}
