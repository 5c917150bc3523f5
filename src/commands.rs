//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

/// External tools the panel buttons launch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    FileBrowser,
    TextEditor,
}

/// Commands returned by update functions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// No side effect
    None,
    /// Repaint all visible surfaces
    Redraw,
    /// Push model positions and visibility to the windows, then repaint
    SyncWindows,
    /// Start an external tool without waiting for it
    Launch(Tool),
    /// Leave the event loop (settings are saved on the way out)
    Exit,
    /// Several commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw | Cmd::SyncWindows => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            _ => false,
        }
    }

    /// Check if this command moves or shows/hides windows
    pub fn needs_sync(&self) -> bool {
        match self {
            Cmd::SyncWindows => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_sync()),
            _ => false,
        }
    }

    /// Create a batch, flattening away `None`s
    pub fn batch(cmds: Vec<Cmd>) -> Cmd {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| *c != Cmd::None).collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }
}
