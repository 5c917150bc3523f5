//! edgebar - Elm-style edge-docking sidebar
//!
//! This crate provides the core types and logic for a small always-on-top
//! sidebar implementing the Elm Architecture pattern. The model and update
//! functions know nothing about windows; `view` draws into plain pixel
//! buffers.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod geometry;
pub mod messages;
pub mod model;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::SidebarConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use theme::Theme;
