//! Runtime module - winit/platform integration
//!
//! This module contains the platform side of the sidebar:
//! - `app` - ApplicationHandler and window management
//! - `launch` - Starting the file browser and text editor
//! - `screens` - Monitor geometry from the event loop

pub mod app;
pub mod launch;
pub mod screens;

pub use app::App;
