//! vkeys - configurable key bindings for terminal applications
//!
//! This crate maps keyboard input to a fixed set of actions, reads and writes
//! the user's keys file and lays out a paged legend of the available keys.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod keymap;
pub mod legend;
pub mod tracing;

// Re-export commonly used types
pub use config::Settings;
pub use keymap::{Keymap, VirtualKey};
pub use legend::{Legend, LegendEntry};
