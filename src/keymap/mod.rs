//! Configurable key binding engine
//!
//! This module maps keyboard keys to a fixed set of virtual keys (actions):
//! - Classifies key codes into ordinary, pseudo-key and extended ranges
//! - Keeps a forward and a reverse map with conflict detection
//! - Distinguishes unbound-on-purpose actions from never-configured ones
//! - Reads and writes the line-oriented keys file
//!
//! # Architecture
//!
//! ```text
//! terminal → RawUnit → decode_key() → KeyCode → Keymap::lookup() → VirtualKey
//! ```
//!
//! # Loading Keymaps
//!
//! ```ignore
//! // Built-in defaults
//! let keymap = Keymap::with_defaults()?;
//!
//! // Or the user's keys file, created on first run
//! let (keymap, report) = Keymap::load_or_create(&path)?;
//! ```

mod binding;
mod command;
mod config;
mod crossterm_adapter;
mod defaults;
mod input;
#[allow(clippy::module_inception)]
mod keymap;
mod names;
mod reverse;
mod types;

pub use binding::Binding;
pub use command::{VirtualKey, NBVKEYS};
pub use config::{
    dump_defaults, dump_defaults_file, KeymapError, LoadIssue, LoadIssueKind, LoadReport,
};
pub use crossterm_adapter::{raw_units_from_key, TerminalInput};
pub use defaults::{default_names, KeyDef, KEYDEFS};
pub use input::{decode_key, CommandInput, Dispatch, InputReader, RawInput};
pub use keymap::{BindError, Conflict, FillError, Keymap, NO_KEY, UNDEFINED};
pub use names::KeyNames;
pub use reverse::ReverseMap;
pub use types::{classify, KeyCode, KeyRange, RawUnit, ORDINARY_MAX, PSEUDO_MAX, PSEUDO_MIN};

#[cfg(test)]
mod tests;
