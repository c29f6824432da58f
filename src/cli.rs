//! Command-line argument parsing
//!
//! Supports:
//! - Printing the default and the live keys file
//! - Checking a keys file for problems
//! - Rendering the key legend as text
//! - Interactively resolving keys against the bindings

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::keymap::VirtualKey;
use crate::legend::{LegendEntry, MenuEntry};

/// Configurable key bindings for terminal applications
#[derive(Parser, Debug)]
#[command(name = "vkeys", version, about = "Configurable key bindings")]
pub struct CliArgs {
    /// Keys file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub keys: Option<PathBuf>,

    /// Log more on the console (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the default keys file
    Defaults,
    /// Print the bindings in effect
    Show,
    /// Report problems in the keys file
    Check,
    /// Render the key legend as text
    Legend(LegendArgs),
    /// Read keys from the terminal and print the action each one resolves to
    Keys,
}

#[derive(Args, Debug, Default)]
pub struct LegendArgs {
    /// Page to render (0-based, wraps around)
    #[arg(long, default_value_t = 0)]
    pub page: usize,

    /// Width of the legend in columns
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Show the configuration menu entries instead of actions
    #[arg(long)]
    pub menu: bool,

    /// Actions to show, by label (all actions when empty)
    #[arg(value_name = "ACTION")]
    pub actions: Vec<String>,
}

const MENU_ENTRIES: [MenuEntry; 6] = [
    MenuEntry::General,
    MenuEntry::Layout,
    MenuEntry::Sidebar,
    MenuEntry::Color,
    MenuEntry::Notify,
    MenuEntry::Keys,
];

impl LegendArgs {
    /// Entries to lay out
    pub fn entries(&self) -> Result<Vec<LegendEntry>, String> {
        let mut entries: Vec<LegendEntry> = if self.menu {
            MENU_ENTRIES.iter().copied().map(LegendEntry::from).collect()
        } else {
            Vec::new()
        };

        if self.actions.is_empty() {
            if !self.menu {
                entries.extend(VirtualKey::ALL.iter().copied().map(LegendEntry::from));
            }
            return Ok(entries);
        }

        for label in &self.actions {
            let vkey = label
                .parse::<VirtualKey>()
                .map_err(|_| format!("Unknown action '{}'", label))?;
            entries.push(vkey.into());
        }
        Ok(entries)
    }
}
