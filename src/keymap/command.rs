//! VirtualKey enum representing every bindable action
//!
//! Virtual keys are the bridge between keyboard keys and application commands.
//! The set is closed and fixed at compile time; each one has a stable ordinal
//! and a stable label that is used as the key in the keys file.

use std::fmt;
use std::str::FromStr;

use super::defaults::KEYDEFS;

/// All logical commands that can be bound to keys
///
/// Declaration order is the ordinal order and the order of the keys file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VirtualKey {
    // ========================================================================
    // Generic
    // ========================================================================
    Cancel,
    Select,
    Credits,
    Help,
    Quit,
    Save,
    Reload,
    Copy,
    Paste,
    ChangeView,
    PrevView,
    Import,
    Export,
    Goto,
    OtherCmd,
    ConfigMenu,
    Redraw,
    AddAppt,
    AddTodo,
    PrevDay,
    NextDay,
    PrevWeek,
    NextWeek,
    PrevMonth,
    NextMonth,
    PrevYear,
    NextYear,
    ScrollDown,
    ScrollUp,
    GotoToday,
    Command,

    // ========================================================================
    // Movement
    // ========================================================================
    MoveRight,
    MoveLeft,
    MoveDown,
    MoveUp,
    StartOfWeek,
    EndOfWeek,

    // ========================================================================
    // Item actions
    // ========================================================================
    AddItem,
    DelItem,
    EditItem,
    ViewItem,
    PipeItem,
    FlagItem,
    Repeat,
    EditNote,
    ViewNote,
    RaisePriority,
    LowerPriority,
}

/// Number of virtual keys
pub const NBVKEYS: usize = 48;

impl VirtualKey {
    /// Every virtual key in ordinal order
    pub const ALL: [VirtualKey; NBVKEYS] = {
        use VirtualKey::*;
        [
            Cancel,
            Select,
            Credits,
            Help,
            Quit,
            Save,
            Reload,
            Copy,
            Paste,
            ChangeView,
            PrevView,
            Import,
            Export,
            Goto,
            OtherCmd,
            ConfigMenu,
            Redraw,
            AddAppt,
            AddTodo,
            PrevDay,
            NextDay,
            PrevWeek,
            NextWeek,
            PrevMonth,
            NextMonth,
            PrevYear,
            NextYear,
            ScrollDown,
            ScrollUp,
            GotoToday,
            Command,
            MoveRight,
            MoveLeft,
            MoveDown,
            MoveUp,
            StartOfWeek,
            EndOfWeek,
            AddItem,
            DelItem,
            EditItem,
            ViewItem,
            PipeItem,
            FlagItem,
            Repeat,
            EditNote,
            ViewNote,
            RaisePriority,
            LowerPriority,
        ]
    };

    /// Stable ordinal
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Virtual key with the given ordinal
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Label used in the keys file (e.g. `generic-quit`)
    pub fn label(self) -> &'static str {
        KEYDEFS[self.index()].label
    }

    /// Space-separated names of the keys bound by default
    pub fn default_binding(self) -> &'static str {
        KEYDEFS[self.index()].binding
    }

    /// Short label shown in the legend (at most 8 columns)
    pub fn display_label(self) -> &'static str {
        KEYDEFS[self.index()].display
    }

    /// One-sentence explanation for the key configuration popup
    pub fn description(self) -> &'static str {
        use VirtualKey::*;

        match self {
            Cancel => "Cancel the ongoing action.",
            Select => "Select the highlighted item.",
            Credits => "Print general information about the authors, license, etc.",
            Help => "Display hints whenever some help screens are available.",
            Quit => "Exit from the current menu, or quit the application.",
            Save => "Save the calendar data.",
            Reload => "Reload appointments and todo items.",
            Copy => "Copy the item that is currently selected.",
            Paste => "Paste an item at the current position.",
            ChangeView => "Select next panel in the main screen.",
            PrevView => "Select previous panel in the main screen.",
            Import => "Import data from an external file.",
            Export => "Export data to a new file format.",
            Goto => "Select the day to go to.",
            OtherCmd => "Show next possible actions inside status bar.",
            ConfigMenu => "Enter the configuration menu.",
            Redraw => "Redraw the screen.",
            AddAppt => "Add an appointment, whichever panel is currently selected.",
            AddTodo => "Add a todo item, whichever panel is currently selected.",
            PrevDay => "Move to previous day in calendar, whichever panel is currently selected.",
            NextDay => "Move to next day in calendar, whichever panel is currently selected.",
            PrevWeek => "Move to previous week in calendar, whichever panel is currently selected.",
            NextWeek => "Move to next week in calendar, whichever panel is currently selected.",
            PrevMonth => {
                "Move to previous month in calendar, whichever panel is currently selected."
            }
            NextMonth => "Move to next month in calendar, whichever panel is currently selected.",
            PrevYear => "Move to previous year in calendar, whichever panel is currently selected.",
            NextYear => "Move to next year in calendar, whichever panel is currently selected.",
            ScrollDown => "Scroll window down (e.g. when displaying text inside a popup window).",
            ScrollUp => "Scroll window up (e.g. when displaying text inside a popup window).",
            GotoToday => "Go to today, whichever panel is selected.",
            Command => "Enter command mode.",
            MoveRight => "Move to the right.",
            MoveLeft => "Move to the left.",
            MoveDown => "Move down.",
            MoveUp => "Move up.",
            StartOfWeek => {
                "Select the first day of the current week when inside the calendar panel."
            }
            EndOfWeek => "Select the last day of the current week when inside the calendar panel.",
            AddItem => "Add an item to the currently selected panel.",
            DelItem => "Delete the currently selected item.",
            EditItem => "Edit the currently selected item.",
            ViewItem => "Display the currently selected item inside a popup window.",
            PipeItem => "Pipe the currently selected item to an external program.",
            FlagItem => "Flag the currently selected item as important.",
            Repeat => "Repeat an item.",
            EditNote => "Attach (or edit if one exists) a note to the currently selected item.",
            ViewNote => "View the note attached to the currently selected item.",
            RaisePriority => "Raise a task priority inside the todo panel.",
            LowerPriority => "Lower a task priority inside the todo panel.",
        }
    }
}

impl fmt::Display for VirtualKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse a keys-file label such as `move-up`
impl FromStr for VirtualKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|vkey| vkey.label() == s)
            .ok_or(())
    }
}
