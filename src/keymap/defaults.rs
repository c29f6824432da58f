//! Default key bindings
//!
//! The built-in table ships one entry per virtual key, in ordinal order. It
//! seeds the keys file on first run and fills in actions that a loaded file
//! does not mention.

use super::command::{VirtualKey, NBVKEYS};

/// Built-in definition of one virtual key
#[derive(Debug, Clone, Copy)]
pub struct KeyDef {
    /// Name of the action in the keys file
    pub label: &'static str,
    /// Space-separated key names bound to it by default
    pub binding: &'static str,
    /// Display name in the legend
    pub display: &'static str,
}

const fn def(label: &'static str, binding: &'static str, display: &'static str) -> KeyDef {
    KeyDef {
        label,
        binding,
        display,
    }
}

/// Default definitions indexed by `VirtualKey::index()`
pub const KEYDEFS: [KeyDef; NBVKEYS] = [
    def("generic-cancel", "ESC", "Cancel"),
    def("generic-select", "SPC", "Select"),
    def("generic-credits", "@", "Credits"),
    def("generic-help", "?", "Help"),
    def("generic-quit", "q Q", "Quit"),
    def("generic-save", "s S ^S", "Save"),
    def("generic-reload", "R", "Reload"),
    def("generic-copy", "c", "Copy"),
    def("generic-paste", "p ^V", "Paste"),
    def("generic-change-view", "TAB", "Chg Win"),
    def("generic-prev-view", "KEY_BTAB", "Prev Win"),
    def("generic-import", "i I", "Import"),
    def("generic-export", "x X", "Export"),
    def("generic-goto", "g G", "Go to"),
    def("generic-other-cmd", "o O", "OtherCmd"),
    def("generic-config-menu", "C", "Config"),
    def("generic-redraw", "^R", "Redraw"),
    def("generic-add-appt", "^A", "Add Appt"),
    def("generic-add-todo", "^T", "Add Todo"),
    def("generic-prev-day", "T ^H", "-1 Day"),
    def("generic-next-day", "t ^L", "+1 Day"),
    def("generic-prev-week", "W ^K", "-1 Week"),
    def("generic-next-week", "w", "+1 Week"),
    def("generic-prev-month", "M", "-1 Month"),
    def("generic-next-month", "m", "+1 Month"),
    def("generic-prev-year", "Y", "-1 Year"),
    def("generic-next-year", "y", "+1 Year"),
    def("generic-scroll-down", "^N", "Nxt View"),
    def("generic-scroll-up", "^P", "Prv View"),
    def("generic-goto-today", "^G", "Today"),
    def("generic-command", ":", "Command"),
    def("move-right", "l L RGT", "Right"),
    def("move-left", "h H LFT", "Left"),
    def("move-down", "j J DWN", "Down"),
    def("move-up", "k K UP", "Up"),
    def("start-of-week", "0", "beg Week"),
    def("end-of-week", "$", "end Week"),
    def("add-item", "a A", "Add Item"),
    def("del-item", "d D", "Del Item"),
    def("edit-item", "e E", "Edit Itm"),
    def("view-item", "v V RET", "View"),
    def("pipe-item", "|", "Pipe"),
    def("flag-item", "!", "Flag Itm"),
    def("repeat", "r", "Repeat"),
    def("edit-note", "n N", "EditNote"),
    def("view-note", ">", "ViewNote"),
    def("raise-priority", "+", "Prio.+"),
    def("lower-priority", "-", "Prio.-"),
];

/// Names of the keys bound to `vkey` by default, in binding order
pub fn default_names(vkey: VirtualKey) -> impl Iterator<Item = &'static str> {
    vkey.default_binding().split_whitespace()
}
