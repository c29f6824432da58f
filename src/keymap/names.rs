//! Canonical key names
//!
//! Names for the ordinary and pseudo ranges are built once into a table indexed
//! by key code. Extended-range codes have no cached name; their name is the
//! UTF-8 text of the character.

use super::types::{KeyCode, KeyRange, ORDINARY_MAX, PSEUDO_MAX, PSEUDO_MIN};

/// Names the terminal reports for pseudo keys `KEY_BREAK..=KEY_EVENT`, in code
/// order. `KEY_F(n)` names are generated separately.
const PSEUDO_NAMES_LOW: [&str; 7] = [
    "KEY_BREAK",
    "KEY_DOWN",
    "KEY_UP",
    "KEY_LEFT",
    "KEY_RIGHT",
    "KEY_HOME",
    "KEY_BACKSPACE",
];

/// Pseudo keys following the 64 function keys, starting at `KEY_DL` (0o510)
const PSEUDO_NAMES_HIGH: [&str; 84] = [
    "KEY_DL",
    "KEY_IL",
    "KEY_DC",
    "KEY_IC",
    "KEY_EIC",
    "KEY_CLEAR",
    "KEY_EOS",
    "KEY_EOL",
    "KEY_SF",
    "KEY_SR",
    "KEY_NPAGE",
    "KEY_PPAGE",
    "KEY_STAB",
    "KEY_CTAB",
    "KEY_CATAB",
    "KEY_ENTER",
    "KEY_SRESET",
    "KEY_RESET",
    "KEY_PRINT",
    "KEY_LL",
    "KEY_A1",
    "KEY_A3",
    "KEY_B2",
    "KEY_C1",
    "KEY_C3",
    "KEY_BTAB",
    "KEY_BEG",
    "KEY_CANCEL",
    "KEY_CLOSE",
    "KEY_COMMAND",
    "KEY_COPY",
    "KEY_CREATE",
    "KEY_END",
    "KEY_EXIT",
    "KEY_FIND",
    "KEY_HELP",
    "KEY_MARK",
    "KEY_MESSAGE",
    "KEY_MOVE",
    "KEY_NEXT",
    "KEY_OPEN",
    "KEY_OPTIONS",
    "KEY_PREVIOUS",
    "KEY_REDO",
    "KEY_REFERENCE",
    "KEY_REFRESH",
    "KEY_REPLACE",
    "KEY_RESTART",
    "KEY_RESUME",
    "KEY_SAVE",
    "KEY_SBEG",
    "KEY_SCANCEL",
    "KEY_SCOMMAND",
    "KEY_SCOPY",
    "KEY_SCREATE",
    "KEY_SDC",
    "KEY_SDL",
    "KEY_SELECT",
    "KEY_SEND",
    "KEY_SEOL",
    "KEY_SEXIT",
    "KEY_SFIND",
    "KEY_SHELP",
    "KEY_SHOME",
    "KEY_SIC",
    "KEY_SLEFT",
    "KEY_SMESSAGE",
    "KEY_SMOVE",
    "KEY_SNEXT",
    "KEY_SOPTIONS",
    "KEY_SPREVIOUS",
    "KEY_SPRINT",
    "KEY_SREDO",
    "KEY_SREPLACE",
    "KEY_SRIGHT",
    "KEY_SRSUME",
    "KEY_SSAVE",
    "KEY_SSUSPEND",
    "KEY_SUNDO",
    "KEY_SUSPEND",
    "KEY_UNDO",
    "KEY_MOUSE",
    "KEY_RESIZE",
    "KEY_EVENT",
];

/// Number of function keys the terminal numbers (`KEY_F(0)..KEY_F(63)`)
const FUNCTION_KEYS: u8 = 64;

/// First code after the function keys
const PSEUDO_HIGH_BASE: u32 = 0o510;

/// Short forms that replace the terminal names to keep configuration compact
fn short_forms() -> Vec<(KeyCode, &'static str)> {
    let mut forms = vec![
        (KeyCode::TAB, "TAB"),
        (KeyCode::RETURN, "RET"),
        (KeyCode::ESCAPE, "ESC"),
        (KeyCode::SPACE, "SPC"),
        (KeyCode::UP, "UP"),
        (KeyCode::DOWN, "DWN"),
        (KeyCode::LEFT, "LFT"),
        (KeyCode::RIGHT, "RGT"),
        (KeyCode::HOME, "HOM"),
        (KeyCode::END, "END"),
        (KeyCode::PAGE_DOWN, "PgD"),
        (KeyCode::PAGE_UP, "PgU"),
        (KeyCode::INSERT, "INS"),
        (KeyCode::DELETE, "DEL"),
    ];
    const F_NAMES: [&str; 12] = [
        "F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "F9", "F10", "F11", "F12",
    ];
    for (i, name) in F_NAMES.iter().enumerate() {
        forms.push((KeyCode::function(i as u8 + 1), *name));
    }
    forms
}

/// Terminal-style name of an ordinary byte: caret notation for control codes,
/// the character itself when printable
fn ordinary_name(code: u32) -> String {
    match code {
        0..=31 => format!("^{}", char::from(code as u8 + 64)),
        127 => "^?".to_string(),
        _ => char::from(code as u8).to_string(),
    }
}

/// Cached table of key names for the ordinary and pseudo ranges
#[derive(Debug, Clone)]
pub struct KeyNames {
    /// Indexed by key code; an empty string means "no name"
    table: Vec<String>,
}

impl KeyNames {
    /// Build the name table
    pub fn new() -> Self {
        let mut table = vec![String::new(); PSEUDO_MAX as usize];

        for code in 1..=ORDINARY_MAX {
            table[code as usize] = ordinary_name(code);
        }

        for (i, name) in PSEUDO_NAMES_LOW.iter().enumerate() {
            table[PSEUDO_MIN as usize + i] = (*name).to_string();
        }
        for n in 0..FUNCTION_KEYS {
            table[KeyCode::function(n).value() as usize] = format!("KEY_F({})", n);
        }
        for (i, name) in PSEUDO_NAMES_HIGH.iter().enumerate() {
            table[PSEUDO_HIGH_BASE as usize + i] = (*name).to_string();
        }

        for (key, name) in short_forms() {
            table[key.value() as usize] = name.to_string();
        }

        Self { table }
    }

    /// Canonical name of a key code
    ///
    /// An extended-range code is named by its character. Extended codes that
    /// no input can produce have no name: ASCII codepoints (typed text decodes
    /// to the ordinary range) and values that are not Unicode scalars.
    pub fn name_of(&self, key: KeyCode) -> Option<String> {
        match key.range() {
            Some(KeyRange::Extended) => key
                .codepoint()
                .filter(|&cp| cp > ORDINARY_MAX)
                .and_then(char::from_u32)
                .map(String::from),
            _ => self.cached(key).map(str::to_string),
        }
    }

    /// Cached name for a code below `PSEUDO_MAX`
    pub fn cached(&self, key: KeyCode) -> Option<&str> {
        self.table
            .get(key.value() as usize)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Resolve a name to a key code
    ///
    /// Never fails: a string that is not a known name is read as UTF-8 text and
    /// its first character becomes an extended-range code.
    pub fn code_of(&self, name: &str) -> KeyCode {
        // Spellings accepted from older keys files
        match name {
            "^J" => return KeyCode::RETURN,
            "KEY_HOME" => return KeyCode::HOME,
            "KEY_END" => return KeyCode::END,
            _ => {}
        }

        let ordinary = 1..=ORDINARY_MAX;
        let pseudo = PSEUDO_MIN..PSEUDO_MAX;
        if let Some(code) = ordinary
            .chain(pseudo)
            .find(|&code| self.table[code as usize] == name)
        {
            return KeyCode::new(code);
        }

        let cp = name.chars().next().map_or(0, u32::from);
        KeyCode::from_codepoint(cp)
    }
}

impl Default for KeyNames {
    fn default() -> Self {
        Self::new()
    }
}
