//! Core types for the keymap system: KeyCode, KeyRange, raw input units

use std::fmt;

/// First pseudo-key code (curses `KEY_MIN`, octal 0401)
pub const PSEUDO_MIN: u32 = 0o401;

/// End of the pseudo-key range (curses `KEY_MAX`, octal 0777)
///
/// Multi-byte text characters are stored as `codepoint + PSEUDO_MAX`.
pub const PSEUDO_MAX: u32 = 0o777;

/// Largest code in the ordinary single-byte range
pub const ORDINARY_MAX: u32 = 127;

/// The three disjoint key-code spaces
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyRange {
    /// `[1, 127]`: single-byte characters, control codes included
    Ordinary,
    /// `[PSEUDO_MIN, PSEUDO_MAX)`: keys the terminal reports as escape sequences
    Pseudo,
    /// `[PSEUDO_MAX, ∞)`: multi-byte text characters
    Extended,
}

/// Classify a raw code into its range
///
/// Returns `None` for the gap between the ordinary and pseudo ranges (and 0).
pub const fn classify(code: u32) -> Option<KeyRange> {
    if code >= 1 && code <= ORDINARY_MAX {
        Some(KeyRange::Ordinary)
    } else if code >= PSEUDO_MIN && code < PSEUDO_MAX {
        Some(KeyRange::Pseudo)
    } else if code >= PSEUDO_MAX {
        Some(KeyRange::Extended)
    } else {
        None
    }
}

/// An integer identifying one physical or logical key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCode(u32);

impl KeyCode {
    // Ordinary keys with short names
    pub const TAB: KeyCode = KeyCode(9);
    pub const RETURN: KeyCode = KeyCode(10);
    pub const ESCAPE: KeyCode = KeyCode(27);
    pub const SPACE: KeyCode = KeyCode(32);

    // Pseudo keys, curses numbering
    pub const BREAK: KeyCode = KeyCode(0o401);
    pub const DOWN: KeyCode = KeyCode(0o402);
    pub const UP: KeyCode = KeyCode(0o403);
    pub const LEFT: KeyCode = KeyCode(0o404);
    pub const RIGHT: KeyCode = KeyCode(0o405);
    pub const HOME: KeyCode = KeyCode(0o406);
    pub const BACKSPACE: KeyCode = KeyCode(0o407);
    pub const F0: KeyCode = KeyCode(0o410);
    pub const DELETE: KeyCode = KeyCode(0o512);
    pub const INSERT: KeyCode = KeyCode(0o513);
    pub const PAGE_DOWN: KeyCode = KeyCode(0o522);
    pub const PAGE_UP: KeyCode = KeyCode(0o523);
    pub const ENTER: KeyCode = KeyCode(0o527);
    pub const BACK_TAB: KeyCode = KeyCode(0o541);
    pub const END: KeyCode = KeyCode(0o550);
    pub const MOUSE: KeyCode = KeyCode(0o631);
    pub const RESIZE: KeyCode = KeyCode(0o632);

    /// Wrap a raw code
    pub const fn new(code: u32) -> Self {
        KeyCode(code)
    }

    /// Function key `F(n)`, n in 0..=63
    pub const fn function(n: u8) -> Self {
        KeyCode(Self::F0.0 + n as u32)
    }

    /// Key code for a text character
    ///
    /// ASCII characters map into the ordinary range, everything else into the
    /// extended range.
    pub fn from_char(c: char) -> Self {
        let cp = c as u32;
        if cp <= ORDINARY_MAX {
            KeyCode(cp)
        } else {
            Self::from_codepoint(cp)
        }
    }

    /// Extended-range code for a codepoint
    pub const fn from_codepoint(cp: u32) -> Self {
        KeyCode(cp + PSEUDO_MAX)
    }

    /// Raw integer value
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Which key-code space this code belongs to
    #[inline]
    pub const fn range(self) -> Option<KeyRange> {
        classify(self.0)
    }

    /// Codepoint carried by an extended-range code
    pub const fn codepoint(self) -> Option<u32> {
        if self.0 >= PSEUDO_MAX {
            Some(self.0 - PSEUDO_MAX)
        } else {
            None
        }
    }

    /// The character an ordinary or extended code stands for
    pub fn to_char(self) -> Option<char> {
        match self.range()? {
            KeyRange::Ordinary => char::from_u32(self.0),
            KeyRange::Extended => self.codepoint().and_then(char::from_u32),
            KeyRange::Pseudo => None,
        }
    }

    /// ASCII digit value for `'0'..='9'`
    pub fn digit(self) -> Option<u32> {
        match self.0 {
            0x30..=0x39 => Some(self.0 - 0x30),
            _ => None,
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One unit read from the terminal: a byte of text or a decoded pseudo key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawUnit {
    Byte(u8),
    Pseudo(KeyCode),
}
