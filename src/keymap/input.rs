//! Reading keys from raw terminal input
//!
//! The terminal delivers either single bytes of UTF-8 text or already decoded
//! pseudo keys. A multi-byte character arrives as its lead byte followed by
//! continuation bytes; [`decode_key`] reassembles it into one extended-range
//! key code.
//!
//! On top of that, [`InputReader::next_command`] implements the command prefix
//! grammar: an optional repeat count (`12j`) and an optional register (`"ap`).

use super::command::VirtualKey;
use super::keymap::Keymap;
use super::types::{KeyCode, RawUnit};

/// Source of raw input units
///
/// `None` means no more input is available (end of stream or terminal error).
pub trait RawInput {
    fn read_unit(&mut self) -> Option<RawUnit>;
}

/// Any iterator of raw units is an input source
impl<I: Iterator<Item = RawUnit>> RawInput for I {
    fn read_unit(&mut self) -> Option<RawUnit> {
        self.next()
    }
}

/// Register prefix character
const REGISTER_PREFIX: char = '"';

/// Length of a UTF-8 sequence given its lead byte, or `None` for a byte that
/// cannot start a multi-byte sequence
fn utf8_len(lead: u8) -> Option<usize> {
    match lead {
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

/// Read one key code from `input`
///
/// Pseudo keys and single-byte characters are returned as they come. A lead
/// byte pulls in its continuation bytes and yields `codepoint + PSEUDO_MAX`;
/// a malformed sequence yields U+FFFD. A pseudo key arriving in the middle of
/// a sequence abandons the sequence and is returned itself.
pub fn decode_key<R: RawInput + ?Sized>(input: &mut R) -> Option<KeyCode> {
    let lead = match input.read_unit()? {
        RawUnit::Pseudo(key) => return Some(key),
        RawUnit::Byte(b) if b.is_ascii() => return Some(KeyCode::new(u32::from(b))),
        RawUnit::Byte(b) => b,
    };

    let Some(len) = utf8_len(lead) else {
        return Some(KeyCode::from_char(char::REPLACEMENT_CHARACTER));
    };

    let mut buf = [lead, 0, 0, 0];
    for slot in buf.iter_mut().take(len).skip(1) {
        match input.read_unit()? {
            RawUnit::Byte(b) => *slot = b,
            RawUnit::Pseudo(key) => return Some(key),
        }
    }

    let c = std::str::from_utf8(&buf[..len])
        .ok()
        .and_then(|s| s.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    Some(KeyCode::from_codepoint(u32::from(c)))
}

/// Outcome of resolving a key against the keymap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The key is bound to this action
    Action(VirtualKey),
    /// The terminal was resized; never looked up in the keymap
    Resize,
    /// No action is bound to this key
    Unbound(KeyCode),
}

/// A resolved command with its prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandInput {
    pub dispatch: Dispatch,
    /// Repeat count, 1 when none was typed
    pub count: u32,
    /// Register: 0 is the default, 1-9 for `"1`..`"9`, 10-35 for `"a`..`"z`
    pub register: u32,
}

/// Register selected by the character after `"`
fn register_for(key: KeyCode) -> u32 {
    match key.to_char() {
        Some(c @ '1'..='9') => c as u32 - '1' as u32 + 1,
        Some(c @ 'a'..='z') => c as u32 - 'a' as u32 + 10,
        _ => 0,
    }
}

/// Decodes keys from a raw input source and resolves them to actions
#[derive(Debug)]
pub struct InputReader<R> {
    input: R,
}

impl<R: RawInput> InputReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Read one key code
    pub fn next_key(&mut self) -> Option<KeyCode> {
        decode_key(&mut self.input)
    }

    /// Block until any key is pressed
    pub fn wait_for_any_key(&mut self) -> Option<KeyCode> {
        self.next_key()
    }

    /// Read the next command
    ///
    /// With `with_prefix`, leading digits form a repeat count and `"` followed
    /// by a digit or lowercase letter selects a register. A `0` is only part of
    /// a count once a non-zero digit has been read; on its own it is a command
    /// key. Returns `None` when input runs out.
    pub fn next_command(&mut self, keymap: &Keymap, with_prefix: bool) -> Option<CommandInput> {
        let mut count: u32 = 0;
        let mut register = 0;

        let mut key = self.next_key()?;
        if with_prefix {
            while let Some(digit) = key.digit() {
                if digit == 0 && count == 0 {
                    break;
                }
                count = count.saturating_mul(10).saturating_add(digit);
                key = self.next_key()?;
            }

            if key.to_char() == Some(REGISTER_PREFIX) {
                register = register_for(self.next_key()?);
                key = self.next_key()?;
            }
        }

        let dispatch = if key == KeyCode::RESIZE {
            Dispatch::Resize
        } else {
            match keymap.lookup(key) {
                Some(vkey) => Dispatch::Action(vkey),
                None => Dispatch::Unbound(key),
            }
        };

        Some(CommandInput {
            dispatch,
            count: count.max(1),
            register,
        })
    }

    /// Consume the reader, returning the input source
    pub fn into_inner(self) -> R {
        self.input
    }
}
