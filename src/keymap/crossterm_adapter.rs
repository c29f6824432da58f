//! Adapter to turn crossterm terminal events into raw input units
//!
//! crossterm already decodes escape sequences and UTF-8. The keymap works on
//! the terminal's raw numbering instead, so key events are translated back:
//! text becomes its UTF-8 bytes, Ctrl+letter becomes a control byte and named
//! keys become pseudo-key codes.

use std::collections::VecDeque;

use crossterm::event::{
    self, Event, KeyCode as TermKeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};

use super::types::{KeyCode, RawUnit};

/// Control byte produced by Ctrl+`c`, if there is one
fn control_byte(c: char) -> Option<u8> {
    match c.to_ascii_uppercase() {
        c @ '@'..='_' => Some(c as u8 & 0x1f),
        ' ' => Some(0),
        '?' => Some(0x7f),
        _ => None,
    }
}

/// Translate one crossterm key event into raw units
///
/// Returns an empty list for key releases and keys with no terminal
/// equivalent.
pub fn raw_units_from_key(key: &KeyEvent) -> Vec<RawUnit> {
    if key.kind == KeyEventKind::Release {
        return Vec::new();
    }

    let mut units = Vec::new();
    // Terminals send Alt/Meta as an ESC prefix
    if key.modifiers.contains(KeyModifiers::ALT) {
        units.push(RawUnit::Byte(KeyCode::ESCAPE.value() as u8));
    }

    let pseudo = |code: KeyCode| vec![RawUnit::Pseudo(code)];
    let body = match key.code {
        TermKeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            match control_byte(c) {
                Some(b) => vec![RawUnit::Byte(b)],
                None => text_units(c),
            }
        }
        TermKeyCode::Char(c) => text_units(c),
        TermKeyCode::Enter => vec![RawUnit::Byte(KeyCode::RETURN.value() as u8)],
        TermKeyCode::Tab => vec![RawUnit::Byte(KeyCode::TAB.value() as u8)],
        TermKeyCode::Esc => vec![RawUnit::Byte(KeyCode::ESCAPE.value() as u8)],
        TermKeyCode::BackTab => pseudo(KeyCode::BACK_TAB),
        TermKeyCode::Backspace => pseudo(KeyCode::BACKSPACE),
        TermKeyCode::Delete => pseudo(KeyCode::DELETE),
        TermKeyCode::Insert => pseudo(KeyCode::INSERT),
        TermKeyCode::Home => pseudo(KeyCode::HOME),
        TermKeyCode::End => pseudo(KeyCode::END),
        TermKeyCode::PageUp => pseudo(KeyCode::PAGE_UP),
        TermKeyCode::PageDown => pseudo(KeyCode::PAGE_DOWN),
        TermKeyCode::Up => pseudo(KeyCode::UP),
        TermKeyCode::Down => pseudo(KeyCode::DOWN),
        TermKeyCode::Left => pseudo(KeyCode::LEFT),
        TermKeyCode::Right => pseudo(KeyCode::RIGHT),
        TermKeyCode::F(n) if n < 64 => pseudo(KeyCode::function(n)),
        _ => return Vec::new(),
    };

    units.extend(body);
    units
}

fn text_units(c: char) -> Vec<RawUnit> {
    let mut buf = [0u8; 4];
    c.encode_utf8(&mut buf)
        .bytes()
        .map(RawUnit::Byte)
        .collect()
}

/// Raw input read from the terminal through crossterm
///
/// The terminal should be in raw mode. Resize events are reported as the
/// `RESIZE` pseudo key. A read error ends the stream.
#[derive(Debug, Default)]
pub struct TerminalInput {
    pending: VecDeque<RawUnit>,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Iterator for TerminalInput {
    type Item = RawUnit;

    fn next(&mut self) -> Option<RawUnit> {
        loop {
            if let Some(unit) = self.pending.pop_front() {
                return Some(unit);
            }
            match event::read() {
                Ok(Event::Key(key)) => self.pending.extend(raw_units_from_key(&key)),
                Ok(Event::Resize(_, _)) => return Some(RawUnit::Pseudo(KeyCode::RESIZE)),
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("Terminal read failed: {}", e);
                    return None;
                }
            }
        }
    }
}
