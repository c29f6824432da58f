//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use vkeys::keymap::{dump_defaults, InputReader, Keymap, RawUnit};

/// Raw units for the bytes of `text`
pub fn units(text: &str) -> Vec<RawUnit> {
    text.bytes().map(RawUnit::Byte).collect()
}

/// Reader over the bytes of `text`
pub fn reader(text: &str) -> InputReader<std::vec::IntoIter<RawUnit>> {
    InputReader::new(units(text).into_iter())
}

/// Keymap holding the built-in defaults
pub fn default_keymap() -> Keymap {
    Keymap::with_defaults().expect("Built-in defaults should not conflict")
}

/// The default keys file as text
pub fn defaults_text() -> String {
    let mut buf = Vec::new();
    dump_defaults(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

/// What `Keymap::save` writes
pub fn saved(keymap: &Keymap) -> String {
    let mut buf = Vec::new();
    keymap.save(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

/// Write `content` to `name` inside `dir`, returning the path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
