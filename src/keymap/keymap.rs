//! Keymap struct: the binding table
//!
//! Owns the forward map (virtual key → ordered key codes), the reverse map
//! (key code → virtual key) and the key name table. Every mutation goes
//! through `&mut self` and updates both directions before returning, so the
//! two maps never disagree.

use std::fmt;

use super::binding::Binding;
use super::command::{VirtualKey, NBVKEYS};
use super::defaults::default_names;
use super::names::KeyNames;
use super::reverse::ReverseMap;
use super::types::KeyCode;

/// Token written for an action with no keys
pub const UNDEFINED: &str = "UNDEFINED";

/// Shown in place of a key name when an action has no key
pub const NO_KEY: &str = "XXX";

/// A key is already bound to an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub key: KeyCode,
    /// Canonical name of the key, if it has one
    pub key_name: Option<String>,
    /// Action that currently owns the key
    pub owner: VirtualKey,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key_name {
            Some(name) => write!(f, "key '{}' is already bound to {}", name, self.owner),
            None => write!(f, "key code {} is already bound to {}", self.key, self.owner),
        }
    }
}

impl std::error::Error for Conflict {}

/// Why a key could not be bound
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// The code has no name, so it could neither be typed nor saved
    Unnamed(KeyCode),
    Conflict(Conflict),
}

impl BindError {
    /// The conflict, if the key was already taken
    pub fn conflict(&self) -> Option<&Conflict> {
        match self {
            BindError::Conflict(conflict) => Some(conflict),
            BindError::Unnamed(_) => None,
        }
    }
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::Unnamed(key) => write!(f, "key code {} has no name", key),
            BindError::Conflict(conflict) => write!(f, "{}", conflict),
        }
    }
}

impl std::error::Error for BindError {}

/// A default key of a missing action is already taken
///
/// The key is held either by a binding loaded from the keys file or, when
/// building from defaults alone, by another default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillError {
    /// Ordinal of the action whose defaults could not be assigned
    pub index: usize,
    pub action: VirtualKey,
    pub error: BindError,
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not assign default keys to action #{} ({}): {}",
            self.index, self.action, self.error
        )
    }
}

impl std::error::Error for FillError {}

/// The binding table
#[derive(Debug, Clone)]
pub struct Keymap {
    names: KeyNames,
    /// Indexed by `VirtualKey::index()`
    bindings: Vec<Binding>,
    reverse: ReverseMap,
}

impl Keymap {
    /// Create a keymap with every action missing
    pub fn new() -> Self {
        Self {
            names: KeyNames::new(),
            bindings: vec![Binding::Missing; NBVKEYS],
            reverse: ReverseMap::new(),
        }
    }

    /// Create a keymap holding the built-in default bindings
    pub fn with_defaults() -> Result<Self, FillError> {
        let mut keymap = Self::new();
        keymap.fill_missing()?;
        Ok(keymap)
    }

    /// The key name table
    pub fn names(&self) -> &KeyNames {
        &self.names
    }

    /// Canonical name of a key code
    pub fn name_of(&self, key: KeyCode) -> Option<String> {
        self.names.name_of(key)
    }

    /// Key code for a name (never fails)
    pub fn code_of(&self, name: &str) -> KeyCode {
        self.names.code_of(name)
    }

    /// Bind `key` to `vkey`
    ///
    /// Fails without touching the table if the key is already bound, to any
    /// action including `vkey` itself, or if the key has no name.
    pub fn assign(&mut self, key: KeyCode, vkey: VirtualKey) -> Result<(), BindError> {
        let Some(key_name) = self.names.name_of(key) else {
            tracing::debug!("Rejected binding for {}: key code {} has no name", vkey, key);
            return Err(BindError::Unnamed(key));
        };
        if let Err(owner) = self.reverse.insert(key, vkey) {
            let conflict = Conflict {
                key,
                key_name: Some(key_name),
                owner,
            };
            tracing::debug!("Rejected binding for {}: {}", vkey, conflict);
            return Err(BindError::Conflict(conflict));
        }
        self.bindings[vkey.index()].push(key);
        Ok(())
    }

    /// Unbind `key` from `vkey`
    ///
    /// Removing the last key leaves the action explicitly undefined. A key that
    /// is not bound to `vkey` is left alone.
    pub fn remove(&mut self, key: KeyCode, vkey: VirtualKey) {
        if self.reverse.get(key) != Some(vkey) {
            return;
        }
        self.reverse.remove(key);
        self.bindings[vkey.index()].remove(key);
    }

    /// Action bound to `key`
    pub fn lookup(&self, key: KeyCode) -> Option<VirtualKey> {
        self.reverse.get(key)
    }

    /// Binding state of an action
    pub fn binding(&self, vkey: VirtualKey) -> &Binding {
        &self.bindings[vkey.index()]
    }

    /// Keys bound to an action, primary key first
    pub fn keys(&self, vkey: VirtualKey) -> &[KeyCode] {
        self.binding(vkey).keys()
    }

    /// True only when the action was explicitly left without keys
    pub fn is_undefined(&self, vkey: VirtualKey) -> bool {
        self.binding(vkey).is_undefined()
    }

    /// True only when the action was never configured
    pub fn is_missing(&self, vkey: VirtualKey) -> bool {
        self.binding(vkey).is_missing()
    }

    /// Mark a never-configured action as intentionally unbound
    ///
    /// Has no effect on an action that already has keys.
    pub fn mark_undefined(&mut self, vkey: VirtualKey) {
        let binding = &mut self.bindings[vkey.index()];
        if binding.is_missing() {
            *binding = Binding::Undefined;
        }
    }

    /// Assign the built-in defaults to every missing action
    ///
    /// Returns how many actions received at least one key.
    pub fn fill_missing(&mut self) -> Result<usize, FillError> {
        let mut assigned = 0;

        for vkey in VirtualKey::ALL {
            if !self.is_missing(vkey) {
                continue;
            }

            let mut any = false;
            for name in default_names(vkey) {
                let key = self.names.code_of(name);
                self.assign(key, vkey).map_err(|error| FillError {
                    index: vkey.index(),
                    action: vkey,
                    error,
                })?;
                any = true;
            }
            if any {
                assigned += 1;
            }
        }

        if assigned > 0 {
            tracing::warn!(
                "Default key(s) assigned to {} action{}",
                assigned,
                if assigned == 1 { "" } else { "s" }
            );
        }
        Ok(assigned)
    }

    /// Names of the keys bound to an action, each followed by a space
    ///
    /// Returns `UNDEFINED` for an explicitly unbound action and an empty string
    /// for a missing one.
    pub fn all_keys(&self, vkey: VirtualKey) -> String {
        match self.binding(vkey) {
            Binding::Undefined => UNDEFINED.to_string(),
            Binding::Missing => String::new(),
            Binding::Configured(keys) => keys
                .iter()
                .filter_map(|&key| self.names.name_of(key))
                .map(|name| name + " ")
                .collect(),
        }
    }

    /// Number of keys bound to an action
    pub fn count_keys(&self, vkey: VirtualKey) -> usize {
        self.keys(vkey).len()
    }

    /// Name of the primary key, or `XXX` if there is none
    pub fn first_key(&self, vkey: VirtualKey) -> String {
        self.binding(vkey)
            .first()
            .and_then(|key| self.names.name_of(key))
            .unwrap_or_else(|| NO_KEY.to_string())
    }

    /// Name of the n-th key bound to an action
    pub fn nth_key(&self, vkey: VirtualKey, n: usize) -> Option<String> {
        self.keys(vkey)
            .get(n)
            .and_then(|&key| self.names.name_of(key))
    }

    /// Forget every binding; all actions become missing
    pub fn clear(&mut self) {
        self.bindings.iter_mut().for_each(|b| *b = Binding::Missing);
        self.reverse.clear();
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}
