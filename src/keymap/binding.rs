//! Binding state of one virtual key

use super::types::KeyCode;

/// What is known about the keys bound to a virtual key
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Binding {
    /// Never configured: no entry in the keys file and no default applied yet
    #[default]
    Missing,
    /// The user removed every key; persisted as `UNDEFINED`
    Undefined,
    /// One or more keys, in insertion order; the first one is displayed
    Configured(Vec<KeyCode>),
}

impl Binding {
    /// Keys currently bound (empty unless configured)
    pub fn keys(&self) -> &[KeyCode] {
        match self {
            Binding::Configured(keys) => keys,
            Binding::Missing | Binding::Undefined => &[],
        }
    }

    /// Primary key, shown in the legend
    pub fn first(&self) -> Option<KeyCode> {
        self.keys().first().copied()
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Binding::Missing)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Binding::Undefined)
    }

    /// Append a key, leaving the undefined/missing state
    pub(super) fn push(&mut self, key: KeyCode) {
        match self {
            Binding::Configured(keys) => keys.push(key),
            Binding::Missing | Binding::Undefined => *self = Binding::Configured(vec![key]),
        }
    }

    /// Remove a key; an emptied list becomes `Undefined`
    ///
    /// Returns whether the key was present.
    pub(super) fn remove(&mut self, key: KeyCode) -> bool {
        let Binding::Configured(keys) = self else {
            return false;
        };
        let Some(pos) = keys.iter().position(|&k| k == key) else {
            return false;
        };
        keys.remove(pos);
        if keys.is_empty() {
            *self = Binding::Undefined;
        }
        true
    }
}
