//! Reverse map: key code → virtual key
//!
//! Codes below `PSEUDO_MAX` live in a dense array for O(1) lookup. The
//! extended range is sparse and unbounded, so its few bound codes are kept in
//! a small list of pairs and scanned linearly.

use super::command::VirtualKey;
use super::types::{KeyCode, KeyRange, PSEUDO_MAX};

#[derive(Debug, Clone)]
pub struct ReverseMap {
    dense: Vec<Option<VirtualKey>>,
    extended: Vec<(KeyCode, VirtualKey)>,
}

impl ReverseMap {
    pub fn new() -> Self {
        Self {
            dense: vec![None; PSEUDO_MAX as usize],
            extended: Vec::new(),
        }
    }

    /// Virtual key the code is bound to
    pub fn get(&self, key: KeyCode) -> Option<VirtualKey> {
        match key.range() {
            Some(KeyRange::Extended) => self
                .extended
                .iter()
                .find(|(k, _)| *k == key)
                .map(|&(_, vkey)| vkey),
            _ => self.dense.get(key.value() as usize).copied().flatten(),
        }
    }

    /// Bind `key` to `vkey` unless it is already bound
    ///
    /// Returns the current owner when the key is taken.
    pub fn insert(&mut self, key: KeyCode, vkey: VirtualKey) -> Result<(), VirtualKey> {
        if let Some(owner) = self.get(key) {
            return Err(owner);
        }
        match key.range() {
            Some(KeyRange::Extended) => self.extended.push((key, vkey)),
            _ => {
                if let Some(slot) = self.dense.get_mut(key.value() as usize) {
                    *slot = Some(vkey);
                }
            }
        }
        Ok(())
    }

    /// Unbind `key`, returning its previous owner
    pub fn remove(&mut self, key: KeyCode) -> Option<VirtualKey> {
        match key.range() {
            Some(KeyRange::Extended) => {
                let pos = self.extended.iter().position(|(k, _)| *k == key)?;
                Some(self.extended.swap_remove(pos).1)
            }
            _ => self.dense.get_mut(key.value() as usize)?.take(),
        }
    }

    /// Number of bound codes
    pub fn len(&self) -> usize {
        self.dense.iter().filter(|slot| slot.is_some()).count() + self.extended.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.dense.iter_mut().for_each(|slot| *slot = None);
        self.extended.clear();
    }
}

impl Default for ReverseMap {
    fn default() -> Self {
        Self::new()
    }
}
