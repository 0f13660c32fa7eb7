//! # Character Map
//!
//! Bidirectional association between single characters and icon names,
//! derived from entry state. Characters live on the entries themselves; the
//! map is a projection built on demand.

use crate::store::IconSet;
use std::collections::BTreeMap;

impl IconSet {
    /// Build the `char -> name` map from the character sets of the given
    /// names, or of every entry when `names` is `None`.
    ///
    /// Unknown names are skipped. When two entries claim the same character
    /// the later name in iteration order wins.
    #[must_use]
    pub fn character_map(&self, names: Option<&[String]>) -> BTreeMap<char, String> {
        let mut map = BTreeMap::new();
        match names {
            Some(names) => {
                for name in names {
                    if let Some(entry) = self.entries.get(name) {
                        for ch in entry.chars() {
                            map.insert(*ch, name.clone());
                        }
                    }
                }
            }
            None => {
                for (name, entry) in &self.entries {
                    for ch in entry.chars() {
                        map.insert(*ch, name.clone());
                    }
                }
            }
        }
        map
    }

    /// Add or remove a character association on one entry.
    ///
    /// Returns `None` when the entry is absent, `Some(false)` when the
    /// association already matched the requested state, `Some(true)` when
    /// it actually changed.
    pub fn toggle_character(&mut self, name: &str, ch: char, add: bool) -> Option<bool> {
        let entry = self.entries.get_mut(name)?;
        let chars = entry.chars_mut();
        Some(if add { chars.insert(ch) } else { chars.remove(&ch) })
    }
}

// =============================================================================
// TESTS
// =============================================================================
