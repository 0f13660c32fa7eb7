//! # Entry Store
//!
//! The `IconSet` aggregate: the name-keyed entry substrate every other
//! component reads and mutates.
//!
//! All data structures use `BTreeMap`/`BTreeSet` for deterministic ordering.
//! No `HashMap` allowed.

use crate::types::{Category, CategoryId, EntryKind, IconEntry};
use serde_json::Value;
use std::collections::BTreeMap;
use std::ops::ControlFlow;

/// The in-memory icon repository.
///
/// Owns the entry map plus the derived stores: categories (keyed by owned
/// id), the two theme tables and the optional free-form info block.
///
/// Single logical owner; mutations take `&mut self` and the caller is
/// responsible for serializing access.
#[derive(Debug, Clone, Default)]
pub struct IconSet {
    /// Namespace identifier of this set.
    prefix: String,

    /// Entry storage: name -> entry.
    pub(crate) entries: BTreeMap<String, IconEntry>,

    /// Category storage: owned id -> record.
    pub(crate) categories: BTreeMap<CategoryId, Category>,

    /// Next available category id.
    pub(crate) next_category_id: u64,

    /// Naming-theme prefix table: token -> display title.
    pub(crate) prefixes: BTreeMap<String, String>,

    /// Naming-theme suffix table: token -> display title.
    pub(crate) suffixes: BTreeMap<String, String>,

    /// Free-form metadata block; the icon total is recomputed on export.
    info: Option<Value>,
}

impl IconSet {
    /// Create an empty icon set with the given namespace prefix.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    /// The namespace prefix of this set.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Lookup an entry by name.
    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&IconEntry> {
        self.entries.get(name)
    }

    /// Check if an entry exists in the store.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All entries in deterministic (lexicographic) order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &IconEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Total number of entries of any kind.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The free-form info block, if present.
    #[must_use]
    pub fn info(&self) -> Option<&Value> {
        self.info.as_ref()
    }

    /// Replace the info block.
    pub fn set_info(&mut self, info: Option<Value>) {
        self.info = info;
    }

    /// All category records in id order.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    /// The requested theme table: prefixes or suffixes.
    #[must_use]
    pub fn theme_table(&self, is_prefix: bool) -> &BTreeMap<String, String> {
        if is_prefix { &self.prefixes } else { &self.suffixes }
    }

    /// Number of visible entries.
    ///
    /// Aliases never count; icons and variations count unless hidden in
    /// their stored properties or their resolved form. A variation whose
    /// chain no longer resolves has no resolved form and does not count.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(name, entry)| self.is_visible(name, entry))
            .count()
    }

    /// Visibility check shared by `count`, the Theme Matcher and the
    /// Category Index.
    pub(crate) fn is_visible(&self, name: &str, entry: &IconEntry) -> bool {
        match entry.kind() {
            EntryKind::Alias => false,
            EntryKind::Icon => !entry.is_hidden(),
            EntryKind::Variation => {
                !entry.is_hidden()
                    && self
                        .resolve(name, false)
                        .is_some_and(|resolved| !resolved.props.is_hidden())
            }
        }
    }

    /// Visit entries of the selected kinds in store order.
    ///
    /// Each step runs to completion before the next begins; returning
    /// `ControlFlow::Break(())` halts the traversal early. An empty kind
    /// list visits nothing.
    pub fn for_each<F>(&self, kinds: &[EntryKind], mut step: F)
    where
        F: FnMut(&str, &IconEntry) -> ControlFlow<()>,
    {
        for (name, entry) in &self.entries {
            if !kinds.contains(&entry.kind()) {
                continue;
            }
            if step(name, entry).is_break() {
                break;
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
