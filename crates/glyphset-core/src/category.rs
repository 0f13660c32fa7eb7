//! # Category Index
//!
//! A set of category records plus per-icon membership, recomputed lazily
//! and self-pruning: listing a category recounts it from the live entries
//! and drops it from the index once no visible icon lists it.
//!
//! Categories are owned records keyed by generated id; icons hold ids in
//! their membership sets, never live references. Title lookups go through
//! the store and are a linear scan.

use crate::store::IconSet;
use crate::types::{Category, CategoryId, IconEntry};

/// A category argument: either an owned id or a title to look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryRef<'a> {
    /// Direct reference by owned id.
    Id(CategoryId),
    /// Lookup by display title (linear scan, first match).
    Title(&'a str),
}

impl From<CategoryId> for CategoryRef<'static> {
    fn from(id: CategoryId) -> Self {
        Self::Id(id)
    }
}

impl<'a> From<&'a str> for CategoryRef<'a> {
    fn from(title: &'a str) -> Self {
        Self::Title(title)
    }
}

impl IconSet {
    /// Find a category id by title, optionally creating the record.
    ///
    /// Linear scan over the category set; `create` registers a zero-count
    /// record when no title matches.
    pub fn find_category(&mut self, title: &str, create: bool) -> Option<CategoryId> {
        let found = self
            .categories
            .values()
            .find(|category| category.title == title)
            .map(|category| category.id);

        match found {
            Some(id) => Some(id),
            None if create => Some(self.register_category(title)),
            None => None,
        }
    }

    /// Register a new zero-count category record unconditionally.
    pub(crate) fn register_category(&mut self, title: &str) -> CategoryId {
        let id = CategoryId(self.next_category_id);
        self.next_category_id = self.next_category_id.saturating_add(1);
        self.categories.insert(id, Category::new(id, title));
        id
    }

    /// Lookup a category record by id.
    #[must_use]
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.get(&id)
    }

    /// Recompute and return the current icon membership of a category.
    ///
    /// Only visible (non-hidden) `Icon` entries count, never aliases or
    /// variations. The stored count is updated to the result size. An empty
    /// result prunes the category from the index and returns `None`.
    pub fn list_category<'a>(&mut self, category: impl Into<CategoryRef<'a>>) -> Option<Vec<String>> {
        let id = match category.into() {
            CategoryRef::Id(id) => {
                if !self.categories.contains_key(&id) {
                    return None;
                }
                id
            }
            CategoryRef::Title(title) => self.find_category(title, false)?,
        };

        let members: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| match entry {
                IconEntry::Icon { categories, .. } => {
                    !entry.is_hidden() && categories.contains(&id)
                }
                _ => false,
            })
            .map(|(name, _)| name.clone())
            .collect();

        if members.is_empty() {
            self.categories.remove(&id);
            return None;
        }

        if let Some(record) = self.categories.get_mut(&id) {
            record.count = members.len();
        }
        Some(members)
    }

    /// Add or remove an icon's membership in a titled category.
    ///
    /// The category is created only when adding. Returns `true` when
    /// membership actually changed; `false` when it already matched the
    /// requested state or the icon/category cannot be resolved (the entry
    /// must be a concrete icon).
    pub fn toggle_category(&mut self, icon_name: &str, title: &str, add: bool) -> bool {
        let Some(id) = self.find_category(title, add) else {
            return false;
        };

        let changed = match self.entries.get_mut(icon_name) {
            Some(IconEntry::Icon { categories, .. }) => {
                if add {
                    categories.insert(id)
                } else {
                    categories.remove(&id)
                }
            }
            _ => false,
        };

        if changed {
            if let Some(record) = self.categories.get_mut(&id) {
                record.count = if add {
                    record.count.saturating_add(1)
                } else {
                    record.count.saturating_sub(1)
                };
            }
        }
        changed
    }
}

// =============================================================================
// TESTS
// =============================================================================
