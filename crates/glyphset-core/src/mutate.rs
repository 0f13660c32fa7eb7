//! # Mutation API
//!
//! Add/replace/remove/rename operations that keep the Entry Store and its
//! indices consistent, including cascading or re-parenting dependents.
//!
//! All mutations are atomic at the boundary: an operation that would violate
//! referential integrity is rejected wholesale and never commits partial
//! state. Failure modes are sentinel results, never errors.

use crate::primitives::MAX_RESOLVE_DEPTH;
use crate::store::IconSet;
use crate::types::{IconEntry, IconProps, ParsedGraphic};
use std::collections::BTreeSet;

/// Dependent-handling policy for [`IconSet::remove`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dependents {
    /// Recursively remove every transitive alias/variation dependent.
    /// All-or-nothing: a depth-bound hit anywhere aborts the whole removal.
    Cascade,

    /// Remove only the named entry, leaving dependents dangling.
    Detach,

    /// Re-parent the named entry's direct children to another entry, then
    /// remove only the named entry.
    Reparent(String),
}

impl IconSet {
    /// Insert or overwrite an entry.
    ///
    /// Aliases and variations are rejected (`false`, store untouched) when
    /// their parent is not currently present. Icons insert unconditionally.
    pub fn set_item(&mut self, name: impl Into<String>, entry: IconEntry) -> bool {
        if let Some(parent) = entry.parent() {
            if !self.entries.contains_key(parent) {
                return false;
            }
        }
        self.entries.insert(name.into(), entry);
        true
    }

    /// Insert or overwrite a concrete icon.
    pub fn set_icon(
        &mut self,
        name: impl Into<String>,
        body: impl Into<String>,
        props: IconProps,
    ) -> bool {
        self.set_item(name, IconEntry::icon(body, props))
    }

    /// Insert or overwrite a plain alias. Fails if `parent` is absent.
    pub fn set_alias(&mut self, name: impl Into<String>, parent: impl Into<String>) -> bool {
        self.set_item(name, IconEntry::alias(parent))
    }

    /// Insert or overwrite a variation. Fails if `parent` is absent.
    pub fn set_variation(
        &mut self,
        name: impl Into<String>,
        parent: impl Into<String>,
        props: IconProps,
    ) -> bool {
        self.set_item(name, IconEntry::variation(parent, props))
    }

    /// Build an icon entry from an externally-parsed vector graphic.
    ///
    /// The body and viewbox geometry come from the graphic. When an entry of
    /// the same name already exists as an icon or variation its character
    /// set is reused; its category set is reused only when the prior entry
    /// was itself an icon.
    pub fn from_graphic(&mut self, name: impl Into<String>, graphic: &ParsedGraphic) -> bool {
        let name = name.into();

        let (chars, categories) = match self.entries.get(&name) {
            Some(IconEntry::Icon {
                chars, categories, ..
            }) => (chars.clone(), categories.clone()),
            Some(IconEntry::Variation { chars, .. }) => (chars.clone(), BTreeSet::new()),
            _ => (BTreeSet::new(), BTreeSet::new()),
        };

        let props = IconProps {
            left: Some(graphic.left),
            top: Some(graphic.top),
            width: Some(graphic.width),
            height: Some(graphic.height),
            ..IconProps::new()
        };

        self.set_item(
            name,
            IconEntry::Icon {
                body: graphic.body.clone(),
                props,
                chars,
                categories,
            },
        )
    }

    /// Remove an entry, handling dependents per the given policy.
    ///
    /// Returns the number of entries actually deleted; 0 on any validation
    /// failure, including a depth-bound hit during a cascade (in which case
    /// nothing at all is removed).
    pub fn remove(&mut self, name: &str, dependents: Dependents) -> usize {
        if !self.entries.contains_key(name) {
            return 0;
        }

        match dependents {
            Dependents::Detach => {
                self.entries.remove(name);
                1
            }

            Dependents::Reparent(new_parent) => {
                if new_parent == name || !self.entries.contains_key(&new_parent) {
                    return 0;
                }
                // Direct children only; no recursion into grandchildren
                for entry in self.entries.values_mut() {
                    if let IconEntry::Alias { parent, .. } | IconEntry::Variation { parent, .. } =
                        entry
                    {
                        if parent.as_str() == name {
                            *parent = new_parent.clone();
                        }
                    }
                }
                self.entries.remove(name);
                1
            }

            Dependents::Cascade => {
                let mut doomed = BTreeSet::new();
                if !self.collect_dependents(name, 0, &mut doomed) {
                    return 0;
                }
                let count = doomed.len();
                for victim in &doomed {
                    self.entries.remove(victim);
                }
                count
            }
        }
    }

    /// Re-key an entry, keeping the reference graph intact.
    ///
    /// An occupied `new` name is cascade-removed first. The whole operation
    /// fails with no effect when `old` is absent, `old == new`, the occupant
    /// cascade would hit the depth bound, or that cascade would sweep away
    /// `old` itself. On success every parent pointer at `old` is rewritten
    /// to `new`.
    pub fn rename(&mut self, old: &str, new: &str) -> bool {
        if old == new || !self.entries.contains_key(old) {
            return false;
        }

        if self.entries.contains_key(new) {
            let mut doomed = BTreeSet::new();
            if !self.collect_dependents(new, 0, &mut doomed) || doomed.contains(old) {
                return false;
            }
            for victim in &doomed {
                self.entries.remove(victim);
            }
        }

        let Some(entry) = self.entries.remove(old) else {
            return false;
        };
        self.entries.insert(new.to_string(), entry);

        for entry in self.entries.values_mut() {
            if let IconEntry::Alias { parent, .. } | IconEntry::Variation { parent, .. } = entry {
                if parent.as_str() == old {
                    *parent = new.to_string();
                }
            }
        }
        true
    }

    /// Collect `name` and its transitive dependents into `doomed`.
    ///
    /// Carries an explicit depth and a visited set (cycle safety). Returns
    /// `false` as soon as the depth bound is exceeded so the caller can
    /// abort without touching the store.
    fn collect_dependents(
        &self,
        name: &str,
        depth: usize,
        doomed: &mut BTreeSet<String>,
    ) -> bool {
        if depth > MAX_RESOLVE_DEPTH {
            return false;
        }
        if !doomed.insert(name.to_string()) {
            return true;
        }

        let children: Vec<String> = self
            .entries
            .iter()
            .filter(|(child, entry)| {
                entry.parent() == Some(name) && !doomed.contains(child.as_str())
            })
            .map(|(child, _)| child.clone())
            .collect();

        for child in children {
            if !self.collect_dependents(&child, depth + 1, doomed) {
                return false;
            }
        }
        true
    }
}

// =============================================================================
// TESTS
// =============================================================================
