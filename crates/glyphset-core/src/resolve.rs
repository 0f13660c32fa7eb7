//! # Alias Resolver
//!
//! Walks an entry's reference chain to a concrete icon definition, merging
//! variation overrides along the way.
//!
//! The walk carries an explicit integer depth bounded by
//! [`MAX_RESOLVE_DEPTH`]; the host call stack is never the safety bound.
//! A cycle and an overlong chain both yield the same "not found" result.

use crate::primitives::MAX_RESOLVE_DEPTH;
use crate::store::IconSet;
use crate::types::{IconEntry, ResolvedIcon};

impl IconSet {
    /// Resolve a name to its concrete, parent-merged icon definition.
    ///
    /// Returns `None` for unknown names, cycles, and chains longer than
    /// [`MAX_RESOLVE_DEPTH`] hops. When `full` is requested, unset standard
    /// properties are filled with their canonical defaults on the final
    /// result.
    #[must_use]
    pub fn resolve(&self, name: &str, full: bool) -> Option<ResolvedIcon> {
        let mut resolved = self.resolve_at(name, 0)?;
        if full {
            resolved.props.fill_defaults();
        }
        Some(resolved)
    }

    /// Recursive walk with an explicit depth parameter.
    fn resolve_at(&self, name: &str, depth: usize) -> Option<ResolvedIcon> {
        if depth > MAX_RESOLVE_DEPTH {
            return None;
        }

        match self.entry(name)? {
            IconEntry::Icon { body, props, .. } => Some(ResolvedIcon {
                body: body.clone(),
                props: props.clone(),
            }),
            IconEntry::Alias { parent, .. } => self.resolve_at(parent, depth + 1),
            IconEntry::Variation { parent, props, .. } => {
                let mut resolved = self.resolve_at(parent, depth + 1)?;
                props.apply_to(&mut resolved.props);
                Some(resolved)
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
