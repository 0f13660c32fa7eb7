//! # Theme Matcher
//!
//! Classifies icon names against the configured naming prefixes/suffixes.
//!
//! Keys are tested longest-first (ties lexicographic) so a two-part prefix
//! wins over a one-part prefix that would also match, and the empty-string
//! catch-all naturally lands last.

use crate::store::IconSet;
use std::collections::BTreeMap;

/// Result of a theme check: per-key buckets of icon names plus the list of
/// names matching no key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThemeMatches {
    /// Every configured key mapped to its matched icon names (possibly
    /// empty).
    pub matches: BTreeMap<String, Vec<String>>,
    /// Visible icons matching no configured key.
    pub invalid: Vec<String>,
}

impl IconSet {
    /// Bucket every visible icon name under the chosen theme table.
    ///
    /// Prefix mode tests `key + "-"` at the start of the name, suffix mode
    /// `"-" + key` at the end; an empty key always matches. Eligible entries
    /// must resolve successfully, must not be aliases, and must not be
    /// hidden in their stored or resolved form.
    #[must_use]
    pub fn check_theme(&self, is_prefix: bool) -> ThemeMatches {
        let table = self.theme_table(is_prefix);

        let mut keys: Vec<&str> = table.keys().map(String::as_str).collect();
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let mut result = ThemeMatches::default();
        for key in &keys {
            result.matches.insert((*key).to_string(), Vec::new());
        }

        for (name, entry) in &self.entries {
            if !self.is_visible(name, entry) {
                continue;
            }

            let matched = keys.iter().find(|key| {
                if key.is_empty() {
                    return true;
                }
                if is_prefix {
                    name.starts_with(&format!("{key}-"))
                } else {
                    name.ends_with(&format!("-{key}"))
                }
            });

            match matched {
                Some(key) => {
                    if let Some(bucket) = result.matches.get_mut(*key) {
                        bucket.push(name.clone());
                    }
                }
                None => result.invalid.push(name.clone()),
            }
        }

        result
    }
}

// =============================================================================
// TESTS
// =============================================================================
