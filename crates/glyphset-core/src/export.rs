//! # Exporter
//!
//! Projects the Entry Store (via the Resolver, Category Index, Character
//! Map and Theme Matcher) back into the canonical external document.
//!
//! Export is a mutating read: category recomputation updates stored counts
//! and prunes categories that no longer have visible members.

use crate::formats::{minify, normalize_info, AliasRecord, IconRecord, IconSetDocument};
use crate::store::IconSet;
use crate::types::{CategoryId, IconEntry, IconProps};

impl IconSet {
    /// Produce the canonical external document for this set.
    ///
    /// Icons are emitted in lexicographic name order. With `validate`,
    /// aliases and variations that no longer resolve are silently dropped;
    /// without it they are emitted as stored. The character map covers only
    /// names present in the output, categories are recomputed (empty ones
    /// omitted and pruned), theme keys are emitted only when their bucket
    /// is non-empty, and the info block's total is recomputed. A final
    /// structural-minification pass strips default-valued properties.
    pub fn export(&mut self, validate: bool) -> IconSetDocument {
        let mut document = IconSetDocument {
            prefix: self.prefix().to_string(),
            ..IconSetDocument::default()
        };

        let mut included: Vec<String> = Vec::new();

        for (name, entry) in &self.entries {
            if let IconEntry::Icon { body, props, .. } = entry {
                document.icons.insert(
                    name.clone(),
                    IconRecord {
                        body: body.clone(),
                        props: props.clone(),
                    },
                );
                included.push(name.clone());
            }
        }

        for (name, entry) in &self.entries {
            let record = match entry {
                IconEntry::Icon { .. } => continue,
                IconEntry::Alias { parent, .. } => AliasRecord {
                    parent: parent.clone(),
                    props: IconProps::new(),
                },
                IconEntry::Variation { parent, props, .. } => AliasRecord {
                    parent: parent.clone(),
                    props: props.clone(),
                },
            };
            if validate && self.resolve(name, false).is_none() {
                continue;
            }
            document.aliases.insert(name.clone(), record);
            included.push(name.clone());
        }

        document.chars = self.character_map(Some(&included));

        // Recompute every category; empty ones prune themselves. Records
        // sharing a title merge under one document key.
        let ids: Vec<CategoryId> = self.categories.keys().copied().collect();
        for id in ids {
            let Some(title) = self.category(id).map(|c| c.title.clone()) else {
                continue;
            };
            if let Some(members) = self.list_category(id) {
                let bucket = document.categories.entry(title).or_default();
                bucket.extend(members);
                bucket.sort();
                bucket.dedup();
            }
        }

        for is_prefix in [true, false] {
            let checked = self.check_theme(is_prefix);
            let table = self.theme_table(is_prefix);
            let target = if is_prefix {
                &mut document.prefixes
            } else {
                &mut document.suffixes
            };
            for (key, bucket) in checked.matches {
                if bucket.is_empty() {
                    continue;
                }
                if let Some(title) = table.get(&key) {
                    target.insert(key, title.clone());
                }
            }
        }

        if let Some(info) = self.info() {
            document.info = Some(normalize_info(info, self.count()));
        }

        minify(&mut document);
        document
    }
}

// =============================================================================
// TESTS
// =============================================================================
