//! # Loader
//!
//! Converts the external JSON representation into the Entry Store. The
//! store is built once, wholesale; ignorable input (unknown character
//! targets, category members that are not icons, malformed legacy themes)
//! is skipped silently rather than rejected.

use crate::formats::IconSetDocument;
use crate::store::IconSet;
use crate::types::{GlyphsetError, IconEntry, IconProps};

impl IconSet {
    /// Build an icon set from an external document.
    pub fn load(document: IconSetDocument) -> Self {
        let mut set = Self::new(document.prefix);
        set.set_info(document.info);

        // Set-level default dimensions, merged under each icon's own values
        let defaults = IconProps {
            width: document.width,
            height: document.height,
            ..IconProps::new()
        };

        for (name, record) in document.icons {
            let props = record.props.with_defaults(&defaults);
            set.entries.insert(name, IconEntry::icon(record.body, props));
        }

        for (name, record) in document.aliases {
            // Icon wins over an alias of the same name
            if set.entries.contains_key(&name) {
                continue;
            }
            let entry = if record.props.is_empty() {
                IconEntry::alias(record.parent)
            } else {
                IconEntry::variation(record.parent, record.props)
            };
            set.entries.insert(name, entry);
        }

        for (ch, name) in document.chars {
            if let Some(entry) = set.entries.get_mut(&name) {
                entry.chars_mut().insert(ch);
            }
        }

        for (title, members) in document.categories {
            let id = set.register_category(&title);
            for member in members {
                if let Some(IconEntry::Icon { categories, .. }) = set.entries.get_mut(&member) {
                    categories.insert(id);
                }
            }
        }

        // Legacy themes first, explicit tables overwrite
        for theme in document.themes.into_values() {
            if let Some(stripped) = theme.prefix.as_deref().and_then(|p| p.strip_suffix('-')) {
                set.prefixes.insert(stripped.to_string(), theme.title.clone());
            }
            if let Some(stripped) = theme.suffix.as_deref().and_then(|s| s.strip_prefix('-')) {
                set.suffixes.insert(stripped.to_string(), theme.title);
            }
        }
        set.prefixes.extend(document.prefixes);
        set.suffixes.extend(document.suffixes);

        set
    }

    /// Parse JSON text and build an icon set from it.
    pub fn from_json(json: &str) -> Result<Self, GlyphsetError> {
        Ok(Self::load(IconSetDocument::from_json(json)?))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EntryKind, Rotation};

    fn load_sample() -> IconSet {
        IconSet::from_json(
            r#"{
                "prefix": "demo",
                "info": {"name": "Demo"},
                "width": 24,
                "height": 24,
                "icons": {
                    "home": {"body": "<path d='M0 0z'/>"},
                    "user": {"body": "<circle r='8'/>", "width": 32}
                },
                "aliases": {
                    "house": {"parent": "home"},
                    "home-r2": {"parent": "home", "rotate": 2},
                    "user": {"parent": "home"}
                },
                "chars": {"a": "home", "b": "missing"},
                "categories": {
                    "Navigation": ["home", "house", "missing"],
                    "Empty": []
                },
                "themes": {
                    "light": {"title": "Light", "prefix": "light-"},
                    "solid": {"title": "Solid", "suffix": "-solid"},
                    "broken": {"title": "Broken", "prefix": "no-dash"}
                },
                "prefixes": {"light": "Light Override"}
            }"#,
        )
        .expect("load")
    }

    #[test]
    fn icons_merge_set_level_dimensions() {
        let set = load_sample();

        let home = set.resolve("home", false).expect("resolve");
        assert_eq!(home.props.width, Some(24));
        assert_eq!(home.props.height, Some(24));

        // The icon's own width wins over the set default
        let user = set.resolve("user", false).expect("resolve");
        assert_eq!(user.props.width, Some(32));
        assert_eq!(user.props.height, Some(24));
    }

    #[test]
    fn alias_records_split_on_override_presence() {
        let set = load_sample();

        assert_eq!(set.entry("house").map(IconEntry::kind), Some(EntryKind::Alias));
        assert_eq!(
            set.entry("home-r2").map(IconEntry::kind),
            Some(EntryKind::Variation)
        );
        let resolved = set.resolve("home-r2", true).expect("resolve");
        assert_eq!(resolved.props.rotate, Some(Rotation::new(2)));
    }

    #[test]
    fn icon_wins_over_alias_of_same_name() {
        let set = load_sample();
        assert_eq!(set.entry("user").map(IconEntry::kind), Some(EntryKind::Icon));
    }

    #[test]
    fn chars_attach_only_to_present_entries() {
        let set = load_sample();

        let map = set.character_map(None);
        assert_eq!(map.get(&'a').map(String::as_str), Some("home"));
        assert_eq!(map.get(&'b'), None);
    }

    #[test]
    fn categories_register_and_attach_to_icons_only() {
        let mut set = load_sample();

        // Both declared categories registered, even the empty one
        assert!(set.find_category("Navigation", false).is_some());
        assert!(set.find_category("Empty", false).is_some());

        let members = set.list_category("Navigation").expect("members");
        assert_eq!(members, vec!["home".to_string()]);
    }

    #[test]
    fn legacy_themes_import_with_explicit_overwrite() {
        let set = load_sample();

        // Legacy "light-" imported but overwritten by the explicit table
        assert_eq!(
            set.theme_table(true).get("light").map(String::as_str),
            Some("Light Override")
        );
        assert_eq!(
            set.theme_table(false).get("solid").map(String::as_str),
            Some("Solid")
        );
        // Prefix without trailing dash is ignored
        assert!(!set.theme_table(true).contains_key("no-dash"));
        assert!(!set.theme_table(true).contains_key("broken"));
    }

    #[test]
    fn info_block_is_kept() {
        let set = load_sample();
        assert_eq!(
            set.info().and_then(|info| info.get("name")),
            Some(&serde_json::Value::from("Demo"))
        );
    }
}
