//! # Document Format
//!
//! Serde model of the external icon-set JSON representation, plus the two
//! document-level collaborators: the structural minifier and the info-block
//! normalizer.
//!
//! The document is a dumb shape: the Loader turns it into an [`crate::IconSet`]
//! and the Exporter projects one back. Unknown fields are tolerated on
//! input; empty collections and unset properties are omitted on output.

use crate::types::{GlyphsetError, IconProps};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

// =============================================================================
// RECORDS
// =============================================================================

/// One icon record: vector body plus optional properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRecord {
    /// Vector body markup.
    pub body: String,

    /// Optional properties, flattened into the record.
    #[serde(flatten)]
    pub props: IconProps,
}

/// One alias record: parent name plus optional property overrides.
///
/// A record with no overrides loads as a plain alias; overrides make it a
/// variation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRecord {
    /// Name of the parent entry.
    pub parent: String,

    /// Optional property overrides, flattened into the record.
    #[serde(flatten)]
    pub props: IconProps,
}

/// Legacy theme record: a display title plus a dash-delimited prefix or
/// suffix pattern. Superseded by the explicit `prefixes`/`suffixes` tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyTheme {
    /// Display title of the theme.
    pub title: String,

    /// Name prefix pattern, expected to end with `-`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Name suffix pattern, expected to start with `-`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

// =============================================================================
// DOCUMENT
// =============================================================================

/// The canonical external representation of an icon set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct IconSetDocument {
    /// Namespace identifier.
    pub prefix: String,

    /// Free-form metadata block; the icon total is maintained by export.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<Value>,

    /// Concrete icons by name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub icons: BTreeMap<String, IconRecord>,

    /// Aliases and variations by name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub aliases: BTreeMap<String, AliasRecord>,

    /// Character associations: single character -> entry name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub chars: BTreeMap<char, String>,

    /// Categories: display title -> member icon names.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub categories: BTreeMap<String, Vec<String>>,

    /// Legacy theme records; imported before the explicit tables.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub themes: BTreeMap<String, LegacyTheme>,

    /// Naming-theme prefix table: token -> display title.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub prefixes: BTreeMap<String, String>,

    /// Naming-theme suffix table: token -> display title.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub suffixes: BTreeMap<String, String>,

    /// Set-level default icon width, merged into icons at load time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Set-level default icon height, merged into icons at load time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl IconSetDocument {
    /// Parse a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, GlyphsetError> {
        let document: Self =
            serde_json::from_str(json).map_err(|e| GlyphsetError::Json(e.to_string()))?;
        if document.prefix.is_empty() {
            return Err(GlyphsetError::InvalidDocument(
                "missing or empty prefix".to_string(),
            ));
        }
        Ok(document)
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String, GlyphsetError> {
        serde_json::to_string(self).map_err(|e| GlyphsetError::Json(e.to_string()))
    }

    /// Serialize to human-readable JSON.
    pub fn to_json_pretty(&self) -> Result<String, GlyphsetError> {
        serde_json::to_string_pretty(self).map_err(|e| GlyphsetError::Json(e.to_string()))
    }
}

// =============================================================================
// DOCUMENT-LEVEL COLLABORATORS
// =============================================================================

/// Structural-minification pass: unsets every stored property holding its
/// canonical default value. Serde then omits the unset fields and the empty
/// collections, producing the compact canonical output.
pub fn minify(document: &mut IconSetDocument) {
    for record in document.icons.values_mut() {
        record.props.strip_defaults();
    }
    for record in document.aliases.values_mut() {
        record.props.strip_defaults();
    }
}

/// Info-block normalizer: clone the block and recompute its icon-total
/// field. Non-object blocks pass through unchanged.
#[must_use]
pub fn normalize_info(info: &Value, total: usize) -> Value {
    let mut normalized = info.clone();
    if let Value::Object(fields) = &mut normalized {
        fields.insert("total".to_string(), Value::from(total));
    }
    normalized
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rotation;

    const SAMPLE: &str = r#"{
        "prefix": "demo",
        "info": {"name": "Demo", "total": 0},
        "icons": {
            "home": {"body": "<path d='M0 0z'/>", "width": 24},
            "user": {"body": "<circle r='8'/>", "hFlip": true}
        },
        "aliases": {
            "house": {"parent": "home"},
            "home-rotated": {"parent": "home", "rotate": 2}
        },
        "chars": {"a": "home"},
        "categories": {"Navigation": ["home"]},
        "prefixes": {"mdi": "Material"}
    }"#;

    #[test]
    fn parses_full_document() {
        let document = IconSetDocument::from_json(SAMPLE).expect("parse");

        assert_eq!(document.prefix, "demo");
        assert_eq!(document.icons.len(), 2);
        assert_eq!(
            document.icons.get("home").and_then(|r| r.props.width),
            Some(24)
        );
        assert_eq!(
            document.icons.get("user").and_then(|r| r.props.h_flip),
            Some(true)
        );
        assert!(
            document
                .aliases
                .get("house")
                .is_some_and(|r| r.props.is_empty())
        );
        assert_eq!(
            document.aliases.get("home-rotated").and_then(|r| r.props.rotate),
            Some(Rotation::new(2))
        );
        assert_eq!(document.chars.get(&'a').map(String::as_str), Some("home"));
    }

    #[test]
    fn rejects_empty_prefix() {
        assert!(IconSetDocument::from_json(r#"{"prefix": ""}"#).is_err());
        assert!(IconSetDocument::from_json(r#"{"icons": {}}"#).is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            IconSetDocument::from_json("{not json"),
            Err(GlyphsetError::Json(_))
        ));
    }

    #[test]
    fn empty_collections_are_omitted_from_output() {
        let document = IconSetDocument {
            prefix: "demo".to_string(),
            ..IconSetDocument::default()
        };

        let json = document.to_json().expect("serialize");
        assert_eq!(json, r#"{"prefix":"demo"}"#);
    }

    #[test]
    fn minify_strips_default_valued_props() {
        let mut document = IconSetDocument::from_json(
            r#"{
                "prefix": "demo",
                "icons": {"home": {"body": "<g/>", "width": 16, "rotate": 0, "hFlip": false}},
                "aliases": {"big": {"parent": "home", "width": 24, "hidden": false}}
            }"#,
        )
        .expect("parse");

        minify(&mut document);

        let home = document.icons.get("home").expect("icon");
        assert!(home.props.is_empty());
        let big = document.aliases.get("big").expect("alias");
        assert_eq!(big.props.width, Some(24));
        assert_eq!(big.props.hidden, None);
    }

    #[test]
    fn normalize_info_recomputes_total() {
        let info = serde_json::json!({"name": "Demo", "total": 3});
        let normalized = normalize_info(&info, 42);

        assert_eq!(normalized.get("total"), Some(&Value::from(42)));
        assert_eq!(normalized.get("name"), Some(&Value::from("Demo")));
        // Original untouched
        assert_eq!(info.get("total"), Some(&Value::from(3)));
    }

    #[test]
    fn round_trips_through_json() {
        let document = IconSetDocument::from_json(SAMPLE).expect("parse");
        let json = document.to_json().expect("serialize");
        let reparsed = IconSetDocument::from_json(&json).expect("reparse");
        assert_eq!(document, reparsed);
    }
}
