//! # Core Type Definitions
//!
//! This module contains all core types for the Glyphset icon repository:
//! - Property bag and rotation arithmetic (`IconProps`, `Rotation`)
//! - The entry union (`IconEntry`, `EntryKind`)
//! - Category identifiers and records (`CategoryId`, `Category`)
//! - Resolution output (`ResolvedIcon`)
//! - The vector-graphic parser seam (`ParsedGraphic`)
//! - Error types (`GlyphsetError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer arithmetic only (no floating-point)
//! - Implement `Ord` where used as `BTreeMap`/`BTreeSet` keys
//! - Never panic; fallible paths return sentinel results

use crate::primitives::{
    DEFAULT_HEIGHT, DEFAULT_LEFT, DEFAULT_TOP, DEFAULT_WIDTH, ROTATION_STEPS,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

// =============================================================================
// ROTATION
// =============================================================================

/// Icon rotation in quarter turns, always normalized to `0..4`.
///
/// Stacking two rotations sums the quarter turns and wraps modulo 4.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(from = "u8", into = "u8")]
pub struct Rotation(u8);

impl Rotation {
    /// Create a rotation, wrapping the raw quarter-turn count modulo 4.
    #[must_use]
    pub const fn new(quarter_turns: u8) -> Self {
        Self(quarter_turns % ROTATION_STEPS)
    }

    /// Combine with another rotation: quarter turns sum and wrap modulo 4.
    #[must_use]
    pub const fn combined(self, other: Self) -> Self {
        Self((self.0 + other.0) % ROTATION_STEPS)
    }

    /// Get the normalized quarter-turn count (`0..4`).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for Rotation {
    fn from(raw: u8) -> Self {
        Self::new(raw)
    }
}

impl From<Rotation> for u8 {
    fn from(rotation: Rotation) -> Self {
        rotation.value()
    }
}

// =============================================================================
// ICON PROPERTIES
// =============================================================================

/// The optional property bag carried by icons and variation overrides.
///
/// A `None` field means "not stored"; the canonical default applies when the
/// resolved chain never supplies a value. Field spelling follows the external
/// document format (`hFlip`/`vFlip`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct IconProps {
    /// Horizontal viewbox offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<i32>,

    /// Vertical viewbox offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<i32>,

    /// Viewbox width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Viewbox height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Rotation in quarter turns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<Rotation>,

    /// Horizontal flip flag.
    #[serde(default, rename = "hFlip", skip_serializing_if = "Option::is_none")]
    pub h_flip: Option<bool>,

    /// Vertical flip flag.
    #[serde(default, rename = "vFlip", skip_serializing_if = "Option::is_none")]
    pub v_flip: Option<bool>,

    /// Hidden flag; hidden icons are excluded from counts, themes and
    /// category listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

impl IconProps {
    /// Create an empty property bag (all fields unset).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether every field is unset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.left.is_none()
            && self.top.is_none()
            && self.width.is_none()
            && self.height.is_none()
            && self.rotate.is_none()
            && self.h_flip.is_none()
            && self.v_flip.is_none()
            && self.hidden.is_none()
    }

    /// Whether the hidden flag is set.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden.unwrap_or(false)
    }

    /// Fill unset fields from `defaults`, keeping own values where present.
    ///
    /// This is the set-level default-dimension merge performed at load time.
    #[must_use]
    pub fn with_defaults(&self, defaults: &Self) -> Self {
        Self {
            left: self.left.or(defaults.left),
            top: self.top.or(defaults.top),
            width: self.width.or(defaults.width),
            height: self.height.or(defaults.height),
            rotate: self.rotate.or(defaults.rotate),
            h_flip: self.h_flip.or(defaults.h_flip),
            v_flip: self.v_flip.or(defaults.v_flip),
            hidden: self.hidden.or(defaults.hidden),
        }
    }

    /// Merge these override properties onto a resolved parent.
    ///
    /// Key-specific rules: rotations sum and wrap modulo 4, flip flags
    /// toggle, every other present field overwrites. Fields absent on the
    /// override leave the parent untouched.
    pub fn apply_to(&self, base: &mut Self) {
        if self.left.is_some() {
            base.left = self.left;
        }
        if self.top.is_some() {
            base.top = self.top;
        }
        if self.width.is_some() {
            base.width = self.width;
        }
        if self.height.is_some() {
            base.height = self.height;
        }
        if let Some(rotate) = self.rotate {
            base.rotate = Some(match base.rotate {
                Some(parent) => parent.combined(rotate),
                None => rotate,
            });
        }
        if let Some(flip) = self.h_flip {
            base.h_flip = Some(match base.h_flip {
                Some(parent) => parent ^ flip,
                None => flip,
            });
        }
        if let Some(flip) = self.v_flip {
            base.v_flip = Some(match base.v_flip {
                Some(parent) => parent ^ flip,
                None => flip,
            });
        }
        if self.hidden.is_some() {
            base.hidden = self.hidden;
        }
    }

    /// Fill every unset field with its canonical default.
    pub fn fill_defaults(&mut self) {
        self.left.get_or_insert(DEFAULT_LEFT);
        self.top.get_or_insert(DEFAULT_TOP);
        self.width.get_or_insert(DEFAULT_WIDTH);
        self.height.get_or_insert(DEFAULT_HEIGHT);
        self.rotate.get_or_insert(Rotation::default());
        self.h_flip.get_or_insert(false);
        self.v_flip.get_or_insert(false);
        self.hidden.get_or_insert(false);
    }

    /// Unset every field holding its canonical default value.
    ///
    /// This is the structural-minification rule applied during export.
    pub fn strip_defaults(&mut self) {
        if self.left == Some(DEFAULT_LEFT) {
            self.left = None;
        }
        if self.top == Some(DEFAULT_TOP) {
            self.top = None;
        }
        if self.width == Some(DEFAULT_WIDTH) {
            self.width = None;
        }
        if self.height == Some(DEFAULT_HEIGHT) {
            self.height = None;
        }
        if self.rotate == Some(Rotation::default()) {
            self.rotate = None;
        }
        if self.h_flip == Some(false) {
            self.h_flip = None;
        }
        if self.v_flip == Some(false) {
            self.v_flip = None;
        }
        if self.hidden == Some(false) {
            self.hidden = None;
        }
    }
}

// =============================================================================
// ENTRY UNION
// =============================================================================

/// Kind selector for [`IconEntry`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryKind {
    /// Concrete icon with its own body.
    Icon,
    /// Plain reference to a parent entry, no own properties.
    Alias,
    /// Reference to a parent entry with partial property overrides.
    Variation,
}

/// One named record in the icon repository.
///
/// Aliases and variations form a reference chain bounded at resolution time;
/// the `parent` field is validated against the store when inserted through
/// the mutation API, not continuously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconEntry {
    /// Concrete icon definition.
    Icon {
        /// Vector body, owned by the external graphic collaborator.
        body: String,
        /// Stored properties; unset fields fall back to canonical defaults.
        props: IconProps,
        /// Characters associated with this entry.
        chars: BTreeSet<char>,
        /// Category memberships, by owned category id.
        categories: BTreeSet<CategoryId>,
    },

    /// Plain alias, fully inheriting the parent's resolved form.
    Alias {
        /// Name of the parent entry.
        parent: String,
        /// Characters associated with this entry.
        chars: BTreeSet<char>,
    },

    /// Variation carrying partial overrides on top of the resolved parent.
    Variation {
        /// Name of the parent entry.
        parent: String,
        /// Override properties merged onto the parent during resolution.
        props: IconProps,
        /// Characters associated with this entry.
        chars: BTreeSet<char>,
    },
}

impl IconEntry {
    /// Build a concrete icon entry with empty character/category sets.
    #[must_use]
    pub fn icon(body: impl Into<String>, props: IconProps) -> Self {
        Self::Icon {
            body: body.into(),
            props,
            chars: BTreeSet::new(),
            categories: BTreeSet::new(),
        }
    }

    /// Build a plain alias entry.
    #[must_use]
    pub fn alias(parent: impl Into<String>) -> Self {
        Self::Alias {
            parent: parent.into(),
            chars: BTreeSet::new(),
        }
    }

    /// Build a variation entry.
    #[must_use]
    pub fn variation(parent: impl Into<String>, props: IconProps) -> Self {
        Self::Variation {
            parent: parent.into(),
            props,
            chars: BTreeSet::new(),
        }
    }

    /// The kind of this entry.
    #[must_use]
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Icon { .. } => EntryKind::Icon,
            Self::Alias { .. } => EntryKind::Alias,
            Self::Variation { .. } => EntryKind::Variation,
        }
    }

    /// Parent name for aliases and variations, `None` for icons.
    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        match self {
            Self::Icon { .. } => None,
            Self::Alias { parent, .. } | Self::Variation { parent, .. } => Some(parent),
        }
    }

    /// Stored properties: own bag for icons, override bag for variations.
    #[must_use]
    pub fn props(&self) -> Option<&IconProps> {
        match self {
            Self::Icon { props, .. } | Self::Variation { props, .. } => Some(props),
            Self::Alias { .. } => None,
        }
    }

    /// Characters associated with this entry.
    #[must_use]
    pub fn chars(&self) -> &BTreeSet<char> {
        match self {
            Self::Icon { chars, .. }
            | Self::Alias { chars, .. }
            | Self::Variation { chars, .. } => chars,
        }
    }

    /// Mutable access to the character set.
    pub fn chars_mut(&mut self) -> &mut BTreeSet<char> {
        match self {
            Self::Icon { chars, .. }
            | Self::Alias { chars, .. }
            | Self::Variation { chars, .. } => chars,
        }
    }

    /// Whether the stored properties carry the hidden flag.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.props().is_some_and(IconProps::is_hidden)
    }
}

// =============================================================================
// CATEGORIES
// =============================================================================

/// Owned identifier for a category record.
///
/// Icons hold these ids in their membership sets; lookups by title go
/// through the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub u64);

/// A category record: display title plus a cached member count.
///
/// The count is recomputed on demand and never trusted as ground truth
/// between recomputations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// The owned identifier of this record.
    pub id: CategoryId,
    /// Display title; two records may coincidentally share one.
    pub title: String,
    /// Cached member count from the last recomputation.
    pub count: usize,
}

impl Category {
    /// Create a zero-count category record.
    #[must_use]
    pub fn new(id: CategoryId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            count: 0,
        }
    }
}

// =============================================================================
// RESOLUTION OUTPUT
// =============================================================================

/// The concrete, parent-merged icon definition produced by resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIcon {
    /// Vector body of the concrete icon at the end of the chain.
    pub body: String,
    /// Merged properties; canonical defaults filled only on `full` requests.
    pub props: IconProps,
}

// =============================================================================
// GRAPHIC PARSER SEAM
// =============================================================================

/// Output of the external vector-graphic parser collaborator.
///
/// Carries the body plus viewbox-derived geometry; `from_graphic` turns it
/// into an icon entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedGraphic {
    /// Vector body markup.
    pub body: String,
    /// Viewbox horizontal offset.
    pub left: i32,
    /// Viewbox vertical offset.
    pub top: i32,
    /// Viewbox width.
    pub width: u32,
    /// Viewbox height.
    pub height: u32,
}

impl ParsedGraphic {
    /// Create a parsed graphic with a zero-origin viewbox.
    #[must_use]
    pub fn new(body: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            body: body.into(),
            left: 0,
            top: 0,
            width,
            height,
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors surfaced at the document boundary and by tooling.
///
/// The store algebra itself never produces these: in-store failure modes are
/// sentinel results (`Option`, `bool`, zero counts).
#[derive(Debug, Error)]
pub enum GlyphsetError {
    /// A JSON (de)serialization error occurred.
    #[error("JSON error: {0}")]
    Json(String),

    /// The document is structurally unusable (e.g. empty prefix).
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// An I/O error occurred (app layer only).
    #[error("I/O error: {0}")]
    Io(String),

    /// A sentinel rejection surfaced as an error by tooling (app layer
    /// only; the store itself reports rejections as sentinel results).
    #[error("Operation rejected: {0}")]
    Rejected(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_modulo_four() {
        assert_eq!(Rotation::new(5).value(), 1);
        assert_eq!(Rotation::new(4).value(), 0);
        assert_eq!(Rotation::new(3).combined(Rotation::new(2)).value(), 1);
    }

    #[test]
    fn props_empty_detection() {
        let props = IconProps::new();
        assert!(props.is_empty());

        let props = IconProps {
            rotate: Some(Rotation::new(1)),
            ..IconProps::new()
        };
        assert!(!props.is_empty());
    }

    #[test]
    fn apply_to_sums_rotation() {
        let mut base = IconProps {
            rotate: Some(Rotation::new(3)),
            ..IconProps::new()
        };
        let over = IconProps {
            rotate: Some(Rotation::new(2)),
            ..IconProps::new()
        };

        over.apply_to(&mut base);
        assert_eq!(base.rotate, Some(Rotation::new(1)));
    }

    #[test]
    fn apply_to_toggles_flips() {
        let mut base = IconProps {
            h_flip: Some(true),
            ..IconProps::new()
        };
        let over = IconProps {
            h_flip: Some(true),
            v_flip: Some(true),
            ..IconProps::new()
        };

        over.apply_to(&mut base);
        assert_eq!(base.h_flip, Some(false));
        // Parent lacked vFlip, override copied verbatim
        assert_eq!(base.v_flip, Some(true));
    }

    #[test]
    fn apply_to_overwrites_dimensions() {
        let mut base = IconProps {
            width: Some(16),
            height: Some(16),
            ..IconProps::new()
        };
        let over = IconProps {
            width: Some(24),
            ..IconProps::new()
        };

        over.apply_to(&mut base);
        assert_eq!(base.width, Some(24));
        assert_eq!(base.height, Some(16));
    }

    #[test]
    fn fill_then_strip_is_empty() {
        let mut props = IconProps::new();
        props.fill_defaults();
        assert_eq!(props.width, Some(16));
        assert_eq!(props.rotate, Some(Rotation::default()));

        props.strip_defaults();
        assert!(props.is_empty());
    }

    #[test]
    fn strip_keeps_non_defaults() {
        let mut props = IconProps {
            width: Some(24),
            rotate: Some(Rotation::new(2)),
            hidden: Some(true),
            h_flip: Some(false),
            ..IconProps::new()
        };
        props.strip_defaults();

        assert_eq!(props.width, Some(24));
        assert_eq!(props.rotate, Some(Rotation::new(2)));
        assert_eq!(props.hidden, Some(true));
        assert_eq!(props.h_flip, None);
    }

    #[test]
    fn props_serde_uses_document_spelling() {
        let props = IconProps {
            h_flip: Some(true),
            width: Some(24),
            ..IconProps::new()
        };

        let json = serde_json::to_string(&props).expect("serialize");
        assert!(json.contains("\"hFlip\":true"));
        assert!(json.contains("\"width\":24"));
        assert!(!json.contains("vFlip"));
    }

    #[test]
    fn entry_kind_and_parent() {
        let icon = IconEntry::icon("<g/>", IconProps::new());
        assert_eq!(icon.kind(), EntryKind::Icon);
        assert_eq!(icon.parent(), None);

        let alias = IconEntry::alias("home");
        assert_eq!(alias.kind(), EntryKind::Alias);
        assert_eq!(alias.parent(), Some("home"));

        let variation = IconEntry::variation("home", IconProps::new());
        assert_eq!(variation.kind(), EntryKind::Variation);
        assert_eq!(variation.parent(), Some("home"));
    }

    #[test]
    fn hidden_checks_stored_props_only() {
        let hidden = IconEntry::icon(
            "<g/>",
            IconProps {
                hidden: Some(true),
                ..IconProps::new()
            },
        );
        assert!(hidden.is_hidden());
        assert!(!IconEntry::alias("home").is_hidden());
    }
}
