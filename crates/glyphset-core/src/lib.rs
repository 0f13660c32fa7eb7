//! # glyphset-core
//!
//! The deterministic icon-set repository for Glyphset - THE LOGIC.
//!
//! This crate implements an in-memory store of vector-icon entries - base
//! icons, plain aliases, and parameterized variations - identified by name,
//! with derived indices for categories, character mappings, and naming
//! themes, plus a canonical JSON load/export cycle.
//!
//! ## The entry graph
//!
//! Aliases and variations reference parents by name, forming bounded-depth
//! chains resolved into concrete icons. Every mutation (remove, rename,
//! toggle) preserves referential integrity of that chain; callers never
//! reason about cascades.
//!
//! ## Architectural Constraints
//!
//! - Pure Rust: no async, no network, no file I/O
//! - Deterministic: `BTreeMap`/`BTreeSet` only, integer arithmetic only
//! - Single logical owner: no internal synchronization; the caller
//!   serializes access
//! - Sentinel failures: "not found" is `None`, "rejected" is `false`,
//!   "nothing removed" is `0`; the store never panics and never throws

// =============================================================================
// MODULES
// =============================================================================

pub mod category;
pub mod chars;
pub mod export;
pub mod formats;
pub mod load;
pub mod mutate;
pub mod primitives;
pub mod resolve;
pub mod store;
pub mod theme;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    Category, CategoryId, EntryKind, GlyphsetError, IconEntry, IconProps, ParsedGraphic,
    ResolvedIcon, Rotation,
};

// =============================================================================
// RE-EXPORTS: Store & Operations
// =============================================================================

pub use category::CategoryRef;
pub use mutate::Dependents;
pub use store::IconSet;
pub use theme::ThemeMatches;

// =============================================================================
// RE-EXPORTS: Document Format
// =============================================================================

pub use formats::{minify, normalize_info, AliasRecord, IconRecord, IconSetDocument, LegacyTheme};
