//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.
//!
//! Commands load an icon-set document, run operations through the
//! glyphset-core engine, and print or write the result. All file handling
//! lives here; the core stays I/O-free.

use glyphset_core::{Dependents, EntryKind, GlyphsetError, IconSet, primitives::MAX_DOCUMENT_SIZE};
use serde_json::json;
use std::path::Path;

// =============================================================================
// FILE HELPERS
// =============================================================================

/// Validate file size before reading.
///
/// Prevents memory exhaustion from malicious or accidental large files.
fn validate_file_size(path: &Path) -> Result<(), GlyphsetError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| GlyphsetError::Io(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > MAX_DOCUMENT_SIZE {
        return Err(GlyphsetError::InvalidDocument(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            MAX_DOCUMENT_SIZE
        )));
    }
    Ok(())
}

/// Read and parse an icon-set document from disk.
fn load_set(path: &Path) -> Result<IconSet, GlyphsetError> {
    validate_file_size(path)?;
    let text = std::fs::read_to_string(path)
        .map_err(|e| GlyphsetError::Io(format!("Cannot read '{}': {}", path.display(), e)))?;
    let set = IconSet::from_json(&text)?;
    tracing::debug!(prefix = set.prefix(), entries = set.len(), "loaded icon set");
    Ok(set)
}

/// Write text to the output path, or stdout when none is given.
fn write_output(text: &str, output: Option<&Path>) -> Result<(), GlyphsetError> {
    match output {
        Some(path) => std::fs::write(path, text)
            .map_err(|e| GlyphsetError::Io(format!("Cannot write '{}': {}", path.display(), e))),
        None => {
            println!("{text}");
            Ok(())
        }
    }
}

/// Export the set and serialize it.
fn export_document(
    set: &mut IconSet,
    validate: bool,
    pretty: bool,
) -> Result<String, GlyphsetError> {
    let document = set.export(validate);
    if pretty {
        document.to_json_pretty()
    } else {
        document.to_json()
    }
}

// =============================================================================
// INFO COMMAND
// =============================================================================

/// Show a summary of the icon set.
pub fn cmd_info(file: &Path, json_mode: bool) -> Result<(), GlyphsetError> {
    let set = load_set(file)?;

    let mut icons = 0usize;
    let mut aliases = 0usize;
    let mut variations = 0usize;
    for (_, entry) in set.entries() {
        match entry.kind() {
            EntryKind::Icon => icons += 1,
            EntryKind::Alias => aliases += 1,
            EntryKind::Variation => variations += 1,
        }
    }

    let visible = set.count();
    let categories = set.categories().count();
    let prefixes = set.theme_table(true).len();
    let suffixes = set.theme_table(false).len();

    if json_mode {
        println!(
            "{}",
            json!({
                "prefix": set.prefix(),
                "icons": icons,
                "aliases": aliases,
                "variations": variations,
                "visible": visible,
                "categories": categories,
                "prefixes": prefixes,
                "suffixes": suffixes,
            })
        );
    } else {
        println!("Icon Set: {}", set.prefix());
        println!();
        println!("  Icons:      {}", icons);
        println!("  Aliases:    {}", aliases);
        println!("  Variations: {}", variations);
        println!("  Visible:    {}", visible);
        println!("  Categories: {}", categories);
        println!("  Themes:     {} prefixes, {} suffixes", prefixes, suffixes);
    }
    Ok(())
}

// =============================================================================
// VALIDATE COMMAND
// =============================================================================

/// Report aliases and variations that no longer resolve.
pub fn cmd_validate(file: &Path, json_mode: bool) -> Result<(), GlyphsetError> {
    let set = load_set(file)?;

    let dangling: Vec<&str> = set
        .entries()
        .filter(|(_, entry)| entry.kind() != EntryKind::Icon)
        .filter(|(name, _)| set.resolve(name, false).is_none())
        .map(|(name, _)| name)
        .collect();

    if json_mode {
        println!("{}", json!({ "ok": dangling.is_empty(), "dangling": dangling }));
    } else if dangling.is_empty() {
        println!("OK: all {} entries resolve", set.len());
    } else {
        println!("{} entries do not resolve:", dangling.len());
        for name in &dangling {
            println!("  {}", name);
        }
    }
    Ok(())
}

// =============================================================================
// EXPORT COMMAND
// =============================================================================

/// Export the canonical document.
pub fn cmd_export(
    file: &Path,
    output: Option<&Path>,
    pretty: bool,
    keep_dangling: bool,
) -> Result<(), GlyphsetError> {
    let mut set = load_set(file)?;
    let text = export_document(&mut set, !keep_dangling, pretty)?;
    write_output(&text, output)
}

// =============================================================================
// THEMES COMMAND
// =============================================================================

/// Show the naming-theme buckets for the chosen table.
pub fn cmd_themes(file: &Path, is_prefix: bool, json_mode: bool) -> Result<(), GlyphsetError> {
    let set = load_set(file)?;
    let result = set.check_theme(is_prefix);

    if json_mode {
        println!(
            "{}",
            json!({ "matches": result.matches, "invalid": result.invalid })
        );
        return Ok(());
    }

    for (key, names) in &result.matches {
        let title = set
            .theme_table(is_prefix)
            .get(key)
            .map_or("?", String::as_str);
        let label = if key.is_empty() { "(catch-all)" } else { key };
        println!("{} [{}]: {} icons", label, title, names.len());
        for name in names {
            println!("  {}", name);
        }
    }
    if !result.invalid.is_empty() {
        println!("unthemed: {} icons", result.invalid.len());
        for name in &result.invalid {
            println!("  {}", name);
        }
    }
    Ok(())
}

// =============================================================================
// CATEGORIES COMMAND
// =============================================================================

/// List categories with their recomputed members.
pub fn cmd_categories(file: &Path, json_mode: bool) -> Result<(), GlyphsetError> {
    let mut set = load_set(file)?;

    let ids: Vec<_> = set.categories().map(|category| category.id).collect();
    let mut listing: Vec<(String, Vec<String>)> = Vec::new();
    for id in ids {
        let Some(title) = set.category(id).map(|c| c.title.clone()) else {
            continue;
        };
        if let Some(members) = set.list_category(id) {
            listing.push((title, members));
        }
    }

    if json_mode {
        let map: serde_json::Map<String, serde_json::Value> = listing
            .into_iter()
            .map(|(title, members)| (title, serde_json::Value::from(members)))
            .collect();
        println!("{}", serde_json::Value::Object(map));
    } else if listing.is_empty() {
        println!("No categories with members");
    } else {
        for (title, members) in &listing {
            println!("{}: {} icons", title, members.len());
            for name in members {
                println!("  {}", name);
            }
        }
    }
    Ok(())
}

// =============================================================================
// CHARS COMMAND
// =============================================================================

/// Show the character map.
pub fn cmd_chars(file: &Path, json_mode: bool) -> Result<(), GlyphsetError> {
    let set = load_set(file)?;
    let map = set.character_map(None);

    if json_mode {
        println!("{}", json!(map));
    } else if map.is_empty() {
        println!("No character associations");
    } else {
        for (ch, name) in &map {
            println!("  {} (U+{:04X}) -> {}", ch, *ch as u32, name);
        }
    }
    Ok(())
}

// =============================================================================
// MUTATION COMMANDS
// =============================================================================

/// Remove an entry and rewrite the document.
pub fn cmd_remove(
    file: &Path,
    output: Option<&Path>,
    name: &str,
    dependents: Dependents,
    pretty: bool,
) -> Result<(), GlyphsetError> {
    let mut set = load_set(file)?;

    let removed = set.remove(name, dependents);
    if removed == 0 {
        return Err(GlyphsetError::Rejected(format!(
            "nothing removed for '{}'",
            name
        )));
    }
    tracing::info!(name, removed, "removed entries");

    let text = export_document(&mut set, false, pretty)?;
    write_output(&text, output)
}

/// Rename an entry and rewrite the document.
pub fn cmd_rename(
    file: &Path,
    output: Option<&Path>,
    old: &str,
    new: &str,
    pretty: bool,
) -> Result<(), GlyphsetError> {
    let mut set = load_set(file)?;

    if !set.rename(old, new) {
        return Err(GlyphsetError::Rejected(format!(
            "cannot rename '{}' to '{}'",
            old, new
        )));
    }
    tracing::info!(old, new, "renamed entry");

    let text = export_document(&mut set, false, pretty)?;
    write_output(&text, output)
}
