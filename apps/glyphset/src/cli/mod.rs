//! # Glyphset CLI Module
//!
//! This module implements the CLI interface for Glyphset.
//!
//! ## Available Commands
//!
//! - `info` - Show icon-set summary
//! - `validate` - Check referential integrity of aliases/variations
//! - `export` - Export the canonical document
//! - `themes` - Show naming-theme buckets
//! - `categories` - List categories with their members
//! - `chars` - Show the character map
//! - `remove` - Remove an entry and rewrite the document
//! - `rename` - Rename an entry and rewrite the document

mod commands;

use clap::{Parser, Subcommand};
use glyphset_core::{Dependents, GlyphsetError};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Glyphset - Icon-Set Tool
///
/// A deterministic in-memory icon repository: aliases, variations, bounded
/// resolution, and integrity-preserving mutations over icon-set JSON
/// documents.
#[derive(Parser, Debug)]
#[command(name = "glyphset")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show icon-set summary
    Info {
        /// Path to the icon-set JSON document
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Check referential integrity of aliases and variations
    Validate {
        /// Path to the icon-set JSON document
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Export the canonical document
    Export {
        /// Path to the icon-set JSON document
        #[arg(short, long)]
        file: PathBuf,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Human-readable output
        #[arg(long)]
        pretty: bool,

        /// Keep aliases and variations that no longer resolve
        #[arg(long)]
        keep_dangling: bool,
    },

    /// Show naming-theme buckets
    Themes {
        /// Path to the icon-set JSON document
        #[arg(short, long)]
        file: PathBuf,

        /// Check the suffix table instead of prefixes
        #[arg(long)]
        suffixes: bool,
    },

    /// List categories with their members
    Categories {
        /// Path to the icon-set JSON document
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Show the character map
    Chars {
        /// Path to the icon-set JSON document
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Remove an entry and rewrite the document
    Remove {
        /// Path to the icon-set JSON document
        #[arg(short, long)]
        file: PathBuf,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Entry name to remove
        name: String,

        /// Recursively remove every transitive dependent
        #[arg(long, conflicts_with = "reparent")]
        cascade: bool,

        /// Re-parent direct children to this entry instead
        #[arg(long)]
        reparent: Option<String>,

        /// Human-readable output
        #[arg(long)]
        pretty: bool,
    },

    /// Rename an entry and rewrite the document
    Rename {
        /// Path to the icon-set JSON document
        #[arg(short, long)]
        file: PathBuf,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Current entry name
        old: String,

        /// New entry name
        new: String,

        /// Human-readable output
        #[arg(long)]
        pretty: bool,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), GlyphsetError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Commands::Info { file } => cmd_info(&file, json_mode),
        Commands::Validate { file } => cmd_validate(&file, json_mode),
        Commands::Export {
            file,
            output,
            pretty,
            keep_dangling,
        } => cmd_export(&file, output.as_deref(), pretty, keep_dangling),
        Commands::Themes { file, suffixes } => cmd_themes(&file, !suffixes, json_mode),
        Commands::Categories { file } => cmd_categories(&file, json_mode),
        Commands::Chars { file } => cmd_chars(&file, json_mode),
        Commands::Remove {
            file,
            output,
            name,
            cascade,
            reparent,
            pretty,
        } => {
            let dependents = match reparent {
                Some(parent) => Dependents::Reparent(parent),
                None if cascade => Dependents::Cascade,
                None => Dependents::Detach,
            };
            cmd_remove(&file, output.as_deref(), &name, dependents, pretty)
        }
        Commands::Rename {
            file,
            output,
            old,
            new,
            pretty,
        } => cmd_rename(&file, output.as_deref(), &old, &new, pretty),
    }
}
