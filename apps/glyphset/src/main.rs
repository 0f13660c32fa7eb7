//! # Glyphset - Icon-Set Tool
//!
//! The main binary for the Glyphset icon repository.
//!
//! This application provides a CLI over icon-set JSON documents: inspect,
//! validate, export, and mutate (remove/rename) through the deterministic
//! glyphset-core engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │            apps/glyphset (THE BINARY)        │
//! │                                              │
//! │   ┌─────────────┐        ┌──────────────┐    │
//! │   │   CLI       │        │   File I/O   │    │
//! │   │  (clap)     │        │  (load/write)│    │
//! │   └──────┬──────┘        └──────┬───────┘    │
//! │          └───────────┬──────────┘            │
//! │                      ▼                       │
//! │             ┌─────────────────┐              │
//! │             │  glyphset-core  │              │
//! │             │   (THE LOGIC)   │              │
//! │             └─────────────────┘              │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! glyphset info -f set.json
//! glyphset validate -f set.json
//! glyphset export -f set.json -o out.json --pretty
//! glyphset rename -f set.json -o out.json home house
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Initialize tracing — GLYPHSET_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("GLYPHSET_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "glyphset=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments
    let cli = glyphset::cli::Cli::parse();

    // Display startup banner
    if !cli.quiet {
        print_banner();
    }

    // Execute command
    if let Err(e) = glyphset::cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Glyphset startup banner.
fn print_banner() {
    println!(
        r#"
  ┌─┐┬  ┬ ┬┌─┐┬ ┬┌─┐┌─┐┌┬┐
  │ ┬│  └┬┘├─┘├─┤└─┐├┤  │
  └─┘┴─┘ ┴ ┴  ┴ ┴└─┘└─┘ ┴

  Icon-Set Tool v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
