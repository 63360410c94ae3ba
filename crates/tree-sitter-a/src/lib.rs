//! # tree-sitter-a
//!
//! Tree-sitter grammar for the `A` language, including:
//! - The grammar itself, written with rust-sitter and compiled at build time
//! - A loader that obtains the language handle and verifies it against the
//!   linked tree-sitter runtime
//!
//! ```
//! let loaded = tree_sitter_a::load_grammar().expect("Error loading A grammar");
//! assert_eq!(loaded.name, "a");
//! ```

#![warn(clippy::all)]

pub mod error;
pub mod grammar;
pub mod loader;

// Re-export commonly used types
pub use error::{GrammarError, Result};
pub use grammar::{parse_a as parse, AParser, SourceFile};
pub use loader::{
    check_grammar, load_grammar, BundledGrammar, CheckReport, GrammarLoader, LanguageProvider,
    LoadConfig, LoadedGrammar, GRAMMAR_NAME,
};
pub use rust_sitter::tree_sitter;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the tree-sitter [`Language`](tree_sitter::Language) for the `A` grammar.
pub fn language() -> tree_sitter::Language {
    grammar::language()
}

/// Initialize tracing for grammar loading.
///
/// Honors `RUST_LOG`, defaulting to `tree_sitter_a=info`. Safe to call more
/// than once; later calls leave the installed subscriber in place.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tree_sitter_a=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
