use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=src/grammar.rs");

    // Generate and compile the tree-sitter parser for the A grammar
    rust_sitter_tool::build_parsers(&PathBuf::from("src/grammar.rs"));
}
