// A language grammar using rust-sitter annotations
#[rust_sitter::grammar("a")]
pub mod a {
    #[rust_sitter::extra]
    struct Whitespace {
        #[rust_sitter::leaf(pattern = r"\s")]
        _whitespace: (),
    }

    /// A complete `A` document. The language has a single sentence.
    #[derive(Debug, PartialEq)]
    #[rust_sitter::language]
    pub struct SourceFile {
        #[rust_sitter::leaf(text = "hello")]
        _hello: (),
    }
}

pub use a::SourceFile;
pub use a::{language, parse as parse_a};

// Wrapper that reports parse failures through anyhow
pub struct AParser;

impl AParser {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self)
    }

    pub fn parse(&mut self, input: &str) -> anyhow::Result<SourceFile> {
        parse_a(input).map_err(|e| anyhow::anyhow!("Failed to parse A source: {:?}", e))
    }
}
