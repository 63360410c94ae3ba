use rust_sitter::tree_sitter::LanguageError;
use thiserror::Error;

/// Failures while loading the compiled grammar or verifying it.
///
/// Every message starts with `Error loading grammar` so callers can match
/// on the prefix regardless of the underlying cause.
#[derive(Error, Debug)]
pub enum GrammarError {
    /// The entry point produced no language handle.
    #[error("Error loading grammar: no language handle for `{name}`")]
    Missing { name: String },

    #[error(
        "Error loading grammar: `{name}` has ABI version {version}, supported range is {min}..={max}"
    )]
    IncompatibleVersion {
        name: String,
        version: usize,
        min: usize,
        max: usize,
    },

    /// The parser refused to install the language.
    #[error("Error loading grammar: parser rejected `{name}`: {source}")]
    Rejected {
        name: String,
        #[source]
        source: LanguageError,
    },

    #[error("Error loading grammar: parsing the probe for `{name}` produced no tree")]
    ParseAborted { name: String },

    #[error("Error loading grammar: probe {probe:?} does not parse cleanly with `{name}`: {sexp}")]
    ProbeRejected {
        name: String,
        probe: String,
        sexp: String,
    },
}

impl GrammarError {
    /// Name of the grammar the error refers to
    pub fn grammar(&self) -> &str {
        match self {
            Self::Missing { name }
            | Self::IncompatibleVersion { name, .. }
            | Self::Rejected { name, .. }
            | Self::ParseAborted { name }
            | Self::ProbeRejected { name, .. } => name,
        }
    }

    /// True when no handle could be obtained at all
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }
}

/// Result type for grammar operations
pub type Result<T> = std::result::Result<T, GrammarError>;
