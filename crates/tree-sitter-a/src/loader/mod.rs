// Grammar loading and verification against the linked tree-sitter runtime
use std::fmt;

use rust_sitter::tree_sitter::{self, Language, Parser};
use tracing::{debug, info, warn};

use crate::error::{GrammarError, Result};
use crate::grammar;


/// Name the grammar is registered under
pub const GRAMMAR_NAME: &str = "a";

/// Source of a compiled grammar.
///
/// `provide` plays the role of the generated `tree_sitter_<name>` entry
/// point: it returns `None` when the artifact is absent.
pub trait LanguageProvider {
    /// Grammar name used in logs and errors
    fn name(&self) -> &str;

    /// Hand out the language handle, if the artifact is available
    fn provide(&self) -> Option<Language>;
}

/// The parser generated from `grammar.rs` and linked into this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledGrammar;

impl LanguageProvider for BundledGrammar {
    fn name(&self) -> &str {
        GRAMMAR_NAME
    }

    fn provide(&self) -> Option<Language> {
        Some(grammar::language())
    }
}

/// Limits applied while loading a grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadConfig {
    /// Oldest ABI version accepted
    pub min_abi_version: usize,
    /// Newest ABI version accepted
    pub max_abi_version: usize,
    /// Text parsed by `check`; `None` skips the probe parse
    pub probe: Option<String>,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            min_abi_version: tree_sitter::MIN_COMPATIBLE_LANGUAGE_VERSION,
            max_abi_version: tree_sitter::LANGUAGE_VERSION,
            probe: Some("hello".to_string()),
        }
    }
}

/// A language handle that passed the ABI check
#[derive(Clone)]
pub struct LoadedGrammar {
    pub name: String,
    pub language: Language,
    pub abi_version: usize,
}

impl LoadedGrammar {
    /// Number of node kinds (named and anonymous) the grammar defines
    pub fn node_kind_count(&self) -> usize {
        self.language.node_kind_count()
    }
}

impl fmt::Debug for LoadedGrammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedGrammar")
            .field("name", &self.name)
            .field("abi_version", &self.abi_version)
            .field("node_kind_count", &self.node_kind_count())
            .finish()
    }
}

/// Outcome of a successful `GrammarLoader::check`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub name: String,
    pub abi_version: usize,
    pub node_kind_count: usize,
    pub probe: Option<String>,
    /// S-expression of the probe's syntax tree
    pub sexp: Option<String>,
}

/// Loads a grammar from a provider and verifies it
pub struct GrammarLoader<P = BundledGrammar> {
    provider: P,
    config: LoadConfig,
}

impl GrammarLoader<BundledGrammar> {
    pub fn new() -> Self {
        Self::with_provider(BundledGrammar)
    }
}

impl Default for GrammarLoader<BundledGrammar> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: LanguageProvider> GrammarLoader<P> {
    pub fn with_provider(provider: P) -> Self {
        Self {
            provider,
            config: LoadConfig::default(),
        }
    }

    pub fn with_config(mut self, config: LoadConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &LoadConfig {
        &self.config
    }

    /// Obtain the language handle and check its ABI version.
    pub fn load(&self) -> Result<LoadedGrammar> {
        let name = self.provider.name().to_string();
        debug!(grammar = %name, "requesting language handle");

        let Some(language) = self.provider.provide() else {
            warn!(grammar = %name, "no language handle produced");
            return Err(GrammarError::Missing { name });
        };

        let version = language.abi_version();
        let (min, max) = (self.config.min_abi_version, self.config.max_abi_version);
        if version < min || version > max {
            warn!(grammar = %name, abi_version = version, min, max, "ABI version out of range");
            return Err(GrammarError::IncompatibleVersion {
                name,
                version,
                min,
                max,
            });
        }

        debug!(grammar = %name, abi_version = version, "language handle loaded");
        Ok(LoadedGrammar {
            name,
            language,
            abi_version: version,
        })
    }

    /// Load the grammar and install it into a fresh parser.
    pub fn parser(&self) -> Result<Parser> {
        let loaded = self.load()?;
        install(&loaded)
    }

    /// Full verification: load, install into a parser, then parse the probe.
    pub fn check(&self) -> Result<CheckReport> {
        let loaded = self.load()?;
        let mut parser = install(&loaded)?;

        let sexp = match &self.config.probe {
            Some(probe) => {
                let tree = parser
                    .parse(probe, None)
                    .ok_or_else(|| GrammarError::ParseAborted {
                        name: loaded.name.clone(),
                    })?;
                let root = tree.root_node();
                let sexp = root.to_sexp();
                if root.has_error() {
                    warn!(grammar = %loaded.name, %sexp, "probe produced syntax errors");
                    return Err(GrammarError::ProbeRejected {
                        name: loaded.name.clone(),
                        probe: probe.clone(),
                        sexp,
                    });
                }
                Some(sexp)
            }
            None => None,
        };

        info!(
            grammar = %loaded.name,
            abi_version = loaded.abi_version,
            "grammar verified"
        );

        Ok(CheckReport {
            node_kind_count: loaded.node_kind_count(),
            name: loaded.name,
            abi_version: loaded.abi_version,
            probe: self.config.probe.clone(),
            sexp,
        })
    }
}

fn install(loaded: &LoadedGrammar) -> Result<Parser> {
    let mut parser = Parser::new();
    parser
        .set_language(&loaded.language)
        .map_err(|source| GrammarError::Rejected {
            name: loaded.name.clone(),
            source,
        })?;
    Ok(parser)
}

/// Load the bundled grammar with the default limits
pub fn load_grammar() -> Result<LoadedGrammar> {
    GrammarLoader::new().load()
}

/// Verify the bundled grammar with the default limits and probe
pub fn check_grammar() -> Result<CheckReport> {
    GrammarLoader::new().check()
}
