//! Library side of the `a-check` tool: grammar verification and file parsing.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use tree_sitter_a::{CheckReport, GrammarLoader, LoadConfig};

/// Options gathered from the command line
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub probe: Option<String>,
    pub skip_probe: bool,
    pub min_abi: Option<usize>,
    pub max_abi: Option<usize>,
    pub files: Vec<PathBuf>,
}

impl CheckOptions {
    /// Loader limits, falling back to the runtime defaults
    pub fn load_config(&self) -> LoadConfig {
        let defaults = LoadConfig::default();
        let probe = if self.skip_probe {
            None
        } else {
            self.probe.clone().or(defaults.probe.clone())
        };

        LoadConfig {
            min_abi_version: self.min_abi.unwrap_or(defaults.min_abi_version),
            max_abi_version: self.max_abi.unwrap_or(defaults.max_abi_version),
            probe,
        }
    }
}

/// Parse result for one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub sexp: String,
    pub has_error: bool,
    /// Set when the file could not be read or parsed at all
    pub read_error: Option<String>,
}

impl FileReport {
    fn unreadable(path: &Path, err: &anyhow::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            sexp: String::new(),
            has_error: false,
            read_error: Some(format!("{err:#}")),
        }
    }

    /// True when the file counts against the exit status
    pub fn is_failure(&self) -> bool {
        self.has_error || self.read_error.is_some()
    }
}

/// Load and verify the bundled grammar
pub fn run_check(options: &CheckOptions) -> Result<CheckReport> {
    let report = GrammarLoader::new()
        .with_config(options.load_config())
        .check()?;
    Ok(report)
}

/// Parse a file with the `A` grammar
pub fn parse_file(path: &Path) -> Result<FileReport> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut parser = GrammarLoader::new().parser()?;
    let tree = parser
        .parse(&source, None)
        .with_context(|| format!("Parsing {} produced no tree", path.display()))?;
    let root = tree.root_node();
    debug!(path = %path.display(), bytes = source.len(), "parsed file");

    Ok(FileReport {
        path: path.to_path_buf(),
        sexp: root.to_sexp(),
        has_error: root.has_error(),
        read_error: None,
    })
}

/// One-line summary of a successful check
pub fn render_report(report: &CheckReport) -> String {
    let mut line = format!(
        "ok: grammar `{}` loaded (ABI {}, {} node kinds)",
        report.name, report.abi_version, report.node_kind_count
    );
    if let Some(probe) = &report.probe {
        line.push_str(&format!(", probe {probe:?} parsed"));
    }
    line
}

/// Report line(s) for one file; clean trees are only printed with `debug`
pub fn render_file(file: &FileReport, debug: bool) -> String {
    let path = file.path.display();
    if let Some(err) = &file.read_error {
        format!("{path}: unreadable: {err}")
    } else if file.has_error {
        format!("{path}: syntax error\n  {}", file.sexp)
    } else if debug {
        format!("{path}: {}", file.sexp)
    } else {
        format!("{path}: ok")
    }
}

/// Number of files that should fail the run
pub fn failures(files: &[FileReport]) -> usize {
    files.iter().filter(|file| file.is_failure()).count()
}

/// Run the check and parse every file, returning the file reports.
///
/// Unreadable files and files with syntax errors are reported in place and
/// do not stop the remaining files.
pub fn run(options: &CheckOptions) -> Result<(CheckReport, Vec<FileReport>)> {
    let report = run_check(options)?;
    info!(grammar = %report.name, files = options.files.len(), "grammar check passed");

    let files = options
        .files
        .iter()
        .map(|path| match parse_file(path) {
            Ok(file) => file,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping file");
                FileReport::unreadable(path, &err)
            }
        })
        .collect();

    Ok((report, files))
}
