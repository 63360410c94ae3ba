use std::path::PathBuf;

use a_check::{failures, render_file, render_report, run, CheckOptions};
use anyhow::{bail, Result};
use clap::{Arg, ArgAction, Command};
use tree_sitter_a::init_tracing;

fn main() -> Result<()> {
    // Initialize logging
    init_tracing();

    let matches = Command::new("a-check")
        .version(tree_sitter_a::VERSION)
        .about("Verify that the A grammar loads, then parse files with it")
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .help("Files to parse after the grammar check")
                .num_args(0..)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("probe")
                .long("probe")
                .value_name("TEXT")
                .help("Text that must parse without errors")
                .conflicts_with("no-probe"),
        )
        .arg(
            Arg::new("no-probe")
                .long("no-probe")
                .help("Skip the probe parse")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("min-abi")
                .long("min-abi")
                .value_name("N")
                .help("Oldest grammar ABI version to accept")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("max-abi")
                .long("max-abi")
                .value_name("N")
                .help("Newest grammar ABI version to accept")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Print file trees even when they parse cleanly")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let options = CheckOptions {
        probe: matches.get_one::<String>("probe").cloned(),
        skip_probe: matches.get_flag("no-probe"),
        min_abi: matches.get_one::<usize>("min-abi").copied(),
        max_abi: matches.get_one::<usize>("max-abi").copied(),
        files: matches
            .get_many::<PathBuf>("files")
            .map(|files| files.cloned().collect())
            .unwrap_or_default(),
    };
    let debug = matches.get_flag("debug");

    let (report, files) = run(&options)?;
    println!("{}", render_report(&report));

    for file in &files {
        println!("{}", render_file(file, debug));
    }

    let failed = failures(&files);
    if failed > 0 {
        bail!("{failed} of {} files failed", files.len());
    }
    Ok(())
}
