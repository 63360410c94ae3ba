use std::fs;

use a_check::{failures, parse_file, render_file, render_report, run, run_check, CheckOptions};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn test_default_check_passes() {
    let report = run_check(&CheckOptions::default()).unwrap();
    assert_eq!(report.name, "a");

    let line = render_report(&report);
    assert!(line.starts_with("ok: grammar `a` loaded"));
    assert!(line.contains("probe \"hello\" parsed"));
}

#[test]
fn test_skip_probe() {
    let options = CheckOptions {
        probe: Some("ignored".to_string()),
        skip_probe: true,
        ..Default::default()
    };
    assert_eq!(options.load_config().probe, None);

    let report = run_check(&options).unwrap();
    assert!(!render_report(&report).contains("probe"));
}

#[test]
fn test_bad_probe_fails_check() {
    let options = CheckOptions {
        probe: Some("goodbye".to_string()),
        ..Default::default()
    };
    let err = run_check(&options).unwrap_err();
    assert!(err.to_string().starts_with("Error loading grammar"));
}

#[test]
fn test_abi_range_from_options() {
    let options = CheckOptions {
        min_abi: Some(usize::MAX - 1),
        max_abi: Some(usize::MAX),
        ..Default::default()
    };
    let config = options.load_config();
    assert_eq!(config.min_abi_version, usize::MAX - 1);

    let err = run_check(&options).unwrap_err();
    assert!(err.to_string().contains("ABI version"));
}

#[test]
fn test_parse_files() {
    let temp_dir = TempDir::new().unwrap();
    let good = temp_dir.path().join("good.a");
    let bad = temp_dir.path().join("bad.a");
    fs::write(&good, "hello\n").unwrap();
    fs::write(&bad, "hello world\n").unwrap();

    let report = parse_file(&good).unwrap();
    assert!(!report.has_error);
    assert_eq!(report.path, good);

    let report = parse_file(&bad).unwrap();
    assert!(report.has_error);
    assert!(!report.sexp.is_empty());
}

#[test]
fn test_missing_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.a");

    let err = parse_file(&missing).unwrap_err();
    assert!(err.to_string().contains("Failed to read"));
}

#[test]
fn test_run_reports_every_file() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.a");
    let second = temp_dir.path().join("second.a");
    fs::write(&first, "oops").unwrap();
    fs::write(&second, "  hello").unwrap();

    let options = CheckOptions {
        files: vec![first.clone(), second.clone()],
        ..Default::default()
    };
    let (_report, files) = run(&options).unwrap();
    assert_eq!(files.len(), 2);
    assert!(files[0].has_error);
    assert!(!files[1].has_error);
}

#[test]
fn test_syntax_errors_counted_after_all_files() {
    let temp_dir = TempDir::new().unwrap();
    let bad = temp_dir.path().join("b.a");
    let good = temp_dir.path().join("g.a");
    fs::write(&bad, "hello world").unwrap();
    fs::write(&good, "hello").unwrap();

    let options = CheckOptions {
        files: vec![bad.clone(), good.clone()],
        ..Default::default()
    };
    let (_report, files) = run(&options).unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(failures(&files), 1);

    let bad_line = render_file(&files[0], false);
    assert!(bad_line.starts_with(&format!("{}: syntax error\n  ", bad.display())));
    assert_eq!(render_file(&files[1], false), format!("{}: ok", good.display()));

    let debug_line = render_file(&files[1], true);
    assert_eq!(debug_line, format!("{}: {}", good.display(), files[1].sexp));
}

#[test]
fn test_unreadable_file_does_not_stop_run() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.a");
    let good = temp_dir.path().join("g.a");
    fs::write(&good, "hello").unwrap();

    let options = CheckOptions {
        files: vec![missing.clone(), good.clone()],
        ..Default::default()
    };
    let (_report, files) = run(&options).unwrap();
    assert_eq!(files.len(), 2);
    assert!(files[0].read_error.is_some());
    assert!(files[0].is_failure());
    assert!(!files[1].is_failure());
    assert_eq!(failures(&files), 1);

    let line = render_file(&files[0], false);
    assert!(line.starts_with(&format!("{}: unreadable: Failed to read", missing.display())));
    assert_eq!(render_file(&files[1], false), format!("{}: ok", good.display()));
}

#[test]
fn test_clean_run_has_no_failures() {
    let temp_dir = TempDir::new().unwrap();
    let good = temp_dir.path().join("g.a");
    fs::write(&good, " hello\n").unwrap();

    let options = CheckOptions {
        files: vec![good],
        ..Default::default()
    };
    let (_report, files) = run(&options).unwrap();
    assert_eq!(failures(&files), 0);
}
