use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn fixture_path() -> PathBuf {
    // apps/docindex-cli -> apps -> repo root
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).ancestors().nth(2).unwrap().to_path_buf();
    root.join("test_data/search_index.js")
}

/// Run `docindex --index <fixture> <args>` from an empty directory so no
/// `docindex*.toml` is picked up.
fn run(cwd: &Path, args: &[&str], envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_docindex"));
    cmd.current_dir(cwd).env("RUST_ENV", "test").arg("--index").arg(fixture_path()).args(args);
    for (k, v) in envs {
        cmd.env(k, v);
    }
    cmd.output().expect("spawn docindex")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

#[test]
fn find_prints_entry_or_exits_with_one() {
    let tmp = TempDir::new().unwrap();

    let hit = run(tmp.path(), &["find", "dev/#Mandatory-methods-1"], &[]);
    assert!(hit.status.success());
    assert!(stdout(&hit).contains("Mandatory methods"));
    assert!(stdout(&hit).contains("page: Dev Docs"));

    let miss = run(tmp.path(), &["find", "dev/#nowhere"], &[]);
    assert_eq!(miss.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&miss.stderr).contains("No entry at location 'dev/#nowhere'"));
}

#[test]
fn search_reports_total_beyond_limit() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["search", "bulksearch"], &[("DOCINDEX_SEARCH__DEFAULT_LIMIT", "2")]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.starts_with("Found 5 results for: \"bulksearch\" (showing 2)"), "{}", text);
    assert_eq!(text.lines().count(), 3);

    let all = run(tmp.path(), &["search", "THEILER"], &[]);
    assert!(stdout(&all).starts_with("Found 3 results for: \"THEILER\"\n"), "{}", stdout(&all));
}

#[test]
fn export_format_follows_extension() {
    let tmp = TempDir::new().unwrap();
    let js = tmp.path().join("out.js");
    let json = tmp.path().join("out.json");

    for path in [&js, &json] {
        let out = run(tmp.path(), &["export", path.to_str().unwrap()], &[]);
        assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
        assert!(stdout(&out).starts_with("Wrote 24 entries to "));
    }
    assert!(fs::read_to_string(&js).unwrap().starts_with("var documenterSearchIndex = {\"docs\":["));
    assert!(fs::read_to_string(&json).unwrap().starts_with("{\"docs\":["));
}

#[test]
fn unknown_category_argument_fails() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), &["category", "macro"], &[]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Unknown category 'macro'"));

    let ok = run(tmp.path(), &["category", "type"], &[]);
    assert!(ok.status.success());
    assert_eq!(stdout(&ok).lines().count(), 4);
}
