use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::Value;

fn bin_path() -> String {
    std::env::var("CARGO_BIN_EXE_doctree-check")
        .unwrap_or_else(|_| "target/debug/doctree-check".to_string())
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(bin_path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .env_remove("RUST_LOG")
        .spawn()
        .expect("Failed to spawn doctree-check");

    child
        .stdin
        .take()
        .expect("Child stdin should be available")
        .write_all(stdin.as_bytes())
        .expect("Failed to write document");

    child.wait_with_output().expect("Failed to wait for doctree-check")
}

#[test]
fn valid_document_from_stdin() {
    let output = run_with_stdin(&[], r#"[{"type": "p", "children": [{"text": "hi"}]}]"#);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "<stdin>: ok\n");
}

#[test]
fn invalid_document_reports_error_key() {
    let output = run_with_stdin(
        &["--format", "json"],
        r#"[{"type": "ul", "children": [{"type": "p", "children": []}]}]"#,
    );

    assert_eq!(output.status.code(), Some(1));
    let report: Value =
        serde_json::from_slice(&output.stdout).expect("stdout should hold a JSON report");
    assert_eq!(report["isValid"], false);
    assert_eq!(report["errorKey"], "ul_invalid_structure");
}

#[test]
fn files_are_checked_in_order() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let good = dir.path().join("good.json");
    let bad = dir.path().join("bad.json");
    fs::write(&good, r#"[{"type": "h1", "children": [{"text": "t"}]}]"#).unwrap();
    fs::write(&bad, r#"[{"type": "code_block", "children": []}]"#).unwrap();

    let output = run_with_stdin(&[good.to_str().unwrap(), bad.to_str().unwrap()], "");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("good.json: ok"));
    assert!(lines[1].contains("code_block_empty_content"));
}

#[test]
fn unreadable_input_exits_with_two() {
    let output = run_with_stdin(&["/nonexistent/doc.json"], "");

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read document"));
}
