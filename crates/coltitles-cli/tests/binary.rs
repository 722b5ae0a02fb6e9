//! End-to-end tests running the `gen-column-titles` binary.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_gen-column-titles"))
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(binary())
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn gen-column-titles");
    child
        .stdin
        .take()
        .expect("child stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for gen-column-titles")
}

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "coltitles-bin-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_pipe_without_arguments() {
    let output = run_with_stdin(
        &[],
        r#"{"name": {"title": "Name"}, "size": {}, "ext": {"title": "Extension"}}"#,
    );

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "char *title1 = _(\"Name\");\nchar *title3 = _(\"Extension\");\n"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn test_empty_object_prints_nothing() {
    let output = run_with_stdin(&[], "{}");

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_malformed_input_fails() {
    let output = run_with_stdin(&[], "not json");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("error: "), "stderr: {stderr}");
    assert!(stderr.contains("malformed JSON"), "stderr: {stderr}");
}

#[test]
fn test_non_object_input_fails() {
    let output = run_with_stdin(&[], r#"[{"title": "Name"}]"#);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_generate_then_check() {
    let dir = unique_temp_dir("check");
    let input = dir.join("column-types.json");
    let header = dir.join("_column_names.h");
    fs::write(&input, r#"{"name": {"title": "Name"}, "owner": {"title": "Owner"}}"#).unwrap();
    let input_arg = input.to_str().unwrap();
    let header_arg = header.to_str().unwrap();

    let generate = run_with_stdin(&["-i", input_arg, "-o", header_arg], "");
    assert!(generate.status.success());
    assert!(generate.stdout.is_empty());

    let check = run_with_stdin(&["-i", input_arg, "-o", header_arg, "--check"], "");
    assert!(check.status.success());

    fs::write(&header, "tampered output").unwrap();
    let drift = run_with_stdin(&["-i", input_arg, "-o", header_arg, "--check"], "");
    assert_eq!(drift.status.code(), Some(1));
    let stderr = String::from_utf8(drift.stderr).unwrap();
    assert!(stderr.contains("out of date"), "stderr: {stderr}");
    assert_eq!(fs::read_to_string(&header).unwrap(), "tampered output");
}

#[test]
fn test_json_logs_go_to_log_file() {
    let dir = unique_temp_dir("log-file");
    let log = dir.join("gen.log");

    let output = run_with_stdin(
        &[
            "--log-level",
            "info",
            "--log-format",
            "json",
            "--log-file",
            log.to_str().unwrap(),
        ],
        r#"{"name": {"title": "Name"}}"#,
    );

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "char *title1 = _(\"Name\");\n"
    );
    let logs = fs::read_to_string(&log).unwrap();
    assert!(logs.contains("rendered column titles"), "logs: {logs}");
}
