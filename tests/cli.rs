/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/piot/yini
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */

//! End-to-end runs of the `config-bench` binary in a scratch working directory.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn workdir_with(config: Option<&str>) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    if let Some(text) = config {
        let config_dir = dir.path().join("test/config");
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join("crudebox.conf"), text).unwrap();
    }
    dir
}

fn run_in(dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_config-bench"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn prints_elapsed_and_font_path() {
    let dir = workdir_with(Some("[font]\npath = /usr/share/fonts/example.ttf\n"));
    let output = run_in(dir.path());

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2);

    let elapsed: f64 = lines[0]
        .strip_prefix("Elapsed ")
        .and_then(|rest| rest.strip_suffix(" ms"))
        .expect("elapsed line format")
        .parse()
        .expect("elapsed value is a number");
    assert!(elapsed >= 0.0);
    assert_eq!(lines[1], "Test: /usr/share/fonts/example.ttf");
}

#[test]
fn repeated_runs_are_identical_and_leave_file_untouched() {
    let text = "[font]\npath = /fonts/mono.ttf\nsize = 12\n";
    let dir = workdir_with(Some(text));

    let first = run_in(dir.path());
    let second = run_in(dir.path());

    assert!(first.status.success());
    assert!(second.status.success());
    assert_eq!(stdout_lines(&first)[1], stdout_lines(&second)[1]);

    let on_disk = fs::read_to_string(dir.path().join("test/config/crudebox.conf")).unwrap();
    assert_eq!(on_disk, text);
}

#[test]
fn missing_file_fails_without_test_line() {
    let dir = workdir_with(None);
    let output = run_in(dir.path());

    assert!(!output.status.success());
    assert!(stdout_lines(&output).iter().all(|line| !line.starts_with("Test:")));
    assert!(String::from_utf8_lossy(&output.stderr).contains("crudebox.conf"));
}

#[test]
fn missing_font_section_fails_without_test_line() {
    let dir = workdir_with(Some("[widget]\nframe = 0x000000\n"));
    let output = run_in(dir.path());

    assert!(!output.status.success());
    let lines = stdout_lines(&output);
    assert!(lines.iter().all(|line| !line.starts_with("Test:")));
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing section [font]"));
}

#[test]
fn missing_path_key_fails() {
    let dir = workdir_with(Some("[font]\nsize = 12\n"));
    let output = run_in(dir.path());

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing key [font] path"));
}

#[test]
fn empty_font_section_reports_missing_key() {
    let dir = workdir_with(Some("[font]\n"));
    let output = run_in(dir.path());

    assert!(!output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Elapsed "));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing key [font] path"));
    assert!(!stderr.contains("missing section"));
}

#[test]
fn malformed_file_fails_with_position() {
    let dir = workdir_with(Some("[font\npath = a\n"));
    let output = run_in(dir.path());

    assert!(!output.status.success());
    assert!(stdout_lines(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("1:6"));
}

#[test]
fn shipped_fixture_runs() {
    let output = run_in(Path::new(env!("CARGO_MANIFEST_DIR")));
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output)[1],
        "Test: /usr/share/fonts/TTF/DejaVuSansMono.ttf"
    );
}
