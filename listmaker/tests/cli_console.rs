//! CLI tests for the `listmaker` binary.
//!
//! Spawns the binary with scripted stdin and checks exit status and the
//! files it leaves behind.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn run_listmaker(cwd: &Path, args: &[&str], script: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_listmaker"))
        .current_dir(cwd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn listmaker");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(script.as_bytes())
        .expect("write script");
    child.wait_with_output().expect("listmaker output")
}

#[test]
fn confirmed_quit_exits_cleanly_after_saving() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = run_listmaker(temp.path(), &[], "a\nbread\ns\nshopping\nq\ny\n");

    assert!(output.status.success(), "{output:?}");
    assert_eq!(
        fs::read_to_string(temp.path().join("lists/shopping.txt")).expect("saved list"),
        "bread\n"
    );
}

#[test]
fn end_of_input_exits_with_failure() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = run_listmaker(temp.path(), &[], "a\nbread\n");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("end of input"), "{stderr}");
}

#[test]
fn startup_file_and_config_lists_dir_are_used() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("listmaker.toml"), "lists_dir = \"saved\"\n").expect("config");
    fs::write(temp.path().join("chores.txt"), "dishes\n").expect("seed");

    let output = run_listmaker(temp.path(), &["chores.txt"], "a\nvacuum\ns\nq\ny\n");

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("  1. dishes"), "{stdout}");
    assert_eq!(
        fs::read_to_string(temp.path().join("saved/chores.txt")).expect("saved list"),
        "dishes\nvacuum\n"
    );
}
