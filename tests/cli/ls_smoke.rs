// tests/cli/ls_smoke.rs
use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::workspace_with;

fn ls() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ls"))
}

#[test]
fn shows_help() {
    ls().arg("--help").assert().success().stdout(predicate::str::contains("-a"));
}

#[test]
fn grid_lists_visible_names_column_major() {
    let dir = workspace_with(&["b.txt", "a.txt", ".secret"]);
    ls().current_dir(dir.path())
        .assert()
        .success()
        .stdout("a.txt  \nb.txt  \n\n\n\n\n\n")
        .stderr("");
}

#[test]
fn empty_directory_prints_blank_rows() {
    let dir = workspace_with(&[]);
    ls().current_dir(dir.path()).assert().success().stdout("\n".repeat(7));
}

#[test]
fn all_flag_includes_self_entries_and_dot_files() {
    let dir = workspace_with(&["a", ".secret"]);
    ls().arg("-a")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(".        \n..       \n.secret  \na        \n\n\n\n");
}

#[test]
fn reverse_flag_flips_order() {
    let dir = workspace_with(&["a", "b", "c"]);
    ls().arg("-r").current_dir(dir.path()).assert().success().stdout("c  \nb  \na  \n\n\n\n\n");
}

#[test]
fn long_flag_prints_total_then_one_line_per_entry() {
    let dir = workspace_with(&["one", "two"]);
    let assert = ls().args(["-l", "-r"]).current_dir(dir.path()).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with(" total "));
    assert!(lines[1].starts_with('-') && lines[1].ends_with(" two"));
    assert!(lines[2].starts_with('-') && lines[2].ends_with(" one"));
}

#[test]
fn combined_short_flags_are_accepted() {
    let dir = workspace_with(&["x"]);
    ls().arg("-alr")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::ends_with(" .\n"))
        .stdout(predicate::str::contains("d"));
}

#[test]
fn unreadable_working_directory_exits_non_zero() {
    use std::{fs, os::unix::fs::PermissionsExt};

    let dir = workspace_with(&[]);
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).expect("mkdir");
    fs::write(locked.join("inside"), "").expect("write");
    // Search permission only: chdir succeeds, reading the entries does not.
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o300)).expect("chmod");

    if fs::read_dir(&locked).is_ok() {
        // Running with privileges that bypass mode bits; nothing to observe.
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("chmod back");
        return;
    }

    let assert = ls().current_dir(&locked).assert();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("chmod back");

    assert
        .failure()
        .stdout("")
        .stderr(predicate::str::starts_with("ls: cannot list the working directory"));
}

#[test]
fn unknown_flag_is_rejected() {
    ls().arg("--bogus").assert().failure();
}
