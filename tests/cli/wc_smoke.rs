// tests/cli/wc_smoke.rs
use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::create_test_file;

fn wc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_wc"))
}

#[test]
fn counts_stdin_without_label() {
    wc().write_stdin("hello world\nbye\n").assert().success().stdout("       2        3       16\n");
}

#[test]
fn lines_only_on_stdin() {
    wc().arg("-l").write_stdin("a\nb\n").assert().success().stdout("       2\n");
}

#[test]
fn several_files_get_a_total_row() {
    let dir = tempfile::tempdir().expect("temp dir");
    create_test_file(&dir.path().join("a.txt"), b"one\n");
    create_test_file(&dir.path().join("b.txt"), b"two three\nfour\n");

    wc().args(["a.txt", "b.txt"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("       1        1        4 a.txt\n       2        3       15 b.txt\n       3        4       19 total\n");
}

#[test]
fn missing_file_fails_but_counts_the_rest() {
    let dir = tempfile::tempdir().expect("temp dir");
    create_test_file(&dir.path().join("ok.txt"), b"x\n");

    wc().args(["-l", "missing.txt", "ok.txt"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("       1 ok.txt"))
        .stdout(predicate::str::contains("       1 total"))
        .stderr(predicate::str::starts_with("wc: missing.txt: "));
}
