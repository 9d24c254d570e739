use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cargo_bin() -> Command {
    let mut cmd = Command::cargo_bin("bfi").unwrap();
    cmd.env("BFI_CONFIG", "/nonexistent/bfi.toml");
    cmd
}

fn program_file(content: &str) -> tempfile::NamedTempFile {
    let mut tf = tempfile::NamedTempFile::new().expect("tempfile");
    write!(tf, "{}", content).unwrap();
    tf
}

// Out-of-bounds moves warn and are ignored; the run still succeeds.
#[test]
fn move_right_at_the_bound_warns_but_succeeds() {
    let tf = program_file(">");
    cargo_bin()
        .arg("run")
        .arg("--tape-size")
        .arg("1")
        .arg(tf.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: pointer out of bounds"))
        .stderr(predicate::str::contains("op='>'"));
}

#[test]
fn move_left_at_cell_zero_warns_but_succeeds() {
    let tf = program_file("<");
    cargo_bin()
        .arg("run")
        .arg(tf.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: pointer out of bounds"))
        .stderr(predicate::str::contains("op='<'"));
}

#[test]
fn rejected_move_leaves_the_pointer_in_place() {
    // With one cell, '>' is ignored, so '+' still hits cell 0.
    let tf = program_file(">+.");
    cargo_bin()
        .arg("run")
        .arg("-t")
        .arg("1")
        .arg(tf.path())
        .assert()
        .success()
        .stdout(&b"\x01"[..]);
}

#[test]
fn unbounded_tape_never_warns_on_the_right() {
    let tf = program_file(&format!("{}+.", ">".repeat(50_000)));
    cargo_bin()
        .arg("run")
        .arg("--unbounded-tape")
        .arg(tf.path())
        .assert()
        .success()
        .stdout(&b"\x01"[..])
        .stderr(predicate::str::is_empty());
}

#[test]
fn default_bound_is_thirty_thousand() {
    // 30,000 cells: the 30,000th '>' is the first to fall off the end.
    let tf = program_file(&">".repeat(30_000));
    cargo_bin()
        .arg("run")
        .arg(tf.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: pointer out of bounds"))
        .stderr(predicate::str::contains("ptr=29999"));
}
