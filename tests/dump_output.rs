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

// Inverse video on, text, attributes off.
fn rev(text: &str) -> String {
    format!("\u{1b}[7m{text}\u{1b}[0m")
}

#[test]
fn dump_of_a_fresh_tape_is_one_row() {
    let tf = program_file("#");
    let expected = format!(
        "00000000  {} 00 00 00 00 00 00 00  00 00 00 00 00 00 00 00  |{}...............|\n",
        rev("00"),
        rev("."),
    );
    cargo_bin()
        .arg("run")
        .arg(tf.path())
        .assert()
        .success()
        .stdout(expected)
        .stderr(predicate::str::is_empty());
}

#[test]
fn dump_highlights_the_pointer_cell_in_both_columns() {
    // 72 is 'H': printable, so it shows in the ASCII gutter too.
    let tf = program_file(&format!("{}#", "+".repeat(72)));
    cargo_bin()
        .arg("run")
        .arg(tf.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(rev("48")))
        .stdout(predicate::str::contains(format!("|{}", rev("H"))));
}

#[test]
fn dump_follows_the_pointer() {
    let tf = program_file("+>+>#");
    cargo_bin()
        .arg("run")
        .arg(tf.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("01 01 {}", rev("00"))));
}

#[test]
fn dump_reaches_the_pointer_row() {
    let tf = program_file(&format!("{}#", ">".repeat(16)));
    let assert = cargo_bin().arg("run").arg(tf.path()).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    assert_eq!(stdout.lines().count(), 2, "pointer at 16 needs a second row");
    assert!(stdout.lines().nth(1).unwrap().starts_with("00000010  "));
    assert!(stdout.lines().nth(1).unwrap().contains(&rev("00")));
}

#[test]
fn dump_sits_inline_with_program_output() {
    let tf = program_file(&format!("{}#.", "+".repeat(65)));
    cargo_bin()
        .arg("run")
        .arg(tf.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("00000000"))
        .stdout(predicate::str::ends_with("|\nA"));
}
