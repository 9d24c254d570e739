use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn cargo_bin() -> Command {
    let mut cmd = Command::cargo_bin("bfi").unwrap();
    cmd.env("BFI_CONFIG", "/nonexistent/bfi.toml");
    cmd
}

fn program_file(content: &str) -> NamedTempFile {
    let mut tf = NamedTempFile::new().unwrap();
    write!(tf, "{content}").unwrap();
    tf
}

#[test]
fn test_run_file_success() {
    let tf = program_file("+++.");

    cargo_bin()
        .arg("run")
        .arg(tf.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_run_output_is_exactly_what_the_program_wrote() {
    let tf = program_file(&format!("{}.", "+".repeat(65)));

    cargo_bin()
        .arg("run")
        .arg(tf.path())
        .assert()
        .success()
        .stdout("A")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_run_empty_program_prints_nothing() {
    let tf = program_file("just a comment, no instructions");

    cargo_bin()
        .arg("run")
        .arg(tf.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_run_without_file_is_misuse() {
    cargo_bin()
        .arg("run")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_run_help_exits_zero() {
    cargo_bin()
        .arg("run")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_top_level_without_subcommand_is_misuse() {
    cargo_bin()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_top_level_help_exits_zero() {
    cargo_bin()
        .arg("--help")
        .assert()
        .success()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_zero_tape_size_is_misuse() {
    let tf = program_file("+.");

    cargo_bin()
        .arg("run")
        .arg("--tape-size")
        .arg("0")
        .arg(tf.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--tape-size must be at least 1"));
}

#[test]
fn test_out_of_range_cell_width_is_misuse() {
    let tf = program_file("+.");

    cargo_bin()
        .arg("run")
        .arg("--cell-width")
        .arg("64")
        .arg(tf.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "--cell-width must be between 1 and 63",
        ));
}

#[test]
fn test_conflicting_tape_flags_are_rejected() {
    let tf = program_file("+.");

    cargo_bin()
        .arg("run")
        .arg("--tape-size")
        .arg("10")
        .arg("--unbounded-tape")
        .arg(tf.path())
        .assert()
        .code(2);
}
