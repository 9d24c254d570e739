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

fn rev(text: &str) -> String {
    format!("\u{1b}[7m{text}\u{1b}[0m")
}

#[test]
fn default_width_wraps_at_256() {
    // 256 '+' wrap back to zero, so the loop body never runs.
    let tf = program_file(&format!("{}[.]", "+".repeat(256)));
    cargo_bin()
        .arg("run")
        .arg(tf.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn narrow_cells_wrap_early() {
    // Width 4: a decrement from zero lands on 15 (0x0f).
    let tf = program_file("-#");
    cargo_bin()
        .arg("run")
        .arg("--cell-width")
        .arg("4")
        .arg(tf.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(rev("0f")));
}

#[test]
fn width_16_does_not_wrap_at_256() {
    // 256 '+' leave a width-16 cell at 256, so the loop is entered and
    // prints one NUL before draining. Under width 8 the cell would have
    // wrapped to zero and nothing would come out.
    let tf = program_file(&format!("{}[.[-]]", "+".repeat(256)));
    cargo_bin()
        .arg("run")
        .arg("-w")
        .arg("16")
        .arg(tf.path())
        .assert()
        .success()
        .stdout(&b"\x00"[..]);
}

#[test]
fn unbounded_cells_keep_the_low_byte_for_output() {
    // -1 in an unwrapped cell prints as 0xff.
    let tf = program_file("-.");
    cargo_bin()
        .arg("run")
        .arg("--unbounded-cells")
        .arg(tf.path())
        .assert()
        .success()
        .stdout(&b"\xff"[..]);
}

#[test]
fn read_bytes_are_reduced_to_the_width() {
    // 'A' (65) under width 4 stores 1.
    let tf = program_file(",#");
    cargo_bin()
        .arg("run")
        .arg("-w")
        .arg("4")
        .arg(tf.path())
        .write_stdin("A")
        .assert()
        .success()
        .stdout(predicate::str::contains(rev("01")));
}
