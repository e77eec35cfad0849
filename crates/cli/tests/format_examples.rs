//! End-to-end checks of the `nsty` binary against its documented examples.
//!
//! Run with: cargo test -p numstyle-cli --test format_examples

use std::io::Write;
use std::process::{Command, Stdio};

/// Run the built binary and return trimmed stdout.
fn nsty(args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_nsty"))
        .args(args)
        .env_remove("NSTY_GROUP_SEPARATOR")
        .env_remove("NSTY_DECIMAL_SEPARATOR")
        .output()
        .expect("failed to run nsty");
    assert!(
        output.status.success(),
        "nsty {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout)
        .expect("stdout is utf-8")
        .trim_end()
        .to_string()
}

#[test]
fn plain_integer() {
    assert_eq!(nsty(&["42"]), "42");
}

#[test]
fn grouping() {
    assert_eq!(nsty(&["-g", "1234567"]), "1,234,567");
    assert_eq!(nsty(&["--group-separator", ".", "1234567"]), "1.234.567");
}

#[test]
fn fraction_precision() {
    assert_eq!(nsty(&["-p", "fraction:2", "3.14159"]), "3.14");
    assert_eq!(nsty(&["-p", "fraction:2..", "42.0"]), "42.00");
}

#[test]
fn significant_digits() {
    assert_eq!(nsty(&["-p", "significant:3", "1234"]), "1230");
}

#[test]
fn integer_padding() {
    assert_eq!(nsty(&["-p", "integer:4", "42"]), "0042");
}

#[test]
fn compact_notation() {
    assert_eq!(nsty(&["-n", "compact", "1000"]), "1K");
    assert_eq!(nsty(&["-n", "compact", "1500"]), "1.5K");
}

#[test]
fn scientific_notation() {
    assert_eq!(nsty(&["-n", "scientific", "1234"]), "1.234E3");
}

#[test]
fn signs() {
    assert_eq!(nsty(&["-s", "always", "--", "-42"]), "-42");
    assert_eq!(nsty(&["-s", "always", "42"]), "+42");
    assert_eq!(nsty(&["-s", "always-including-zero", "0"]), "+0");
}

#[test]
fn scale_as_percentage() {
    assert_eq!(nsty(&["--scale", "100", "-p", "f:1", "0.163"]), "16.3");
}

#[test]
fn rounding_to_an_increment() {
    assert_eq!(
        nsty(&[
            "-r",
            "to-nearest-or-away-from-zero",
            "--round-increment",
            "0.25",
            "3.14159",
        ]),
        "3.25"
    );
}

#[test]
fn specials_format_as_text() {
    assert_eq!(nsty(&["NaN"]), "NaN");
    assert_eq!(nsty(&["inf"]), "Infinity");
    assert_eq!(nsty(&["-inf"]), "-Infinity");
}

#[test]
fn several_values_print_one_per_line() {
    assert_eq!(nsty(&["-g", "1234", "5678901"]), "1,234\n5,678,901");
}

#[test]
fn json_output() {
    let line = nsty(&["--json", "-p", "fraction:2", "3.14159"]);
    let parsed: serde_json::Value = serde_json::from_str(&line).expect("valid json");
    assert_eq!(parsed["input"], "3.14159");
    assert_eq!(parsed["output"], "3.14");
}

#[test]
fn piped_stdin_is_read_line_by_line() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_nsty"))
        .args(["-p", "integer:4"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn nsty");
    child
        .stdin
        .as_mut()
        .expect("stdin handle")
        .write_all(b"42\n7\n")
        .expect("write to stdin");
    let output = child.wait_with_output().expect("wait for nsty");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        "0042\n0007"
    );
}

#[test]
fn junk_input_fails_with_a_diagnostic() {
    let output = Command::new(env!("CARGO_BIN_EXE_nsty"))
        .args(["--no-color", "fish"])
        .output()
        .expect("failed to run nsty");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not a number"));
}
