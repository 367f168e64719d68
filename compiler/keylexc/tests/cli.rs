// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests for the `keylex` binary and its library entry points.
//!
//! ```bash
//! cargo test -p keylexc --test cli
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use keylexc::{dump_jml_files, dump_key_files, CliError};
use keylex_jml::ExpansionOptions;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}

fn keylex() -> Command {
    Command::new(env!("CARGO_BIN_EXE_keylex"))
}

const ACCOUNT: &str = "\
class Account {
    //@ invariant balance >= 0;
    int balance;

    //+esc@ requires amount > 0;
    /*@ ensures balance == \\old(balance) + amount;
      @*/
    void deposit(int amount) { balance += amount; }
}
";

#[test]
fn jml_dump_expands_active_annotations() {
    let file = temp_file(".java", ACCOUNT);
    let results = dump_jml_files(&[file.path().to_path_buf()], &ExpansionOptions::default());
    assert_eq!(results.len(), 1);
    let dump = results.into_iter().next().unwrap().unwrap();

    assert!(dump.contains("cp  \"//@\""));
    assert!(dump.contains("k   \"invariant\""));
    assert!(dump.contains("k   \"\\\\old\""));
    // `//+esc@` stays a single comment without the key.
    assert!(dump.contains("c1  \"//+esc@ requires amount > 0;\""));
}

#[test]
fn jml_dump_honours_keys() {
    let file = temp_file(".java", ACCOUNT);
    let options = ExpansionOptions::default().with_keys(["ESC"]);
    let dump = dump_jml_files(&[file.path().to_path_buf()], &options)
        .into_iter()
        .next()
        .unwrap()
        .unwrap();
    assert!(dump.contains("cp  \"//+esc@\""));
    assert!(dump.contains("k   \"requires\""));
}

#[test]
fn results_keep_input_order_and_report_missing_files() {
    let a = temp_file(".java", "int a;");
    let b = temp_file(".java", "int b;");
    let files = vec![
        a.path().to_path_buf(),
        PathBuf::from("/no/such/file.java"),
        b.path().to_path_buf(),
    ];
    let results = dump_jml_files(&files, &ExpansionOptions::default());
    assert_eq!(results.len(), 3);
    assert!(results[0].as_ref().unwrap().contains("\"a\""));
    assert!(matches!(results[1], Err(CliError::NotFound(_))));
    assert!(results[2].as_ref().unwrap().contains("\"b\""));
}

#[test]
fn key_dump_applies_integer_call_rule() {
    let file = temp_file(".key", "\\functions { int 0(int); }\n");
    let dump = dump_key_files(&[file.path().to_path_buf()])
        .into_iter()
        .next()
        .unwrap()
        .unwrap();
    assert!(dump.contains("k   \"\\\\functions\""));
    assert!(dump.contains("n   \"0\""));
}

#[test]
fn binary_prints_dump_and_succeeds() {
    let file = temp_file(".java", "//@ pure\n");
    let output = keylex().arg("jml").arg(file.path()).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("Tokens for '"));
    assert!(stdout.contains("k   \"pure\""));
}

#[test]
fn binary_reads_keys_from_environment() {
    let file = temp_file(".java", "//+openjml@ pure\n");
    let output = keylex()
        .arg("jml")
        .arg(file.path())
        .env("KEYLEX_KEYS", "openjml")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("k   \"pure\""));
}

#[test]
fn binary_fails_on_missing_file() {
    let output = keylex()
        .args(["key", "/no/such/file.key"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("cannot find file"));
}

#[test]
fn binary_rejects_unknown_command() {
    let output = keylex().arg("frobnicate").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
}
