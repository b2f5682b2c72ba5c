//! Integration tests for the `abigen` binary.
//!
//! Spawns the compiled executable against the workspace fixtures and checks
//! its exit code, diagnostics and output file.

use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::Command;

/// Fixture from `<workspace_root>/tests/fixtures/`
fn fixture(name: &str) -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")) // crates/abigen-cli/
        .parent()
        .unwrap() // crates/
        .parent()
        .unwrap() // workspace root
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn abigen() -> Command {
    Command::cargo_bin("abigen").unwrap()
}

#[test]
fn fails_when_file_missing() {
    abigen()
        .arg("this-file-does-not-exist.json")
        .args(["--contract", "hello"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error reading"));
}

#[test]
fn fails_without_contract() {
    abigen()
        .arg(fixture("hello.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--contract"));
}

#[test]
fn writes_abi_for_contract() {
    let temp = assert_fs::TempDir::new().unwrap();
    let out = temp.child("hello.abi");

    abigen()
        .arg(fixture("hello.json"))
        .args(["--contract", "hello", "-o"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 actions, 0 tables, 2 structs"));

    out.assert(predicate::path::exists());
    out.assert(predicate::str::contains("\"version\": \"eosio::abi/1.1\""));
    out.assert(predicate::str::contains("\"name\": \"transfer\""));
}

#[test]
fn default_output_is_named_after_contract() {
    let temp = assert_fs::TempDir::new().unwrap();

    abigen()
        .current_dir(temp.path())
        .arg(fixture("token.json"))
        .args(["--contract", "eosio.token", "--compact"])
        .assert()
        .success();

    let out = temp.child("eosio.token.abi");
    out.assert(predicate::str::contains(
        r#""tables":[{"name":"accounts","type":"account","index_type":"i64""#,
    ));
}

#[test]
fn warnings_do_not_fail() {
    let temp = assert_fs::TempDir::new().unwrap();
    let out = temp.child("hello.abi");

    abigen()
        .arg(fixture("bad_names.json"))
        .args(["--contract", "hello", "-o"])
        .arg(out.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("warning[W-ABI-001]"))
        .stderr(predicate::str::contains("warning[W-ABI-002]"));

    out.assert(predicate::path::exists());
}

#[test]
fn fatal_error_writes_nothing() {
    let temp = assert_fs::TempDir::new().unwrap();
    let out = temp.child("hello.abi");

    abigen()
        .arg(fixture("multiple_bases.json"))
        .args(["--contract", "hello", "-o"])
        .arg(out.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error[E-ABI-001]"))
        .stderr(predicate::str::contains("single inheritance <class both>"));

    out.assert(predicate::path::missing());
}

#[test]
fn fatal_error_names_declaration_location() {
    let temp = assert_fs::TempDir::new().unwrap();

    abigen()
        .current_dir(temp.path())
        .arg(fixture("multiple_bases.json"))
        .args(["--contract", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "error[E-ABI-001] hello.hpp:21:1: abigen can only handle single inheritance",
        ));
}

#[test]
fn each_warning_is_printed_once() {
    let temp = assert_fs::TempDir::new().unwrap();

    let output = abigen()
        .current_dir(temp.path())
        .env_remove("RUST_LOG")
        .arg(fixture("bad_names.json"))
        .args(["--contract", "hello"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("W-ABI-001").count(), 1, "{stderr}");
    assert_eq!(stderr.matches("W-ABI-002").count(), 1, "{stderr}");
    assert!(stderr.contains("warning[W-ABI-001] hello.hpp:6:5: "), "{stderr}");
    assert!(stderr.contains("warning[W-ABI-002] hello.hpp:10:1: "), "{stderr}");
}

#[test]
fn rejects_invalid_contract_name() {
    let temp = assert_fs::TempDir::new().unwrap();

    abigen()
        .current_dir(temp.path())
        .arg(fixture("hello.json"))
        .args(["--contract", "hello_world"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E-ABI-003]"));
}

#[test]
fn closure_prune_is_accepted() {
    let temp = assert_fs::TempDir::new().unwrap();
    let out = temp.child("hello.abi");

    abigen()
        .arg(fixture("hello.json"))
        .args(["--contract", "hello", "--prune", "closure", "-o"])
        .arg(out.path())
        .assert()
        .success();

    out.assert(predicate::str::contains("\"name\": \"account\""));
}
