use predicates::prelude::*;

use crate::common::fileinfo;

#[test]
fn shows_help() {
    fileinfo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("fileinfo"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn no_paths_prints_usage_and_fails() {
    fileinfo()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains("ERROR: Please specify at least one path to a file"));
}

#[test]
fn unknown_flag_fails_with_code_one() {
    fileinfo().args(["--bogus", "Cargo.toml"]).assert().code(1);
}

#[test]
fn processes_manifest() {
    fileinfo()
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .arg("Cargo.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("Size(bytes)"))
        .stdout(predicate::str::contains("Permissions(octal)"));
}
