// tests/integration/end_to_end.rs
use predicates::prelude::*;

use crate::common::{fileinfo, write_file};

#[test]
fn reports_size_and_permissions_of_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "a", &[b'x'; 42], 0o644);
    let path = file.to_str().unwrap();

    let assert = fileinfo().arg(path).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert!(lines[0].starts_with("Path"));
    let info: Vec<&str> = lines[1].split_whitespace().collect();
    assert_eq!(info[0], path);
    assert_eq!(info[1], "42");

    #[cfg(unix)]
    {
        let perms_row = lines.iter().rev().find(|l| l.starts_with(path)).unwrap();
        let perms: Vec<&str> = perms_row.split_whitespace().collect();
        assert_eq!(perms[1..], ["-rw-r--r--", "110100100", "644"]);
    }
}

#[test]
fn rows_follow_argument_order() {
    let dir = tempfile::tempdir().unwrap();
    let b = write_file(dir.path(), "b", b"bb", 0o600);
    let a = write_file(dir.path(), "a", b"a", 0o644);

    let assert = fileinfo().arg(&b).arg(&a).arg(dir.path()).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let tables: Vec<&str> = stdout.split("\n\n").collect();
    assert_eq!(tables.len(), 2);
    for table in tables {
        let rows: Vec<&str> = table.lines().skip(1).collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with(b.to_str().unwrap()));
        assert!(rows[1].starts_with(a.to_str().unwrap()));
        assert!(rows[2].starts_with(dir.path().to_str().unwrap()));
    }
}

#[test]
fn missing_path_fails_without_output() {
    fileinfo()
        .arg("/missing")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("ERROR: "))
        .stderr(predicate::str::contains("/missing"));
}

#[test]
fn every_missing_path_is_listed() {
    let dir = tempfile::tempdir().unwrap();
    let present = write_file(dir.path(), "present", b"", 0o644);
    let gone1 = dir.path().join("gone1");
    let gone2 = dir.path().join("gone2");

    fileinfo()
        .arg(&gone1)
        .arg(&present)
        .arg(&gone2)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("The following files did not exist"))
        .stderr(predicate::str::contains(gone1.to_str().unwrap()))
        .stderr(predicate::str::contains(gone2.to_str().unwrap()))
        .stderr(predicate::str::contains(present.to_str().unwrap()).not());
}

#[test]
fn output_is_stable_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "a", b"hello", 0o640);

    let first = fileinfo().arg("-v").arg(&file).output().unwrap();
    let second = fileinfo().arg("-v").arg(&file).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}
