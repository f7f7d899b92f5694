use predicates::prelude::*;
use serde_json::Value;

use crate::common::{fileinfo, write_file};

#[test]
fn verbose_adds_staircase_and_prose() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "a", b"abc", 0o644);

    fileinfo()
        .arg("-v")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("└> The path to your file"))
        .stdout(predicate::str::contains("└> This is the inode address of the file"))
        .stdout(predicate::str::contains("An inode is a data structure."))
        .stdout(predicate::str::contains("r(4) - Allows the contents of the directory"));
}

#[test]
fn explanation_prose_follows_its_staircase() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "a", b"abc", 0o644);

    let output = fileinfo().arg("-v").arg(&file).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    let staircase = stdout.find("└> The path to your file").unwrap();
    let prose = stdout.find("\nAn inode is a data structure.").unwrap();
    let permissions = stdout.find("Permissions(octal)").unwrap();
    assert!(staircase < prose);
    assert!(prose < permissions);
    assert!(stdout.ends_with("(i.e. cd dir).\n\n"));
}

#[test]
fn plain_run_has_no_explanations() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "a", b"abc", 0o644);

    fileinfo()
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("└>").not())
        .stdout(predicate::str::contains("Listing info of paths").not());
}

#[test]
fn debug_traces_go_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_file(dir.path(), "a", b"abc", 0o644);

    fileinfo()
        .arg("-d")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Arguments received from CLI"))
        .stdout(predicate::str::contains("Listing info of paths"))
        .stdout(predicate::str::contains("Listing permissions of: "));
}

#[test]
fn json_lists_every_record() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_file(dir.path(), "a", &[0u8; 42], 0o644);
    let b = write_file(dir.path(), "b", b"", 0o755);

    let output = fileinfo().args(["--format", "json"]).arg(&a).arg(&b).output().unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["path"], a.to_str().unwrap());
    assert_eq!(records[0]["size"], 42);
    assert_eq!(records[0]["kind"], "file");
    #[cfg(unix)]
    {
        assert_eq!(records[0]["permissions"]["octal"], "644");
        assert_eq!(records[1]["permissions"]["text"], "-rwxr-xr-x");
        assert!(records[0]["inode"].is_u64());
    }
}
