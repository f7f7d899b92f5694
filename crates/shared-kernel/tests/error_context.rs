// crates/shared-kernel/tests/error_context.rs
use std::io;

use fileinfo_shared_kernel::{ApplicationError, ErrorContext, FileInfoError};

fn boom() -> std::result::Result<(), io::Error> {
    Err(io::Error::other("root-io"))
}

#[test]
fn context_wraps_and_formats() {
    let err = boom()
        .map_err(FileInfoError::from)
        .context("writing table")
        .unwrap_err();

    let display = err.to_string();
    assert!(display.contains("writing table"));
    assert!(display.contains("Output error:"));
}

#[test]
fn application_errors_are_transparent() {
    let err = FileInfoError::from(ApplicationError::NoPaths);
    assert_eq!(
        err.to_string(),
        "Please specify at least one path to a file"
    );
}
