// tests/common/mod.rs
#![allow(dead_code)]
//! Shared helpers for the CLI tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;

pub fn fileinfo() -> Command {
    Command::new(env!("CARGO_BIN_EXE_fileinfo"))
}

/// Writes `contents` under `dir` and, on Unix, applies `mode`.
#[allow(unused_variables)]
pub fn write_file(dir: &Path, name: &str, contents: &[u8], mode: u32) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
    }
    path
}
