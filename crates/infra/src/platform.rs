// crates/infra/src/platform.rs
//! Platform-specific abstractions for cross-platform compatibility.
//!
//! This module centralizes OS-specific metadata extraction so the rest of the
//! adapter stays free of conditional compilation.

use std::fs::Metadata;

use fileinfo_shared_kernel::{EntryKind, Inode, PermissionBits};

// ============================================================================
// Inode
// ============================================================================

#[cfg(unix)]
pub fn inode(metadata: &Metadata) -> Inode {
    use std::os::unix::fs::MetadataExt;

    Inode::new(metadata.ino())
}

#[cfg(not(unix))]
pub fn inode(_metadata: &Metadata) -> Inode {
    Inode::absent()
}

// ============================================================================
// Permission bits
// ============================================================================

#[cfg(unix)]
pub fn permission_bits(metadata: &Metadata) -> PermissionBits {
    use std::os::unix::fs::PermissionsExt;

    PermissionBits::from_mode(metadata.permissions().mode())
}

/// Synthesized from the read-only flag: `0o444`/`0o666`, plus `0o111` for directories.
#[cfg(not(unix))]
pub fn permission_bits(metadata: &Metadata) -> PermissionBits {
    let base = if metadata.permissions().readonly() {
        0o444
    } else {
        0o666
    };
    let exec = if metadata.is_dir() { 0o111 } else { 0 };
    PermissionBits::from_mode(base | exec)
}

// ============================================================================
// Entry kind
// ============================================================================

pub fn entry_kind(metadata: &Metadata) -> EntryKind {
    let file_type = metadata.file_type();
    if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}
