// crates/shared-kernel/src/value_objects/permissions.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of filesystem entry, used as the leading character of symbolic permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    File,
    Directory,
    Other,
}

impl EntryKind {
    pub const fn symbol(self) -> char {
        match self {
            Self::File => '-',
            Self::Directory => 'd',
            Self::Other => '?',
        }
    }
}

/// Owner/group/other rwx bits plus setuid, setgid and sticky (`mode & 0o7777`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct PermissionBits(u32);

impl PermissionBits {
    pub const MASK: u32 = 0o7777;
    pub const SETUID: u32 = 0o4000;
    pub const SETGID: u32 = 0o2000;
    pub const STICKY: u32 = 0o1000;

    /// Keeps only the permission and special bits of a raw `st_mode`.
    #[inline]
    pub const fn from_mode(mode: u32) -> Self {
        Self(mode & Self::MASK)
    }

    #[inline]
    pub const fn has_special(self) -> bool {
        self.0 & (Self::SETUID | Self::SETGID | Self::STICKY) != 0
    }

    /// `ls`-style notation, e.g. `-rw-r--r--` or `drwxr-sr-t`.
    pub fn to_symbolic(self, kind: EntryKind) -> String {
        let mut out = String::with_capacity(10);
        out.push(kind.symbol());
        let slots = [
            (6, Self::SETUID, 's'),
            (3, Self::SETGID, 's'),
            (0, Self::STICKY, 't'),
        ];
        for (shift, special, marker) in slots {
            let triplet = (self.0 >> shift) & 0o7;
            out.push(if triplet & 0o4 != 0 { 'r' } else { '-' });
            out.push(if triplet & 0o2 != 0 { 'w' } else { '-' });
            let exec = triplet & 0o1 != 0;
            out.push(match (self.0 & special != 0, exec) {
                (true, true) => marker,
                (true, false) => marker.to_ascii_uppercase(),
                (false, true) => 'x',
                (false, false) => '-',
            });
        }
        out
    }

    /// Binary digits, 9 wide or 12 wide when a special bit is set.
    pub fn to_binary(self) -> String {
        if self.has_special() {
            format!("{:012b}", self.0)
        } else {
            format!("{:09b}", self.0)
        }
    }

    /// Octal digits, 3 wide or 4 wide when a special bit is set.
    pub fn to_octal(self) -> String {
        if self.has_special() {
            format!("{:04o}", self.0)
        } else {
            format!("{:03o}", self.0)
        }
    }
}

impl fmt::Display for PermissionBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_octal())
    }
}

/// Inode number; absent on platforms without inode semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Inode(Option<u64>);

impl Inode {
    pub const fn new(ino: u64) -> Self {
        Self(Some(ino))
    }

    pub const fn absent() -> Self {
        Self(None)
    }

    pub const fn get(self) -> Option<u64> {
        self.0
    }
}

impl fmt::Display for Inode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(ino) => write!(f, "{ino}"),
            None => f.write_str("-"),
        }
    }
}
