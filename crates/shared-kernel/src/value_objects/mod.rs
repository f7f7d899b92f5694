// crates/shared-kernel/src/value_objects/mod.rs
pub mod file_info;
pub mod permissions;

pub use file_info::{FilePath, FileSize, ModificationTime};
pub use permissions::{EntryKind, Inode, PermissionBits};
