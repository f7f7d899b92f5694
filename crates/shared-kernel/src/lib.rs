// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, DomainError, DomainResult, ErrorContext, FileInfoError, InfraResult,
    InfrastructureError, PresentationError, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{EntryKind, FilePath, FileSize, Inode, ModificationTime, PermissionBits};
