use std::io::Write;

use fileinfo_shared_kernel::{EntryKind, FilePath, FileSize, Inode, Result};
use serde::Serialize;

use crate::model::PathRecord;

#[derive(Debug, Serialize)]
struct RecordView<'a> {
    path: &'a FilePath,
    kind: EntryKind,
    size: FileSize,
    inode: Inode,
    modified: String,
    permissions: PermissionsView,
}

#[derive(Debug, Serialize)]
struct PermissionsView {
    text: String,
    binary: String,
    octal: String,
}

impl<'a> From<&'a PathRecord> for RecordView<'a> {
    fn from(record: &'a PathRecord) -> Self {
        let bits = record.permissions();
        Self {
            path: record.path(),
            kind: record.kind(),
            size: record.size(),
            inode: record.inode(),
            modified: record.modified().to_rfc3339(),
            permissions: PermissionsView {
                text: record.symbolic_permissions(),
                binary: bits.to_binary(),
                octal: bits.to_octal(),
            },
        }
    }
}

/// Writes all records as one pretty-printed JSON array.
///
/// # Errors
/// Fails when serialization or the sink fails.
pub fn write_json<W: Write + ?Sized>(out: &mut W, records: &[PathRecord]) -> Result<()> {
    let views: Vec<RecordView<'_>> = records.iter().map(RecordView::from).collect();
    serde_json::to_writer_pretty(&mut *out, &views)?;
    writeln!(out)?;
    Ok(())
}
