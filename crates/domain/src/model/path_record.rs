use fileinfo_shared_kernel::{
    EntryKind, FilePath, FileSize, Inode, ModificationTime, PermissionBits,
};

/// Metadata captured for a single user-supplied path.
///
/// Records are produced once by a metadata source and only read afterwards;
/// both tables of a run are rendered from the same record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRecord {
    path: FilePath,
    kind: EntryKind,
    size: FileSize,
    inode: Inode,
    modified: ModificationTime,
    permissions: PermissionBits,
}

impl PathRecord {
    pub fn new(
        path: impl Into<FilePath>,
        kind: EntryKind,
        size: FileSize,
        inode: Inode,
        modified: ModificationTime,
        permissions: PermissionBits,
    ) -> Self {
        Self {
            path: path.into(),
            kind,
            size,
            inode,
            modified,
            permissions,
        }
    }

    pub fn path(&self) -> &FilePath {
        &self.path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn size(&self) -> FileSize {
        self.size
    }

    pub fn inode(&self) -> Inode {
        self.inode
    }

    pub fn modified(&self) -> ModificationTime {
        self.modified
    }

    pub fn permissions(&self) -> PermissionBits {
        self.permissions
    }

    /// Symbolic permissions including the entry-kind prefix.
    pub fn symbolic_permissions(&self) -> String {
        self.permissions.to_symbolic(self.kind)
    }
}
