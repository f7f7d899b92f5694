use super::annotator::Explanation;
use crate::model::PathRecord;

/// Which table to render for a set of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnSet {
    /// Path, size, inode and modification time.
    FileInfo,
    /// Path and the permission bits as text, binary and octal.
    Permissions,
}

const FILE_INFO_HEADERS: [&str; 4] = ["Path", "Size(bytes)", "Inode", "Modify"];
const PERMISSIONS_HEADERS: [&str; 4] = [
    "Path",
    "Permissions(text)",
    "Permissions(binary)",
    "Permissions(octal)",
];

const FILE_INFO_CAPTIONS: [&str; 4] = [
    "The path to your file",
    "This is the size of the file in bytes",
    "This is the inode address of the file",
    "This is date since the last time the file was modified",
];
const PERMISSIONS_CAPTIONS: [&str; 4] = [
    "The path to your file",
    "This is the permission of the file written in text format",
    "This is the permission of the file written in binary format",
    "This is the permission of the file written in octal format",
];

const FILE_INFO_TEXT: &str = "\
An inode is a data structure. It defines a file or a directory on the file system and is stored in the directory entry.
Inodes point to blocks that make up a file. The inode contains all the administrative data needed to read a file.
Every file's metadata is stored in inodes in a table structure.";

const PERMISSIONS_TEXT: &str = "\
On a Linux system, each file and directory is assigned access rights for the owner of the file,
the members of a group of related users, and everybody else. Rights can be assigned to read a file,
to write a file, and to execute a file (i.e., run the file as a program).

r(4) - Allows the contents of the directory to be listed if the x attribute is also set.
w(2) - Allows files within the directory to be created, deleted, or renamed if the x attribute is also set.
x(1) - Allows a directory to be entered (i.e. cd dir).";

impl ColumnSet {
    pub const ALL: [Self; 2] = [Self::FileInfo, Self::Permissions];

    #[must_use]
    pub const fn headers(self) -> &'static [&'static str] {
        match self {
            Self::FileInfo => &FILE_INFO_HEADERS,
            Self::Permissions => &PERMISSIONS_HEADERS,
        }
    }

    #[must_use]
    pub const fn column_count(self) -> usize {
        self.headers().len()
    }

    /// One cell per header, in header order.
    #[must_use]
    pub fn cells(self, record: &PathRecord) -> Vec<String> {
        let path = record.path().to_string_lossy().into_owned();
        match self {
            Self::FileInfo => vec![
                path,
                record.size().to_string(),
                record.inode().to_string(),
                record.modified().to_string(),
            ],
            Self::Permissions => {
                let bits = record.permissions();
                vec![path, record.symbolic_permissions(), bits.to_binary(), bits.to_octal()]
            }
        }
    }

    /// The captions and paragraph that explain this table's columns.
    #[must_use]
    pub fn explanation(self) -> Explanation {
        match self {
            Self::FileInfo => Explanation::new(FILE_INFO_CAPTIONS, FILE_INFO_TEXT),
            Self::Permissions => Explanation::new(PERMISSIONS_CAPTIONS, PERMISSIONS_TEXT),
        }
    }
}

impl std::fmt::Display for ColumnSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::FileInfo => "file info",
            Self::Permissions => "permissions",
        })
    }
}
