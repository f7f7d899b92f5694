use serde::{Deserialize, Serialize};

pub use crate::report::TabLayout;

/// How resolved records are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// FILE_INFO and PERMISSIONS tables, optionally explained.
    #[default]
    Table,
    /// Pretty-printed JSON array of records.
    Json,
}

/// Read-only mode flags computed once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputMode {
    pub verbose: bool,
    pub debug: bool,
}

impl OutputMode {
    #[must_use]
    pub const fn new(verbose: bool, debug: bool) -> Self {
        Self { verbose, debug }
    }
}
