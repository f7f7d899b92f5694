// crates/ports/src/metadata.rs
use std::path::Path;

use fileinfo_domain::PathRecord;
use fileinfo_shared_kernel::InfraResult;

/// Outcome of a single metadata query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(PathRecord),
    /// Nothing exists at the path.
    Missing,
}

/// Port for querying filesystem metadata.
///
/// Existence and metadata come from one call, so a path cannot vanish
/// between the two. Every failure other than "not found" is an error.
pub trait MetadataSource {
    fn lookup(&self, path: &Path) -> InfraResult<Lookup>;
}
