// crates/infra/src/filesystem.rs
use std::{io, path::Path};

use fileinfo_domain::PathRecord;
use fileinfo_ports::metadata::{Lookup, MetadataSource};
use fileinfo_shared_kernel::{FileSize, InfraResult, InfrastructureError, ModificationTime};

use crate::platform;

/// Metadata source backed by `std::fs::metadata`; symlinks are followed.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdMetadataSource;

impl StdMetadataSource {
    pub fn new() -> Self {
        Self
    }
}

impl MetadataSource for StdMetadataSource {
    fn lookup(&self, path: &Path) -> InfraResult<Lookup> {
        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Lookup::Missing),
            Err(source) => return Err(metadata_error(path, source)),
        };

        let modified = metadata.modified().map_err(|source| metadata_error(path, source))?;
        let record = PathRecord::new(
            path,
            platform::entry_kind(&metadata),
            FileSize::new(metadata.len()),
            platform::inode(&metadata),
            ModificationTime::from(modified),
            platform::permission_bits(&metadata),
        );
        log::debug!(
            "Queried {}: size={} inode={} mode={}",
            path.display(),
            record.size(),
            record.inode(),
            record.permissions()
        );
        Ok(Lookup::Found(record))
    }
}

fn metadata_error(path: &Path, source: io::Error) -> InfrastructureError {
    InfrastructureError::Metadata {
        path: path.to_path_buf(),
        source,
    }
}
