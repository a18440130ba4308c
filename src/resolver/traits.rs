// SPDX-License-Identifier: GPL-3.0-only
use serde::Serialize;

use crate::distribution::{ArchiveType, Distribution, FileSet, ResolveError};

/// Everything a downloader needs to fetch and verify one archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedArtifact {
    pub file_set: FileSet,
    pub archive_type: ArchiveType,
    pub path: String,
}

pub trait PackageResolver: Send + Sync {
    /// Files expected inside the archive
    fn file_set(&self, distribution: &Distribution) -> Result<FileSet, ResolveError>;

    /// Compression/container format of the archive
    fn archive_type(&self, distribution: &Distribution) -> Result<ArchiveType, ResolveError>;

    /// Remote path of the archive, relative to the download mirror
    fn path(&self, distribution: &Distribution) -> Result<String, ResolveError>;

    fn resolve(&self, distribution: &Distribution) -> Result<ResolvedArtifact, ResolveError> {
        Ok(ResolvedArtifact {
            file_set: self.file_set(distribution)?,
            archive_type: self.archive_type(distribution)?,
            path: self.path(distribution)?,
        })
    }
}
