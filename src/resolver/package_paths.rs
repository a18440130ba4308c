// SPDX-License-Identifier: GPL-3.0-only
use tracing::debug;

use crate::distribution::{ArchiveType, Distribution, FileSet, Platform, ResolveError};
use crate::resolver::traits::PackageResolver;

/// Resolves MySQL archive names as published on the official mirrors
#[derive(Debug, Clone, Copy, Default)]
pub struct PackagePaths;

impl PackagePaths {
    pub fn new() -> Self {
        Self
    }

    fn ensure_supported(distribution: &Distribution) -> Result<(), ResolveError> {
        let Distribution { platform, version } = *distribution;
        if platform.is_supported() && version.supports(platform) {
            Ok(())
        } else {
            Err(ResolveError::UnsupportedPlatform { platform, version })
        }
    }
}

impl PackageResolver for PackagePaths {
    fn file_set(&self, distribution: &Distribution) -> Result<FileSet, ResolveError> {
        Self::ensure_supported(distribution)?;
        Ok(FileSet::emit(distribution.platform, &distribution.version))
    }

    fn archive_type(&self, distribution: &Distribution) -> Result<ArchiveType, ResolveError> {
        Self::ensure_supported(distribution)?;
        Ok(match distribution.platform {
            Platform::OsX => ArchiveType::Tgz,
            Platform::Windows => ArchiveType::Zip,
            _ => distribution.version.archive_type(),
        })
    }

    fn path(&self, distribution: &Distribution) -> Result<String, ResolveError> {
        Self::ensure_supported(distribution)?;
        let Distribution { platform, version } = *distribution;

        let stem = version
            .download_path(platform)
            .ok_or(ResolveError::UnsupportedPlatform { platform, version })?;

        let path = match platform {
            Platform::OsX => format!("{}.tar.gz", stem),
            Platform::Linux => {
                let gz_or_xz = if version.archive_type() == ArchiveType::Txz { "xz" } else { "gz" };
                format!("{}.tar.{}", stem, gz_or_xz)
            }
            Platform::Windows => format!("{}.zip", stem),
            Platform::Solaris | Platform::FreeBsd => {
                return Err(ResolveError::UnsupportedPlatform { platform, version });
            }
        };

        debug!(distribution = %distribution, path = %path, "Resolved distribution path");
        Ok(path)
    }
}
