// SPDX-License-Identifier: GPL-3.0-only
pub mod error;
pub mod file_set;
pub mod platform;
pub mod version;

pub use error::ResolveError;
pub use file_set::{FileKind, FileSet, FileSetEntry};
pub use platform::Platform;
pub use version::{ArchiveType, MajorVersion, Version};

use std::fmt;

/// A release built for one platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Distribution {
    pub platform: Platform,
    pub version: Version,
}

impl Distribution {
    pub fn new(platform: Platform, version: Version) -> Self {
        Self { platform, version }
    }

    /// Pair `version` with the platform of the running host
    pub fn detect(version: Version) -> Result<Self, ResolveError> {
        Ok(Self::new(Platform::detect()?, version))
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.version, self.platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_display() {
        let dist = Distribution::new(Platform::OsX, Version::V8_0_11);
        assert_eq!(dist.to_string(), "8.0.11:OS_X");
    }
}
