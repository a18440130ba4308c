// SPDX-License-Identifier: GPL-3.0-only
//! Distribution resolution and launch configuration for an embedded MySQL
//! server used in tests.
pub mod config;
pub mod distribution;
pub mod logging;
pub mod resolver;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use config::{ConfigError, MysqldConfig, MysqldConfigBuilder, MysqldSettings};
pub use distribution::{ArchiveType, Distribution, FileSet, Platform, ResolveError, Version};
pub use resolver::{DownloadConfig, PackagePaths, PackageResolver, ResolvedArtifact};
