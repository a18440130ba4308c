// SPDX-License-Identifier: GPL-3.0-only
pub mod traits;
pub mod package_paths;
pub mod download;

pub use traits::{PackageResolver, ResolvedArtifact};
pub use package_paths::PackagePaths;
pub use download::{DownloadConfig, DEFAULT_BASE_URL};
pub use crate::distribution::ResolveError;
