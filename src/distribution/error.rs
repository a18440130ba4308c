// SPDX-License-Identifier: GPL-3.0-only
use crate::distribution::{Platform, Version};

#[derive(thiserror::Error, Debug)]
pub enum ResolveError {
    #[error("Not implemented for platform {platform} (version {version})")]
    UnsupportedPlatform { platform: Platform, version: Version },

    #[error("Unrecognised host operating system: {0}")]
    UnknownHostOs(String),

    #[error("Unknown MySQL version: {0}")]
    UnknownVersion(String),

    #[error("Invalid download URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
