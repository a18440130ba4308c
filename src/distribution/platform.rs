// SPDX-License-Identifier: GPL-3.0-only
use serde::Serialize;
use std::fmt;

use crate::distribution::error::ResolveError;

/// Operating system a distribution is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Platform {
    #[serde(rename = "OS_X")]
    OsX,
    Linux,
    Windows,
    Solaris,
    #[serde(rename = "FreeBSD")]
    FreeBsd,
}

impl Platform {
    /// Platforms for which MySQL archives are published
    pub const SUPPORTED: [Platform; 3] = [Platform::OsX, Platform::Linux, Platform::Windows];

    /// Detect the platform of the running host
    pub fn detect() -> Result<Self, ResolveError> {
        Self::from_os(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` value to a platform
    pub fn from_os(os: &str) -> Result<Self, ResolveError> {
        match os {
            "macos" => Ok(Platform::OsX),
            "linux" => Ok(Platform::Linux),
            "windows" => Ok(Platform::Windows),
            "solaris" | "illumos" => Ok(Platform::Solaris),
            "freebsd" => Ok(Platform::FreeBsd),
            other => Err(ResolveError::UnknownHostOs(other.to_string())),
        }
    }

    pub fn is_supported(&self) -> bool {
        Self::SUPPORTED.contains(self)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::OsX => "OS_X",
            Platform::Linux => "Linux",
            Platform::Windows => "Windows",
            Platform::Solaris => "Solaris",
            Platform::FreeBsd => "FreeBSD",
        };
        f.write_str(name)
    }
}
