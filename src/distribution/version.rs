// SPDX-License-Identifier: GPL-3.0-only
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::distribution::error::ResolveError;
use crate::distribution::Platform;

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v?(\d+)\.(\d+)(?:\.(\d+))?$").expect("version pattern is valid")
});

/// Container/compression format of a downloadable archive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveType {
    Tgz,
    Txz,
    Zip,
}

impl ArchiveType {
    pub fn extension(&self) -> &'static str {
        match self {
            ArchiveType::Tgz => "tar.gz",
            ArchiveType::Txz => "tar.xz",
            ArchiveType::Zip => "zip",
        }
    }
}

/// MySQL release line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MajorVersion {
    V5_5,
    V5_6,
    V5_7,
    V8_0,
}

impl MajorVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            MajorVersion::V5_5 => "5.5",
            MajorVersion::V5_6 => "5.6",
            MajorVersion::V5_7 => "5.7",
            MajorVersion::V8_0 => "8.0",
        }
    }

    fn from_parts(major: &str, minor: &str) -> Option<Self> {
        match (major, minor) {
            ("5", "5") => Some(MajorVersion::V5_5),
            ("5", "6") => Some(MajorVersion::V5_6),
            ("5", "7") => Some(MajorVersion::V5_7),
            ("8", "0") => Some(MajorVersion::V8_0),
            _ => None,
        }
    }
}

impl fmt::Display for MajorVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const UNIX_ONLY: &[Platform] = &[Platform::Linux, Platform::OsX];
const ALL: &[Platform] = &[Platform::Linux, Platform::OsX, Platform::Windows];

/// A published MySQL release together with the packaging facts needed to
/// locate its archives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    major: MajorVersion,
    patch: u16,
    /// macOS build qualifier as it appears in the archive name
    macos: &'static str,
    /// glibc qualifier of the generic Linux build
    glibc: &'static str,
    /// Compression used for the Linux archive
    archive_type: ArchiveType,
    platforms: &'static [Platform],
}

const fn release(
    major: MajorVersion,
    patch: u16,
    macos: &'static str,
    glibc: &'static str,
    archive_type: ArchiveType,
    platforms: &'static [Platform],
) -> Version {
    Version { major, patch, macos, glibc, archive_type, platforms }
}

impl Version {
    pub const V5_5_40: Version = release(MajorVersion::V5_5, 40, "osx10.6", "glibc2.5", ArchiveType::Tgz, UNIX_ONLY);
    pub const V5_5_50: Version = release(MajorVersion::V5_5, 50, "osx10.9", "glibc2.5", ArchiveType::Tgz, UNIX_ONLY);
    pub const V5_5_51: Version = release(MajorVersion::V5_5, 51, "osx10.9", "glibc2.5", ArchiveType::Tgz, UNIX_ONLY);
    pub const V5_5_52: Version = release(MajorVersion::V5_5, 52, "osx10.9", "glibc2.5", ArchiveType::Tgz, UNIX_ONLY);

    pub const V5_6_21: Version = release(MajorVersion::V5_6, 21, "osx10.8", "glibc2.5", ArchiveType::Tgz, ALL);
    pub const V5_6_22: Version = release(MajorVersion::V5_6, 22, "osx10.8", "glibc2.5", ArchiveType::Tgz, ALL);
    pub const V5_6_23: Version = release(MajorVersion::V5_6, 23, "osx10.8", "glibc2.5", ArchiveType::Tgz, ALL);
    pub const V5_6_24: Version = release(MajorVersion::V5_6, 24, "osx10.8", "glibc2.5", ArchiveType::Tgz, ALL);
    pub const V5_6_31: Version = release(MajorVersion::V5_6, 31, "osx10.11", "glibc2.5", ArchiveType::Tgz, ALL);
    pub const V5_6_32: Version = release(MajorVersion::V5_6, 32, "osx10.11", "glibc2.5", ArchiveType::Tgz, ALL);
    pub const V5_6_33: Version = release(MajorVersion::V5_6, 33, "osx10.11", "glibc2.5", ArchiveType::Tgz, ALL);
    pub const V5_6_34: Version = release(MajorVersion::V5_6, 34, "osx10.11", "glibc2.5", ArchiveType::Tgz, ALL);
    pub const V5_6_35: Version = release(MajorVersion::V5_6, 35, "osx10.12", "glibc2.5", ArchiveType::Tgz, ALL);
    pub const V5_6_36: Version = release(MajorVersion::V5_6, 36, "macos10.12", "glibc2.5", ArchiveType::Tgz, ALL);

    pub const V5_7_10: Version = release(MajorVersion::V5_7, 10, "osx10.10", "glibc2.5", ArchiveType::Tgz, ALL);
    pub const V5_7_13: Version = release(MajorVersion::V5_7, 13, "osx10.11", "glibc2.5", ArchiveType::Tgz, ALL);
    pub const V5_7_14: Version = release(MajorVersion::V5_7, 14, "osx10.11", "glibc2.5", ArchiveType::Tgz, ALL);
    pub const V5_7_15: Version = release(MajorVersion::V5_7, 15, "osx10.11", "glibc2.5", ArchiveType::Tgz, ALL);
    pub const V5_7_16: Version = release(MajorVersion::V5_7, 16, "osx10.11", "glibc2.5", ArchiveType::Tgz, ALL);
    pub const V5_7_17: Version = release(MajorVersion::V5_7, 17, "macos10.12", "glibc2.5", ArchiveType::Tgz, ALL);
    pub const V5_7_18: Version = release(MajorVersion::V5_7, 18, "macos10.12", "glibc2.5", ArchiveType::Tgz, ALL);
    pub const V5_7_19: Version = release(MajorVersion::V5_7, 19, "macos10.12", "glibc2.12", ArchiveType::Tgz, ALL);

    pub const V8_0_11: Version = release(MajorVersion::V8_0, 11, "macos10.13", "glibc2.12", ArchiveType::Tgz, ALL);
    pub const V8_0_12: Version = release(MajorVersion::V8_0, 12, "macos10.13", "glibc2.12", ArchiveType::Txz, ALL);
    pub const V8_0_13: Version = release(MajorVersion::V8_0, 13, "macos10.14", "glibc2.12", ArchiveType::Txz, ALL);
    pub const V8_0_17: Version = release(MajorVersion::V8_0, 17, "macos10.14", "glibc2.12", ArchiveType::Txz, ALL);
    pub const V8_0_18: Version = release(MajorVersion::V8_0, 18, "macos10.14", "glibc2.12", ArchiveType::Txz, ALL);

    const KNOWN: &'static [Version] = &[
        Self::V5_5_40, Self::V5_5_50, Self::V5_5_51, Self::V5_5_52,
        Self::V5_6_21, Self::V5_6_22, Self::V5_6_23, Self::V5_6_24,
        Self::V5_6_31, Self::V5_6_32, Self::V5_6_33, Self::V5_6_34,
        Self::V5_6_35, Self::V5_6_36,
        Self::V5_7_10, Self::V5_7_13, Self::V5_7_14, Self::V5_7_15,
        Self::V5_7_16, Self::V5_7_17, Self::V5_7_18, Self::V5_7_19,
        Self::V8_0_11, Self::V8_0_12, Self::V8_0_13, Self::V8_0_17,
        Self::V8_0_18,
    ];

    /// All known releases, oldest first
    pub fn known() -> &'static [Version] {
        Self::KNOWN
    }

    /// Newest known release of a major line
    pub fn latest(major: MajorVersion) -> Option<Version> {
        Self::KNOWN
            .iter()
            .filter(|v| v.major == major)
            .max_by_key(|v| v.patch)
            .copied()
    }

    pub fn major(&self) -> MajorVersion {
        self.major
    }

    pub fn patch(&self) -> u16 {
        self.patch
    }

    /// Preferred compression scheme of this release's Linux archive
    pub fn archive_type(&self) -> ArchiveType {
        self.archive_type
    }

    pub fn supports(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }

    /// Platform-qualified download path stem, without the archive suffix.
    ///
    /// Returns `None` for platforms MySQL does not publish archives for.
    pub fn download_path(&self, platform: Platform) -> Option<String> {
        let dir = format!("MySQL-{}", self.major);
        match platform {
            Platform::OsX => Some(format!("{}/mysql-{}-{}-x86_64", dir, self, self.macos)),
            Platform::Linux => Some(format!("{}/mysql-{}-linux-{}-x86_64", dir, self, self.glibc)),
            Platform::Windows => Some(format!("{}/mysql-{}-winx64", dir, self)),
            Platform::Solaris | Platform::FreeBsd => None,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.patch)
    }
}

impl FromStr for Version {
    type Err = ResolveError;

    /// Accepts `5.7.19` for an exact release or `5.7` for the latest of a line
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ResolveError::UnknownVersion(s.to_string());

        let caps = VERSION_RE.captures(s.trim()).ok_or_else(unknown)?;
        let major = MajorVersion::from_parts(&caps[1], &caps[2]).ok_or_else(unknown)?;

        match caps.get(3) {
            None => Version::latest(major).ok_or_else(unknown),
            Some(patch) => {
                let patch: u16 = patch.as_str().parse().map_err(|_| unknown())?;
                Self::KNOWN
                    .iter()
                    .find(|v| v.major == major && v.patch == patch)
                    .copied()
                    .ok_or_else(unknown)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Version::V5_7_19.to_string(), "5.7.19");
        assert_eq!(Version::V8_0_11.to_string(), "8.0.11");
    }

    #[test]
    fn test_parse_exact_release() {
        assert_eq!("5.6.24".parse::<Version>().unwrap(), Version::V5_6_24);
        assert_eq!("v8.0.18".parse::<Version>().unwrap(), Version::V8_0_18);
    }

    #[test]
    fn test_parse_major_line_picks_latest() {
        assert_eq!("5.5".parse::<Version>().unwrap(), Version::V5_5_52);
        assert_eq!("5.7".parse::<Version>().unwrap(), Version::V5_7_19);
        assert_eq!("8.0".parse::<Version>().unwrap(), Version::V8_0_18);
    }

    #[test]
    fn test_every_major_line_has_a_release() {
        for major in [MajorVersion::V5_5, MajorVersion::V5_6, MajorVersion::V5_7, MajorVersion::V8_0] {
            let latest = Version::latest(major).unwrap();
            assert_eq!(latest.major(), major);
        }
        assert_eq!(Version::latest(MajorVersion::V5_6), Some(Version::V5_6_36));
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!("5.7.99".parse::<Version>(), Err(ResolveError::UnknownVersion(_))));
        assert!(matches!("4.1".parse::<Version>(), Err(ResolveError::UnknownVersion(_))));
        assert!(matches!("latest".parse::<Version>(), Err(ResolveError::UnknownVersion(_))));
    }

    #[test]
    fn test_known_is_sorted_oldest_first() {
        let keys: Vec<_> = Version::known().iter().map(|v| (v.major(), v.patch())).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_download_path_per_platform() {
        let v = Version::V5_7_19;
        assert_eq!(
            v.download_path(Platform::Linux).unwrap(),
            "MySQL-5.7/mysql-5.7.19-linux-glibc2.12-x86_64"
        );
        assert_eq!(
            v.download_path(Platform::OsX).unwrap(),
            "MySQL-5.7/mysql-5.7.19-macos10.12-x86_64"
        );
        assert_eq!(v.download_path(Platform::Windows).unwrap(), "MySQL-5.7/mysql-5.7.19-winx64");
        assert_eq!(v.download_path(Platform::Solaris), None);
    }

    #[test]
    fn test_archive_type_is_per_release() {
        assert_eq!(Version::V8_0_11.archive_type(), ArchiveType::Tgz);
        assert_eq!(Version::V8_0_12.archive_type(), ArchiveType::Txz);
        assert_eq!(Version::V5_7_19.archive_type(), ArchiveType::Tgz);
    }

    #[test]
    fn test_five_five_has_no_windows_build() {
        assert!(!Version::V5_5_52.supports(Platform::Windows));
        assert!(Version::V5_5_52.supports(Platform::Linux));
        assert!(Version::V5_6_36.supports(Platform::Windows));
    }
}
