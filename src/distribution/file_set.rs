// SPDX-License-Identifier: GPL-3.0-only
use serde::Serialize;

use crate::distribution::{MajorVersion, Platform, Version};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// The server binary that gets launched
    Executable,
    /// Binaries and shared objects the server or its tooling needs
    Library,
    /// Data files such as error messages and bootstrap SQL
    Support,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSetEntry {
    pub kind: FileKind,
    pub path: String,
}

/// Files expected inside an extracted distribution archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileSet {
    entries: Vec<FileSetEntry>,
}

impl FileSet {
    /// Layout of the archive for `version` on `platform`.
    ///
    /// Callers are expected to have checked that the platform is supported
    /// and that the release was published for it.
    pub(crate) fn emit(platform: Platform, version: &Version) -> Self {
        let windows = platform == Platform::Windows;
        let exe = |name: &str| {
            if windows {
                format!("bin/{}.exe", name)
            } else {
                format!("bin/{}", name)
            }
        };

        let mut set = FileSet { entries: Vec::new() };
        set.push(FileKind::Executable, exe("mysqld"));
        set.push(FileKind::Library, exe("mysql"));
        set.push(FileKind::Library, exe("mysqladmin"));
        set.push(FileKind::Library, exe("my_print_defaults"));

        let major = version.major();
        if !windows && major <= MajorVersion::V5_7 {
            set.push(FileKind::Library, "bin/resolveip".to_string());
        }

        // Pre-5.7 servers are bootstrapped from SQL scripts; the Windows zip
        // ships an initialised data dir instead.
        if !windows && major <= MajorVersion::V5_6 {
            set.push(FileKind::Library, "scripts/mysql_install_db".to_string());
            set.push(FileKind::Support, "share/fill_help_tables.sql".to_string());
            set.push(FileKind::Support, "share/mysql_system_tables.sql".to_string());
            set.push(FileKind::Support, "share/mysql_system_tables_data.sql".to_string());
            if major == MajorVersion::V5_6 {
                set.push(FileKind::Support, "share/mysql_security_commands.sql".to_string());
            }
        }

        set.push(FileKind::Support, "share/english/errmsg.sys".to_string());

        if major == MajorVersion::V8_0 {
            let tls: [&str; 2] = match platform {
                Platform::Linux => ["lib/private/libcrypto.so.1.1", "lib/private/libssl.so.1.1"],
                Platform::OsX => ["lib/libcrypto.1.1.dylib", "lib/libssl.1.1.dylib"],
                _ => ["bin/libcrypto-1_1-x64.dll", "bin/libssl-1_1-x64.dll"],
            };
            for path in tls {
                set.push(FileKind::Library, path.to_string());
            }
        }

        set
    }

    fn push(&mut self, kind: FileKind, path: String) {
        self.entries.push(FileSetEntry { kind, path });
    }

    pub fn entries(&self) -> &[FileSetEntry] {
        &self.entries
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.path.as_str())
    }

    /// The entry for the `mysqld` binary
    pub fn executable(&self) -> Option<&FileSetEntry> {
        self.entries.iter().find(|e| e.kind == FileKind::Executable)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths().any(|p| p == path)
    }
}
