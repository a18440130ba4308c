// SPDX-License-Identifier: GPL-3.0-only
use std::fmt;

/// Which credential pair a validation error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    ReadWrite,
    ReadOnly,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::ReadWrite => f.write_str("read-write"),
            UserRole::ReadOnly => f.write_str("read-only"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Usage of username '{username}' for the {role} user is forbidden as it's reserved for system use")]
    ReservedUsername { role: UserRole, username: String },
}
