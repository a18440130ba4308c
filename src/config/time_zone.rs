// SPDX-License-Identifier: GPL-3.0-only
use std::fmt;

/// Server time zone id, passed to mysqld as given.
///
/// Any id the server understands is accepted (`UTC`, `CET`, `EST5EDT`,
/// `Europe/Vilnius`, `+02:00`, ...). Resolving it is left to mysqld at launch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeZone(String);

impl TimeZone {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn utc() -> Self {
        Self::new("UTC")
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl Default for TimeZone {
    fn default() -> Self {
        Self::utc()
    }
}

impl From<&str> for TimeZone {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TimeZone {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
