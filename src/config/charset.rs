// SPDX-License-Identifier: GPL-3.0-only
use std::borrow::Cow;
use std::fmt;

/// Server character set and collation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Charset {
    charset: Cow<'static, str>,
    collate: Cow<'static, str>,
}

impl Charset {
    pub const UTF8: Charset = Charset::from_static("utf8", "utf8_general_ci");
    pub const UTF8MB4: Charset = Charset::from_static("utf8mb4", "utf8mb4_unicode_ci");
    pub const LATIN1: Charset = Charset::from_static("latin1", "latin1_swedish_ci");

    const fn from_static(charset: &'static str, collate: &'static str) -> Self {
        Self {
            charset: Cow::Borrowed(charset),
            collate: Cow::Borrowed(collate),
        }
    }

    pub fn of(charset: impl Into<String>, collate: impl Into<String>) -> Self {
        Self {
            charset: Cow::Owned(charset.into()),
            collate: Cow::Owned(collate.into()),
        }
    }

    pub fn defaults() -> Self {
        Self::UTF8
    }

    pub fn charset(&self) -> &str {
        &self.charset
    }

    pub fn collate(&self) -> &str {
        &self.collate
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::defaults()
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.charset, self.collate)
    }
}
