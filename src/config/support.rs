// SPDX-License-Identifier: GPL-3.0-only
use std::error::Error;

/// Identifies a kind of managed process for diagnostics
pub trait ProcessSupport: Send + Sync {
    /// Short process name used in logs
    fn name(&self) -> &str;

    /// Where users should report problems
    fn support_url(&self) -> &str;

    /// Message shown when launching or supervising the process fails
    fn message_on_exception(&self, error: &dyn Error) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MysqldSupport;

impl ProcessSupport for MysqldSupport {
    fn name(&self) -> &str {
        "mysqld"
    }

    fn support_url(&self) -> &str {
        "https://github.com/wix/wix-embedded-mysql/issues"
    }

    fn message_on_exception(&self, error: &dyn Error) -> String {
        format!("{} failed: {} (report at {})", self.name(), error, self.support_url())
    }
}
