// SPDX-License-Identifier: GPL-3.0-only
use std::sync::{Mutex, MutexGuard};

/// Every environment variable `MysqldSettings::load` reads
pub const SETTINGS_ENV_VARS: [&str; 10] = [
    "EMBEDDED_MYSQL_CONFIG",
    "EMBEDDED_MYSQL_VERSION",
    "EMBEDDED_MYSQL_PORT",
    "EMBEDDED_MYSQL_TIMEOUT_SECS",
    "EMBEDDED_MYSQL_TIME_ZONE",
    "EMBEDDED_MYSQL_TEMP_DIR",
    "EMBEDDED_MYSQL_ENFORCE_GTID",
    "EMBEDDED_MYSQL_DOWNLOAD_BASE_URL",
    "EMBEDDED_MYSQL_LOG_LEVEL",
    "EMBEDDED_MYSQL_LOG_FORMAT",
];

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serialises tests that touch process environment variables
pub struct EnvGuard {
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    pub fn acquire() -> Self {
        // A panicking test poisons the lock; the environment is reset by the next holder anyway
        let lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Self { _lock: lock }
    }
}

// Helper functions to safely modify environment variables in tests
pub fn set_env_var(key: &str, value: &str) {
    unsafe {
        std::env::set_var(key, value);
    }
}

pub fn remove_env_var(key: &str) {
    unsafe {
        std::env::remove_var(key);
    }
}
