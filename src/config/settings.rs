// SPDX-License-Identifier: GPL-3.0-only
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::charset::Charset;
use crate::config::mysqld::{MysqldConfigBuilder, DEFAULT_PORT, DEFAULT_TEMP_DIR, DEFAULT_TIMEOUT};
use crate::config::server_variable::ServerVariable;
use crate::distribution::Version;
use crate::logging::LogFormat;
use crate::resolver::{DownloadConfig, DEFAULT_BASE_URL};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    pub name: String,
    pub password: String,
}

/// File/environment representation of the embedded server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MysqldSettings {
    /// MySQL version, either exact ("5.7.19") or a release line ("5.7")
    pub version: String,

    /// Fixed server port
    pub port: u16,

    /// Pick an ephemeral port instead of `port`
    pub free_port: bool,

    pub charset: String,
    pub collation: String,

    pub rw_user: UserSettings,
    pub ro_user: UserSettings,

    pub time_zone: String,

    /// Startup timeout in seconds
    pub timeout_secs: u64,

    /// Options passed to mysqld, in order
    pub server_variables: Vec<ServerVariable>,

    pub temp_dir: String,
    pub enforce_gtid: bool,

    /// Mirror the archives are fetched from
    pub download_base_url: String,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    pub log_format: LogFormat,
}

impl MysqldSettings {
    /// Load settings from TOML file with environment variable overrides
    pub fn load() -> anyhow::Result<Self> {
        let config_path = std::env::var("EMBEDDED_MYSQL_CONFIG")
            .unwrap_or_else(|_| "embedded-mysql.toml".to_string());

        let mut settings: MysqldSettings = if std::path::Path::new(&config_path).exists() {
            let contents = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read settings file: {}", config_path))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse settings file: {}", config_path))?
        } else {
            MysqldSettings::default()
        };

        if let Ok(val) = std::env::var("EMBEDDED_MYSQL_VERSION") {
            settings.version = val;
        }
        if let Ok(val) = std::env::var("EMBEDDED_MYSQL_PORT") {
            settings.port = val.parse().context("EMBEDDED_MYSQL_PORT is not a port number")?;
        }
        if let Ok(val) = std::env::var("EMBEDDED_MYSQL_TIMEOUT_SECS") {
            settings.timeout_secs = val.parse().context("EMBEDDED_MYSQL_TIMEOUT_SECS is not a number")?;
        }
        if let Ok(val) = std::env::var("EMBEDDED_MYSQL_TIME_ZONE") {
            settings.time_zone = val;
        }
        if let Ok(val) = std::env::var("EMBEDDED_MYSQL_TEMP_DIR") {
            settings.temp_dir = val;
        }
        if let Ok(val) = std::env::var("EMBEDDED_MYSQL_ENFORCE_GTID") {
            settings.enforce_gtid = val.parse().context("EMBEDDED_MYSQL_ENFORCE_GTID is not a boolean")?;
        }
        if let Ok(val) = std::env::var("EMBEDDED_MYSQL_DOWNLOAD_BASE_URL") {
            settings.download_base_url = val;
        }
        if let Ok(val) = std::env::var("EMBEDDED_MYSQL_LOG_LEVEL") {
            settings.log_level = val;
        }
        if let Ok(val) = std::env::var("EMBEDDED_MYSQL_LOG_FORMAT") {
            settings.log_format = val.parse()?;
        }

        Ok(settings)
    }

    pub fn version(&self) -> anyhow::Result<Version> {
        self.version
            .parse()
            .with_context(|| format!("Invalid version in settings: {}", self.version))
    }

    /// Turn the settings into a builder; validation happens at `build()`
    pub fn into_builder(self) -> anyhow::Result<MysqldConfigBuilder> {
        let mut builder = MysqldConfigBuilder::new(self.version()?)
            .with_charset(Charset::of(self.charset, self.collation))
            .with_rw_user(self.rw_user.name, self.rw_user.password)
            .with_ro_user(self.ro_user.name, self.ro_user.password)
            .with_time_zone_id(self.time_zone)
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_temp_dir(self.temp_dir)
            .with_enforce_gtid(self.enforce_gtid);

        builder = if self.free_port {
            builder.with_free_port().context("Failed to acquire a free port")?
        } else {
            builder.with_port(self.port)
        };

        for variable in self.server_variables {
            builder = builder.with_server_variable(variable.name, variable.value);
        }

        Ok(builder)
    }

    pub fn download_config(&self) -> anyhow::Result<DownloadConfig> {
        DownloadConfig::new(&self.download_base_url)
            .with_context(|| format!("Invalid download base URL: {}", self.download_base_url))
    }
}

impl Default for MysqldSettings {
    fn default() -> Self {
        let charset = Charset::defaults();
        Self {
            version: String::from("5.7"),
            port: DEFAULT_PORT,
            free_port: false,
            charset: charset.charset().to_string(),
            collation: charset.collate().to_string(),
            rw_user: UserSettings { name: String::from("rwUser"), password: String::from("rw") },
            ro_user: UserSettings { name: String::from("roUser"), password: String::from("ro") },
            time_zone: String::from("UTC"),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            server_variables: Vec::new(),
            temp_dir: String::from(DEFAULT_TEMP_DIR),
            enforce_gtid: true,
            download_base_url: String::from(DEFAULT_BASE_URL),
            log_level: String::from("info"),
            log_format: LogFormat::Pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::test_helpers::{remove_env_var, set_env_var, EnvGuard, SETTINGS_ENV_VARS};
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_settings_match_builder_defaults() {
        let from_settings = MysqldSettings::default().into_builder().unwrap().build().unwrap();
        let from_builder = MysqldConfigBuilder::new(Version::V5_7_19).build().unwrap();

        assert_eq!(from_settings.version(), from_builder.version());
        assert_eq!(from_settings.port(), from_builder.port());
        assert_eq!(from_settings.charset(), from_builder.charset());
        assert_eq!(from_settings.rw_user(), from_builder.rw_user());
        assert_eq!(from_settings.ro_user(), from_builder.ro_user());
        assert_eq!(from_settings.time_zone(), from_builder.time_zone());
        assert_eq!(from_settings.timeout(), from_builder.timeout());
        assert_eq!(from_settings.temp_dir(), from_builder.temp_dir());
        assert_eq!(from_settings.enforce_gtid(), from_builder.enforce_gtid());
    }

    #[test]
    fn test_load_missing_config_file() {
        let _guard = EnvGuard::acquire();
        for key in SETTINGS_ENV_VARS {
            remove_env_var(key);
        }
        set_env_var("EMBEDDED_MYSQL_CONFIG", "/nonexistent/embedded-mysql.toml");

        let settings = MysqldSettings::load().unwrap();
        assert_eq!(settings.version, "5.7");
        assert_eq!(settings.port, 3310);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn test_load_from_toml() {
        let _guard = EnvGuard::acquire();
        let temp_file = NamedTempFile::new().unwrap();
        let config_content = r#"
version = "8.0.18"
port = 13306
charset = "utf8mb4"
collation = "utf8mb4_unicode_ci"
time_zone = "Europe/Vilnius"
timeout_secs = 120
enforce_gtid = false
download_base_url = "https://mirror.example.com/mysql/"
log_level = "debug"
log_format = "json"

[rw_user]
name = "app"
password = "app-pass"

[[server_variables]]
name = "skip-grant-tables"
value = true

[[server_variables]]
name = "max_connections"
value = 100

[[server_variables]]
name = "sql_mode"
value = "ANSI"
"#;
        fs::write(temp_file.path(), config_content).unwrap();

        for key in SETTINGS_ENV_VARS {
            remove_env_var(key);
        }
        set_env_var("EMBEDDED_MYSQL_CONFIG", temp_file.path().to_str().unwrap());

        let settings = MysqldSettings::load().unwrap();
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.log_format, LogFormat::Json);
        assert_eq!(
            settings.download_config().unwrap().base_url().as_str(),
            "https://mirror.example.com/mysql/"
        );

        let config = settings.into_builder().unwrap().build().unwrap();
        assert_eq!(config.version(), Version::V8_0_18);
        assert_eq!(config.port(), 13306);
        assert_eq!(config.charset(), &Charset::UTF8MB4);
        assert_eq!(config.rw_user().name(), "app");
        // Unset tables keep their defaults
        assert_eq!(config.ro_user().name(), "roUser");
        assert_eq!(config.time_zone().id(), "Europe/Vilnius");
        assert_eq!(config.timeout().as_secs(), 120);
        assert!(!config.enforce_gtid());
        assert_eq!(
            config.server_variable_args(),
            vec!["--skip-grant-tables=true", "--max_connections=100", "--sql_mode=ANSI"]
        );
    }

    #[test]
    fn test_env_var_overrides_file() {
        let _guard = EnvGuard::acquire();
        let temp_file = NamedTempFile::new().unwrap();
        fs::write(temp_file.path(), "port = 4000\nversion = \"5.6\"\n").unwrap();

        for key in SETTINGS_ENV_VARS {
            remove_env_var(key);
        }
        set_env_var("EMBEDDED_MYSQL_CONFIG", temp_file.path().to_str().unwrap());
        set_env_var("EMBEDDED_MYSQL_PORT", "5000");
        set_env_var("EMBEDDED_MYSQL_VERSION", "8.0.11");
        set_env_var("EMBEDDED_MYSQL_ENFORCE_GTID", "false");
        set_env_var("EMBEDDED_MYSQL_TIMEOUT_SECS", "5");
        set_env_var("EMBEDDED_MYSQL_TEMP_DIR", "/tmp/env");
        set_env_var("EMBEDDED_MYSQL_LOG_LEVEL", "trace");

        let settings = MysqldSettings::load().unwrap();
        assert_eq!(settings.port, 5000);
        assert_eq!(settings.version().unwrap(), Version::V8_0_11);
        assert!(!settings.enforce_gtid);
        assert_eq!(settings.timeout_secs, 5);
        assert_eq!(settings.temp_dir, "/tmp/env");
        assert_eq!(settings.log_level, "trace");

        for key in SETTINGS_ENV_VARS {
            remove_env_var(key);
        }
    }

    #[test]
    fn test_invalid_port_env_var() {
        let _guard = EnvGuard::acquire();
        for key in SETTINGS_ENV_VARS {
            remove_env_var(key);
        }
        set_env_var("EMBEDDED_MYSQL_CONFIG", "/nonexistent/embedded-mysql.toml");
        set_env_var("EMBEDDED_MYSQL_PORT", "not-a-port");

        assert!(MysqldSettings::load().is_err());

        remove_env_var("EMBEDDED_MYSQL_PORT");
    }

    #[test]
    fn test_unknown_version_is_an_error() {
        let settings = MysqldSettings { version: "9.9".to_string(), ..Default::default() };
        assert!(settings.into_builder().is_err());
    }

    #[test]
    fn test_root_user_in_settings_fails_at_build() {
        let settings = MysqldSettings {
            ro_user: UserSettings { name: "root".to_string(), password: String::new() },
            ..Default::default()
        };
        let builder = settings.into_builder().unwrap();
        assert!(matches!(builder.build(), Err(ConfigError::ReservedUsername { .. })));
    }

    #[test]
    fn test_free_port_setting() {
        let settings = MysqldSettings { free_port: true, port: 1, ..Default::default() };
        let config = settings.into_builder().unwrap().build().unwrap();
        assert_ne!(config.port(), 1);
        assert_ne!(config.port(), 0);
    }
}
