// SPDX-License-Identifier: GPL-3.0-only
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::config::charset::Charset;
use crate::config::error::{ConfigError, UserRole};
use crate::config::server_variable::{ServerVariable, ServerVariableValue};
use crate::config::support::{MysqldSupport, ProcessSupport};
use crate::config::time_zone::TimeZone;
use crate::config::user::User;
use crate::distribution::Version;
use crate::utils::find_free_port;

/// Accounts that belong to the server itself
pub struct SystemDefaults;

impl SystemDefaults {
    pub const USERNAME: &'static str = "root";
}

pub const DEFAULT_PORT: u16 = 3310;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_TEMP_DIR: &str = "target/";

/// Validated settings for launching one `mysqld` instance.
///
/// Values are fixed at construction; use [`MysqldConfig::builder`] to
/// produce a different configuration.
#[derive(Clone)]
pub struct MysqldConfig {
    version: Version,
    port: u16,
    charset: Charset,
    rw_user: User,
    ro_user: User,
    time_zone: TimeZone,
    timeout: Duration,
    server_variables: Vec<ServerVariable>,
    temp_dir: String,
    enforce_gtid: bool,
    support: Arc<dyn ProcessSupport>,
}

impl MysqldConfig {
    pub fn builder(version: Version) -> MysqldConfigBuilder {
        MysqldConfigBuilder::new(version)
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn charset(&self) -> &Charset {
        &self.charset
    }

    pub fn rw_user(&self) -> &User {
        &self.rw_user
    }

    pub fn ro_user(&self) -> &User {
        &self.ro_user
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    /// Startup timeout; convert with `as_secs`, `as_millis`, etc.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn server_variables(&self) -> &[ServerVariable] {
        &self.server_variables
    }

    /// `--name=value` tokens, in the order the variables were added
    pub fn server_variable_args(&self) -> Vec<String> {
        self.server_variables
            .iter()
            .map(ServerVariable::to_command_line_argument)
            .collect()
    }

    pub fn temp_dir(&self) -> &str {
        &self.temp_dir
    }

    pub fn enforce_gtid(&self) -> bool {
        self.enforce_gtid
    }

    pub fn support(&self) -> &dyn ProcessSupport {
        self.support.as_ref()
    }
}

impl fmt::Debug for MysqldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MysqldConfig")
            .field("version", &self.version.to_string())
            .field("port", &self.port)
            .field("charset", &self.charset)
            .field("rw_user", &self.rw_user.name())
            .field("ro_user", &self.ro_user.name())
            .field("time_zone", &self.time_zone.id())
            .field("timeout", &self.timeout)
            .field("server_variables", &self.server_variables)
            .field("temp_dir", &self.temp_dir)
            .field("enforce_gtid", &self.enforce_gtid)
            .field("support", &self.support.name())
            .finish()
    }
}

impl fmt::Display for MysqldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} on port {} (rw user: {}, ro user: {}, charset: {}, tz: {})",
            self.support.name(),
            self.version,
            self.port,
            self.rw_user.name(),
            self.ro_user.name(),
            self.charset,
            self.time_zone,
        )
    }
}

/// Staging area for a [`MysqldConfig`].
///
/// Not synchronised: a builder belongs to a single owner while options are
/// being collected.
#[derive(Clone)]
pub struct MysqldConfigBuilder {
    version: Version,
    port: u16,
    charset: Charset,
    rw_user: User,
    ro_user: User,
    time_zone: TimeZone,
    timeout: Duration,
    server_variables: Vec<ServerVariable>,
    temp_dir: String,
    enforce_gtid: bool,
    support: Arc<dyn ProcessSupport>,
}

impl MysqldConfigBuilder {
    pub fn new(version: Version) -> Self {
        Self {
            version,
            port: DEFAULT_PORT,
            charset: Charset::defaults(),
            rw_user: User::new("rwUser", "rw"),
            ro_user: User::new("roUser", "ro"),
            time_zone: TimeZone::utc(),
            timeout: DEFAULT_TIMEOUT,
            server_variables: Vec::new(),
            temp_dir: DEFAULT_TEMP_DIR.to_string(),
            enforce_gtid: true,
            support: Arc::new(MysqldSupport),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Use a port the OS reports as free right now
    pub fn with_free_port(self) -> std::io::Result<Self> {
        let port = find_free_port()?;
        Ok(self.with_port(port))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    pub fn with_rw_user(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.rw_user = User::new(username, password);
        self
    }

    pub fn with_ro_user(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.ro_user = User::new(username, password);
        self
    }

    pub fn with_time_zone(mut self, time_zone: TimeZone) -> Self {
        self.time_zone = time_zone;
        self
    }

    /// Set the time zone by id; mysqld resolves the id at launch
    pub fn with_time_zone_id(mut self, time_zone_id: impl Into<String>) -> Self {
        self.time_zone = TimeZone::new(time_zone_id);
        self
    }

    /// Append a `mysqld` option. Repeated calls keep insertion order.
    pub fn with_server_variable(
        mut self,
        name: impl Into<String>,
        value: impl Into<ServerVariableValue>,
    ) -> Self {
        self.server_variables.push(ServerVariable::new(name, value));
        self
    }

    pub fn with_temp_dir(mut self, temp_dir: impl Into<String>) -> Self {
        self.temp_dir = temp_dir.into();
        self
    }

    pub fn with_enforce_gtid(mut self, enforce_gtid: bool) -> Self {
        self.enforce_gtid = enforce_gtid;
        self
    }

    pub fn with_support(mut self, support: Arc<dyn ProcessSupport>) -> Self {
        self.support = support;
        self
    }

    /// Validate the collected options and snapshot them.
    ///
    /// The builder stays usable after both success and failure.
    pub fn build(&self) -> Result<MysqldConfig, ConfigError> {
        for (role, user) in [(UserRole::ReadWrite, &self.rw_user), (UserRole::ReadOnly, &self.ro_user)] {
            if user.name() == SystemDefaults::USERNAME {
                return Err(ConfigError::ReservedUsername {
                    role,
                    username: user.name().to_string(),
                });
            }
        }

        let config = MysqldConfig {
            version: self.version,
            port: self.port,
            charset: self.charset.clone(),
            rw_user: self.rw_user.clone(),
            ro_user: self.ro_user.clone(),
            time_zone: self.time_zone.clone(),
            timeout: self.timeout,
            server_variables: self.server_variables.clone(),
            temp_dir: self.temp_dir.clone(),
            enforce_gtid: self.enforce_gtid,
            support: Arc::clone(&self.support),
        };

        debug!(config = ?config, "Built mysqld configuration");
        Ok(config)
    }
}
