// SPDX-License-Identifier: GPL-3.0-only
pub mod charset;
pub mod error;
pub mod mysqld;
pub mod server_variable;
pub mod settings;
pub mod support;
pub mod time_zone;
pub mod user;

pub use charset::Charset;
pub use error::{ConfigError, UserRole};
pub use mysqld::{MysqldConfig, MysqldConfigBuilder, SystemDefaults};
pub use server_variable::{ServerVariable, ServerVariableValue};
pub use settings::{MysqldSettings, UserSettings};
pub use support::{MysqldSupport, ProcessSupport};
pub use time_zone::TimeZone;
pub use user::User;
