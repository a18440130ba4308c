// SPDX-License-Identifier: GPL-3.0-only
use serde::{Deserialize, Serialize};
use std::fmt;

/// Typed value of a `mysqld` option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServerVariableValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl fmt::Display for ServerVariableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerVariableValue::Bool(v) => write!(f, "{}", v),
            ServerVariableValue::Int(v) => write!(f, "{}", v),
            ServerVariableValue::Str(v) => f.write_str(v),
        }
    }
}

impl From<bool> for ServerVariableValue {
    fn from(value: bool) -> Self {
        ServerVariableValue::Bool(value)
    }
}

impl From<i32> for ServerVariableValue {
    fn from(value: i32) -> Self {
        ServerVariableValue::Int(value.into())
    }
}

impl From<u32> for ServerVariableValue {
    fn from(value: u32) -> Self {
        ServerVariableValue::Int(value.into())
    }
}

impl From<i64> for ServerVariableValue {
    fn from(value: i64) -> Self {
        ServerVariableValue::Int(value)
    }
}

impl From<&str> for ServerVariableValue {
    fn from(value: &str) -> Self {
        ServerVariableValue::Str(value.to_string())
    }
}

impl From<String> for ServerVariableValue {
    fn from(value: String) -> Self {
        ServerVariableValue::Str(value)
    }
}

/// A `mysqld` option passed on the command line.
///
/// See <http://dev.mysql.com/doc/refman/5.7/en/mysqld-option-tables.html>
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerVariable {
    pub name: String,
    pub value: ServerVariableValue,
}

impl ServerVariable {
    pub fn new(name: impl Into<String>, value: impl Into<ServerVariableValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn to_command_line_argument(&self) -> String {
        format!("--{}={}", self.name, self.value)
    }
}
