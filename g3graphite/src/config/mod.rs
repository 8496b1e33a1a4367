/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;

use thiserror::Error;

mod yaml;

mod schema;
pub use schema::{ConfigRule, ConfigSchema};

mod resolve;
pub use resolve::PublishParams;
pub(crate) use resolve::resolve_log_level;

pub const CONFIG_KEY_SERVER: &str = "server";
pub const CONFIG_KEY_PORT: &str = "port";
pub const CONFIG_KEY_PREFIX_TAGS: &str = "prefix_tags";
pub const CONFIG_KEY_PREFIX: &str = "prefix";
pub const CONFIG_KEY_LOG_LEVEL: &str = "log-level";
pub const CONFIG_KEY_TIMEOUT: &str = "timeout";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no config value found for key {0}")]
    NotFound(String),
    #[error("config value for key {key} is not of type {expect}")]
    TypeMismatch {
        key: String,
        expect: ConfigValueType,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigValueType {
    Str,
    Int,
    Bool,
    Float,
}

impl ConfigValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigValueType::Str => "string",
            ConfigValueType::Int => "integer",
            ConfigValueType::Bool => "bool",
            ConfigValueType::Float => "float",
        }
    }
}

impl fmt::Display for ConfigValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigValue {
    Str(String),
    Int(i64),
    Bool(bool),
    Float(f64),
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Str(s) => write!(f, "{s:?}"),
            ConfigValue::Int(i) => write!(f, "{i}"),
            ConfigValue::Bool(b) => write!(f, "{b}"),
            ConfigValue::Float(v) => write!(f, "{v}"),
        }
    }
}

/// The opaque configuration the host hands in with every publish call.
pub trait ConfigSource {
    fn get_string(&self, key: &str) -> Result<String, ConfigError>;

    fn get_int(&self, key: &str) -> Result<i64, ConfigError>;
}

/// Typed key value config, as built by the host or loaded from yaml.
#[derive(Clone, Debug, Default)]
pub struct PluginConfig {
    entries: Vec<(String, ConfigValue)>,
}

impl PluginConfig {
    pub fn new() -> Self {
        PluginConfig::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: ConfigValue) {
        let key = key.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: ConfigValue) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn get_required(&self, key: &str) -> Result<&ConfigValue, ConfigError> {
        self.get(key)
            .ok_or_else(|| ConfigError::NotFound(key.to_string()))
    }
}

impl ConfigSource for PluginConfig {
    fn get_string(&self, key: &str) -> Result<String, ConfigError> {
        match self.get_required(key)? {
            ConfigValue::Str(s) => Ok(s.clone()),
            _ => Err(ConfigError::TypeMismatch {
                key: key.to_string(),
                expect: ConfigValueType::Str,
            }),
        }
    }

    fn get_int(&self, key: &str) -> Result<i64, ConfigError> {
        match self.get_required(key)? {
            ConfigValue::Int(i) => Ok(*i),
            _ => Err(ConfigError::TypeMismatch {
                key: key.to_string(),
                expect: ConfigValueType::Int,
            }),
        }
    }
}
