/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use super::{
    CONFIG_KEY_LOG_LEVEL, CONFIG_KEY_PORT, CONFIG_KEY_PREFIX, CONFIG_KEY_PREFIX_TAGS,
    CONFIG_KEY_SERVER, CONFIG_KEY_TIMEOUT, ConfigValue, ConfigValueType,
};

/// Declaration of a single config key, as reported to the host.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigRule {
    pub key: &'static str,
    pub value_type: ConfigValueType,
    pub required: bool,
    /// The default value declared to the host.
    pub default: Option<ConfigValue>,
    /// What the publisher uses when the value can not be retrieved at
    /// publish time. May differ from `default`.
    pub fallback: Option<ConfigValue>,
    pub description: &'static str,
}

impl ConfigRule {
    fn new(key: &'static str, value_type: ConfigValueType, description: &'static str) -> Self {
        ConfigRule {
            key,
            value_type,
            required: false,
            default: None,
            fallback: None,
            description,
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn with_default(mut self, value: ConfigValue) -> Self {
        self.default = Some(value);
        self
    }

    fn with_fallback(mut self, value: ConfigValue) -> Self {
        self.fallback = Some(value);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfigSchema {
    rules: Vec<ConfigRule>,
}

impl ConfigSchema {
    pub(crate) fn graphite() -> Self {
        let rules = vec![
            ConfigRule::new(
                CONFIG_KEY_SERVER,
                ConfigValueType::Str,
                "graphite server host name or ip address",
            )
            .required(),
            // the resolver has no fallback for port and fails if it is missing
            ConfigRule::new(
                CONFIG_KEY_PORT,
                ConfigValueType::Int,
                "graphite plaintext port",
            )
            .with_default(ConfigValue::Int(2003)),
            ConfigRule::new(
                CONFIG_KEY_PREFIX_TAGS,
                ConfigValueType::Str,
                "comma separated tag names whose values are prepended to the metric key, \
                 an unretrievable value disables prefixing instead of using the default",
            )
            .with_default(ConfigValue::Str("plugin_running_on".to_string()))
            .with_fallback(ConfigValue::Str(String::new())),
            ConfigRule::new(
                CONFIG_KEY_PREFIX,
                ConfigValueType::Str,
                "prefix added to every metric key by the client",
            )
            .with_fallback(ConfigValue::Str(String::new())),
            ConfigRule::new(
                CONFIG_KEY_LOG_LEVEL,
                ConfigValueType::Str,
                "one of warn, error, debug, info",
            )
            .with_fallback(ConfigValue::Str("warn".to_string())),
            ConfigRule::new(
                CONFIG_KEY_TIMEOUT,
                ConfigValueType::Int,
                "connect timeout in seconds, declared default is 5 but 20 is used \
                 when the value can not be retrieved, negative values are rejected",
            )
            .with_default(ConfigValue::Int(5))
            .with_fallback(ConfigValue::Int(20)),
        ];
        ConfigSchema { rules }
    }

    pub fn rules(&self) -> &[ConfigRule] {
        &self.rules
    }

    pub fn get(&self, key: &str) -> Option<&ConfigRule> {
        self.rules.iter().find(|r| r.key == key)
    }
}
