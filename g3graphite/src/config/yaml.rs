/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;

use anyhow::{Context, anyhow};
use yaml_rust::{Yaml, YamlLoader, yaml};

use super::{ConfigValue, PluginConfig};

fn foreach_kv<F>(table: &yaml::Hash, mut f: F) -> anyhow::Result<()>
where
    F: FnMut(&str, &Yaml) -> anyhow::Result<()>,
{
    for (k, v) in table.iter() {
        if let Yaml::String(key) = k {
            f(key, v).context(format!("failed to parse value of key {key}"))?;
        } else {
            return Err(anyhow!("key in hash should be string"));
        }
    }
    Ok(())
}

fn as_config_value(v: &Yaml) -> anyhow::Result<Option<ConfigValue>> {
    match v {
        Yaml::String(s) => Ok(Some(ConfigValue::Str(s.clone()))),
        Yaml::Integer(i) => Ok(Some(ConfigValue::Int(*i))),
        Yaml::Boolean(b) => Ok(Some(ConfigValue::Bool(*b))),
        Yaml::Real(s) => {
            let f = f64::from_str(s).map_err(|e| anyhow!("invalid f64 value {s}: {e}"))?;
            Ok(Some(ConfigValue::Float(f)))
        }
        Yaml::Null => Ok(None),
        _ => Err(anyhow!("yaml value type should be a scalar")),
    }
}

impl PluginConfig {
    pub fn parse_yaml(v: &Yaml) -> anyhow::Result<Self> {
        match v {
            Yaml::Hash(map) => {
                let mut config = PluginConfig::new();
                foreach_kv(map, |k, v| {
                    if let Some(value) = as_config_value(v)? {
                        config.set(k, value);
                    }
                    Ok(())
                })?;
                Ok(config)
            }
            Yaml::Null => Ok(PluginConfig::new()),
            _ => Err(anyhow!(
                "yaml value type for 'plugin config' should be 'map'"
            )),
        }
    }

    pub fn load_yaml_str(s: &str) -> anyhow::Result<Self> {
        let docs =
            YamlLoader::load_from_str(s).map_err(|e| anyhow!("invalid yaml document: {e}"))?;
        match docs.first() {
            Some(doc) => PluginConfig::parse_yaml(doc).context("invalid plugin config"),
            None => Ok(PluginConfig::new()),
        }
    }
}
