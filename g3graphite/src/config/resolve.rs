/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::time::Duration;

use slog::Level;

use g3_graphite_client::GraphiteClientConfig;

use super::{
    CONFIG_KEY_LOG_LEVEL, CONFIG_KEY_PORT, CONFIG_KEY_PREFIX, CONFIG_KEY_PREFIX_TAGS,
    CONFIG_KEY_SERVER, CONFIG_KEY_TIMEOUT, ConfigSource,
};
use crate::PublishError;

const FALLBACK_TIMEOUT: Duration = Duration::from_secs(20);

/// Settings resolved for a single publish call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublishParams {
    pub server: String,
    pub port: u16,
    pub prefix: String,
    pub prefix_tags: Vec<String>,
    pub timeout: Duration,
}

impl PublishParams {
    /// Fails only if `server` or `port` can not be used.
    pub fn resolve(config: &dyn ConfigSource) -> Result<Self, PublishError> {
        let server = config
            .get_string(CONFIG_KEY_SERVER)
            .map_err(|source| PublishError::Config {
                key: CONFIG_KEY_SERVER,
                source,
            })?;
        let port = config
            .get_int(CONFIG_KEY_PORT)
            .map_err(|source| PublishError::Config {
                key: CONFIG_KEY_PORT,
                source,
            })?;
        let port = u16::try_from(port).map_err(|_| PublishError::InvalidConfig {
            key: CONFIG_KEY_PORT,
            reason: format!("{port} is out of range"),
        })?;

        // no fallback to the declared default here
        let prefix_tags = config
            .get_string(CONFIG_KEY_PREFIX_TAGS)
            .map(|s| s.split(',').map(|t| t.to_string()).collect())
            .unwrap_or_default();
        let prefix = config.get_string(CONFIG_KEY_PREFIX).unwrap_or_default();
        let timeout = match config.get_int(CONFIG_KEY_TIMEOUT) {
            Ok(secs) => {
                let secs = u64::try_from(secs).map_err(|_| PublishError::InvalidConfig {
                    key: CONFIG_KEY_TIMEOUT,
                    reason: format!("{secs} is negative"),
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => FALLBACK_TIMEOUT,
        };

        Ok(PublishParams {
            server,
            port,
            prefix,
            prefix_tags,
            timeout,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.server, self.port)
    }

    pub fn client_config(&self) -> GraphiteClientConfig {
        GraphiteClientConfig::new(self.server.clone())
            .with_port(self.port)
            .with_prefix(self.prefix.clone())
            .with_timeout(self.timeout)
    }
}

/// Returns `Ok(None)` if no level is set, and the normalized value if it is invalid.
pub(crate) fn resolve_log_level(config: &dyn ConfigSource) -> Result<Option<Level>, String> {
    let Ok(value) = config.get_string(CONFIG_KEY_LOG_LEVEL) else {
        return Ok(None);
    };
    let value = value.to_lowercase();
    match value.as_str() {
        "warn" | "warning" => Ok(Some(Level::Warning)),
        "error" => Ok(Some(Level::Error)),
        "debug" => Ok(Some(Level::Debug)),
        "info" => Ok(Some(Level::Info)),
        _ => Err(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PublishErrorKind;
    use crate::config::{ConfigError, ConfigValue, PluginConfig};

    fn base_config() -> PluginConfig {
        PluginConfig::new()
            .with("server", ConfigValue::Str("graphite.local".to_string()))
            .with("port", ConfigValue::Int(2003))
    }

    #[test]
    fn resolve_minimal() {
        let params = PublishParams::resolve(&base_config()).unwrap();
        assert_eq!(params.server, "graphite.local");
        assert_eq!(params.port, 2003);
        assert_eq!(params.prefix, "");
        assert!(params.prefix_tags.is_empty());
        assert_eq!(params.timeout, Duration::from_secs(20));
        assert_eq!(params.endpoint(), "graphite.local:2003");
    }

    #[test]
    fn resolve_full() {
        let config = base_config()
            .with("prefix", ConfigValue::Str("snap".to_string()))
            .with(
                "prefix_tags",
                ConfigValue::Str("plugin_running_on,dc".to_string()),
            )
            .with("timeout", ConfigValue::Int(3));
        let params = PublishParams::resolve(&config).unwrap();
        assert_eq!(params.prefix, "snap");
        assert_eq!(params.prefix_tags, ["plugin_running_on", "dc"]);
        assert_eq!(params.timeout, Duration::from_secs(3));

        let client_config = params.client_config();
        assert_eq!(client_config.host, "graphite.local");
        assert_eq!(client_config.port, 2003);
        assert_eq!(client_config.prefix, "snap");
        assert_eq!(client_config.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn resolve_missing_required() {
        let config = PluginConfig::new().with("port", ConfigValue::Int(2003));
        let e = PublishParams::resolve(&config).unwrap_err();
        assert_eq!(e.kind(), PublishErrorKind::Configuration);
        assert!(matches!(
            e,
            PublishError::Config {
                key: "server",
                source: ConfigError::NotFound(_),
            }
        ));

        let config =
            PluginConfig::new().with("server", ConfigValue::Str("localhost".to_string()));
        let e = PublishParams::resolve(&config).unwrap_err();
        assert!(matches!(e, PublishError::Config { key: "port", .. }));
    }

    #[test]
    fn resolve_invalid_port() {
        let config = base_config().with("port", ConfigValue::Int(70000));
        let e = PublishParams::resolve(&config).unwrap_err();
        assert!(matches!(e, PublishError::InvalidConfig { key: "port", .. }));

        let config = base_config().with("port", ConfigValue::Str("2003".to_string()));
        let e = PublishParams::resolve(&config).unwrap_err();
        assert_eq!(e.kind(), PublishErrorKind::Configuration);
    }

    #[test]
    fn resolve_fallbacks() {
        // wrongly typed optional values fall back like absent ones
        let config = base_config()
            .with("prefix_tags", ConfigValue::Int(1))
            .with("prefix", ConfigValue::Bool(true))
            .with("timeout", ConfigValue::Str("5".to_string()));
        let params = PublishParams::resolve(&config).unwrap();
        assert!(params.prefix_tags.is_empty());
        assert_eq!(params.prefix, "");
        assert_eq!(params.timeout, Duration::from_secs(20));

        let config = base_config().with("timeout", ConfigValue::Int(0));
        let params = PublishParams::resolve(&config).unwrap();
        assert_eq!(params.timeout, Duration::ZERO);
        assert_eq!(params.client_config().timeout(), Duration::from_secs(5));
    }

    #[test]
    fn resolve_negative_timeout() {
        let config = base_config().with("timeout", ConfigValue::Int(-1));
        let e = PublishParams::resolve(&config).unwrap_err();
        assert!(matches!(
            e,
            PublishError::InvalidConfig {
                key: CONFIG_KEY_TIMEOUT,
                ..
            }
        ));
        assert_eq!(e.kind(), PublishErrorKind::Configuration);
    }

    #[test]
    fn resolve_prefix_tags_verbatim() {
        let config = base_config().with("prefix_tags", ConfigValue::Str("a, b,".to_string()));
        let params = PublishParams::resolve(&config).unwrap();
        assert_eq!(params.prefix_tags, ["a", " b", ""]);
    }

    #[test]
    fn log_level() {
        let config = base_config();
        assert_eq!(resolve_log_level(&config), Ok(None));

        for (value, level) in [
            ("warn", Level::Warning),
            ("Error", Level::Error),
            ("DEBUG", Level::Debug),
            ("info", Level::Info),
        ] {
            let config = base_config().with("log-level", ConfigValue::Str(value.to_string()));
            assert_eq!(resolve_log_level(&config), Ok(Some(level)));
        }

        let config = base_config().with("log-level", ConfigValue::Str("Verbose".to_string()));
        assert_eq!(resolve_log_level(&config), Err("verbose".to_string()));
    }
}
