/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PublishErrorKind {
    Configuration,
    Connection,
    Send,
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to get required config {key}: {source}")]
    Config {
        key: &'static str,
        source: ConfigError,
    },
    #[error("invalid value for config {key}: {reason}")]
    InvalidConfig { key: &'static str, reason: String },
    #[error("error connecting to graphite at {endpoint}: {source}")]
    Connect { endpoint: String, source: io::Error },
    #[error("unable to send metrics to graphite at {endpoint}: {source}")]
    Send { endpoint: String, source: io::Error },
}

impl PublishError {
    pub fn kind(&self) -> PublishErrorKind {
        match self {
            PublishError::Config { .. } | PublishError::InvalidConfig { .. } => {
                PublishErrorKind::Configuration
            }
            PublishError::Connect { .. } => PublishErrorKind::Connection,
            PublishError::Send { .. } => PublishErrorKind::Send,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_context() {
        let e = PublishError::Config {
            key: "server",
            source: ConfigError::NotFound("server".to_string()),
        };
        assert_eq!(e.kind(), PublishErrorKind::Configuration);
        assert_eq!(
            e.to_string(),
            "failed to get required config server: no config value found for key server"
        );

        let e = PublishError::Connect {
            endpoint: "127.0.0.1:2003".to_string(),
            source: io::Error::new(io::ErrorKind::ConnectionRefused, "refused"),
        };
        assert_eq!(e.kind(), PublishErrorKind::Connection);
        assert_eq!(
            e.to_string(),
            "error connecting to graphite at 127.0.0.1:2003: refused"
        );

        let e = PublishError::Send {
            endpoint: "127.0.0.1:2003".to_string(),
            source: io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"),
        };
        assert_eq!(e.kind(), PublishErrorKind::Send);
        assert!(e.to_string().contains("127.0.0.1:2003"));
    }
}
