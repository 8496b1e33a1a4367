/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::time::Duration;

use crate::GraphiteClient;

const DEFAULT_PORT: u16 = 2003;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphiteClientConfig {
    pub host: String,
    pub port: u16,
    pub prefix: String,
    timeout: Duration,
}

impl GraphiteClientConfig {
    pub fn new(host: impl Into<String>) -> Self {
        GraphiteClientConfig {
            host: host.into(),
            port: DEFAULT_PORT,
            prefix: String::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the connect and write timeout, zero means the default 5s
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.set_timeout(timeout);
        self
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        if timeout.is_zero() {
            self.timeout = DEFAULT_TIMEOUT;
        } else {
            self.timeout = timeout;
        }
    }

    #[inline]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn build(self) -> GraphiteClient {
        GraphiteClient::new(self)
    }
}
