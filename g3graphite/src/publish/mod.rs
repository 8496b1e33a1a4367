/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use slog::{Discard, Logger, slog_debug, slog_error, slog_info, slog_o};

use g3_graphite_client::GraphiteMetric;

use crate::config::{ConfigSchema, ConfigSource, PublishParams};
use crate::plugin::{Plugin, PluginMeta};
use crate::{Metric, PublishError, key};

mod transport;
use transport::ConnectedTransport;
pub use transport::{TcpTransportFactory, TransportFactory};

pub struct GraphitePublisher<F = TcpTransportFactory> {
    factory: F,
    logger: Logger,
}

impl GraphitePublisher<TcpTransportFactory> {
    pub fn new(logger: Logger) -> Self {
        GraphitePublisher::with_transport_factory(TcpTransportFactory, logger)
    }
}

impl Default for GraphitePublisher<TcpTransportFactory> {
    fn default() -> Self {
        GraphitePublisher::new(Logger::root(Discard, slog_o!()))
    }
}

impl<F: TransportFactory> GraphitePublisher<F> {
    pub fn with_transport_factory(factory: F, logger: Logger) -> Self {
        GraphitePublisher { factory, logger }
    }

    pub fn publish(
        &self,
        metrics: &[Metric],
        config: &dyn ConfigSource,
    ) -> Result<(), PublishError> {
        let logger = crate::logger::call_logger(&self.logger, config);
        slog_debug!(logger, "Publishing started");
        slog_debug!(logger, "publishing {} metrics", metrics.len());

        let params = PublishParams::resolve(config)?;
        let endpoint = params.endpoint();

        slog_debug!(
            logger,
            "Attempting to connect to {endpoint} with timeout {}s",
            params.timeout.as_secs()
        );
        let transport = self.factory.new_transport(params.client_config());
        let mut connection = match ConnectedTransport::connect(transport) {
            Ok(c) => c,
            Err(e) => {
                slog_error!(logger, "Error connecting to graphite at {endpoint}. Error: {e}");
                return Err(PublishError::Connect {
                    endpoint,
                    source: e,
                });
            }
        };
        slog_debug!(logger, "Connected to {endpoint} successfully");

        let records = metrics
            .iter()
            .map(|m| wire_record(&logger, m, &params.prefix_tags))
            .collect::<Vec<_>>();

        if let Err(e) = connection.send_metrics(&records) {
            slog_error!(logger, "Unable to send metrics. Error: {e}");
            return Err(PublishError::Send {
                endpoint,
                source: e,
            });
        }
        slog_debug!(logger, "{} metrics sent to graphite", records.len());
        Ok(())
    }
}

fn wire_record(logger: &Logger, metric: &Metric, prefix_tags: &[String]) -> GraphiteMetric {
    let key = key::build_key(metric, prefix_tags);
    let data = metric.data().to_string();
    slog_debug!(logger, "Metric ready to send {}:{data}", key.raw());
    if key.is_sanitized() {
        slog_info!(logger, "Metric after replacement is {}", key.as_str());
    }
    GraphiteMetric::new(key.into_string(), data, metric.unix_timestamp())
}

impl<F: TransportFactory> Plugin for GraphitePublisher<F> {
    fn meta(&self) -> PluginMeta {
        PluginMeta::GRAPHITE
    }

    fn publish(&self, metrics: &[Metric], config: &dyn ConfigSource) -> Result<(), PublishError> {
        GraphitePublisher::publish(self, metrics, config)
    }

    fn config_schema(&self) -> ConfigSchema {
        ConfigSchema::graphite()
    }
}
