/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

pub mod config;
pub mod key;

mod error;
pub use error::{PublishError, PublishErrorKind};

mod metric;
pub use metric::{Metric, MetricData};

mod logger;

mod plugin;
pub use plugin::{PLUGIN_NAME, PLUGIN_TYPE, PLUGIN_VERSION, Plugin, PluginMeta};

mod publish;
pub use publish::{GraphitePublisher, TcpTransportFactory, TransportFactory};

pub use g3_graphite_client::{GraphiteClientConfig, GraphiteMetric, GraphiteTransport};
