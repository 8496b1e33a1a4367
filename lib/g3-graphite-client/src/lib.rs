/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

mod sink;
use sink::GraphiteMetricsSink;

mod metric;
pub use metric::GraphiteMetric;

mod config;
pub use config::GraphiteClientConfig;

mod client;
pub use client::{GraphiteClient, GraphiteTransport};
