/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;

use g3_graphite_client::{GraphiteClient, GraphiteClientConfig, GraphiteMetric, GraphiteTransport};

/// Creates a fresh transport for every publish call.
pub trait TransportFactory {
    type Transport: GraphiteTransport;

    fn new_transport(&self, config: GraphiteClientConfig) -> Self::Transport;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TcpTransportFactory;

impl TransportFactory for TcpTransportFactory {
    type Transport = GraphiteClient;

    fn new_transport(&self, config: GraphiteClientConfig) -> GraphiteClient {
        config.build()
    }
}

/// An established connection, released on drop.
pub(super) struct ConnectedTransport<T: GraphiteTransport> {
    inner: T,
}

impl<T: GraphiteTransport> ConnectedTransport<T> {
    pub(super) fn connect(mut inner: T) -> io::Result<Self> {
        inner.connect()?;
        Ok(ConnectedTransport { inner })
    }

    pub(super) fn send_metrics(&mut self, metrics: &[GraphiteMetric]) -> io::Result<()> {
        self.inner.send_metrics(metrics)
    }
}

impl<T: GraphiteTransport> Drop for ConnectedTransport<T> {
    fn drop(&mut self) {
        self.inner.disconnect();
    }
}
