/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::net::TcpStream;
#[cfg(test)]
use std::sync::{Arc, Mutex};

use crate::GraphiteMetric;

#[cfg(test)]
mod buf;
#[cfg(test)]
use buf::BufMetricsSink;

mod tcp;
use tcp::TcpMetricsSink;

enum MetricsSinkIo {
    #[cfg(test)]
    Buf(BufMetricsSink),
    Tcp(TcpMetricsSink),
}

impl MetricsSinkIo {
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            #[cfg(test)]
            MetricsSinkIo::Buf(b) => b.write_all(buf),
            MetricsSinkIo::Tcp(s) => s.write_all(buf),
        }
    }

    fn shutdown(&mut self) -> io::Result<()> {
        match self {
            #[cfg(test)]
            MetricsSinkIo::Buf(_) => Ok(()),
            MetricsSinkIo::Tcp(s) => s.shutdown(),
        }
    }
}

pub(crate) struct GraphiteMetricsSink {
    buf: Vec<u8>,
    io: MetricsSinkIo,
}

impl GraphiteMetricsSink {
    #[cfg(test)]
    pub(crate) fn buf(buf: Arc<Mutex<Vec<u8>>>) -> Self {
        GraphiteMetricsSink {
            buf: Vec::new(),
            io: MetricsSinkIo::Buf(BufMetricsSink::new(buf)),
        }
    }

    pub(crate) fn tcp(stream: TcpStream) -> Self {
        GraphiteMetricsSink {
            buf: Vec::with_capacity(2048),
            io: MetricsSinkIo::Tcp(TcpMetricsSink::new(stream)),
        }
    }

    /// Write the whole batch with a single write call.
    pub(crate) fn send_batch(
        &mut self,
        prefix: &str,
        metrics: &[GraphiteMetric],
    ) -> io::Result<()> {
        self.buf.clear();
        if metrics.iter().any(|m| m.name.is_empty()) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "empty metric name in batch",
            ));
        }

        let size = metrics.iter().map(|m| m.encoded_len(prefix)).sum();
        self.buf.reserve(size);
        for m in metrics {
            m.encode(prefix, &mut self.buf);
        }
        if self.buf.is_empty() {
            return Ok(());
        }

        let r = self.io.write_all(&self.buf);
        self.buf.clear();
        r
    }

    pub(crate) fn shutdown(mut self) -> io::Result<()> {
        self.io.shutdown()
    }
}
