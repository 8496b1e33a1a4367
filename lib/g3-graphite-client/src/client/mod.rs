/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::{Duration, Instant};

use log::debug;

use crate::{GraphiteClientConfig, GraphiteMetric, GraphiteMetricsSink};

/// The connection primitives a publisher needs from a graphite client.
pub trait GraphiteTransport {
    fn connect(&mut self) -> io::Result<()>;

    /// Send all the metrics as one request. Fails if not connected.
    fn send_metrics(&mut self, metrics: &[GraphiteMetric]) -> io::Result<()>;

    fn disconnect(&mut self);
}

pub struct GraphiteClient {
    config: GraphiteClientConfig,
    sink: Option<GraphiteMetricsSink>,
}

impl GraphiteClient {
    pub fn new(config: GraphiteClientConfig) -> Self {
        GraphiteClient { config, sink: None }
    }

    #[inline]
    pub fn config(&self) -> &GraphiteClientConfig {
        &self.config
    }

    #[inline]
    pub fn is_connected(&self) -> bool {
        self.sink.is_some()
    }

    fn connect_stream(&self) -> io::Result<TcpStream> {
        let timeout = self.config.timeout();
        // all resolved addresses share one connect deadline
        let deadline = Instant::now() + timeout;
        let addrs = (self.config.host.as_str(), self.config.port).to_socket_addrs()?;

        let mut last_err = None;
        for addr in addrs {
            let Some(remaining) = remaining_time(deadline, Instant::now()) else {
                return Err(io::Error::new(
                    io::ErrorKind::TimedOut,
                    format!(
                        "timed out connecting to {} after {:?}",
                        self.config.endpoint(),
                        timeout
                    ),
                ));
            };
            match TcpStream::connect_timeout(&addr, remaining) {
                Ok(stream) => {
                    stream.set_write_timeout(Some(timeout))?;
                    return Ok(stream);
                }
                Err(e) => {
                    debug!("graphite: failed to connect to {addr}: {e}");
                    last_err = Some(e);
                }
            }
        }
        Err(last_err.unwrap_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no address resolved for {}", self.config.host),
            )
        }))
    }
}

fn remaining_time(deadline: Instant, now: Instant) -> Option<Duration> {
    let remaining = deadline.saturating_duration_since(now);
    if remaining.is_zero() {
        None
    } else {
        Some(remaining)
    }
}

impl GraphiteTransport for GraphiteClient {
    fn connect(&mut self) -> io::Result<()> {
        self.disconnect();
        let stream = self.connect_stream()?;
        self.sink = Some(GraphiteMetricsSink::tcp(stream));
        Ok(())
    }

    fn send_metrics(&mut self, metrics: &[GraphiteMetric]) -> io::Result<()> {
        let Some(sink) = self.sink.as_mut() else {
            return Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "graphite client is not connected",
            ));
        };
        sink.send_batch(&self.config.prefix, metrics)
    }

    fn disconnect(&mut self) {
        if let Some(sink) = self.sink.take()
            && let Err(e) = sink.shutdown()
        {
            debug!(
                "graphite: failed to shutdown connection to {}: {e}",
                self.config.endpoint()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::net::TcpListener;
    use std::sync::{Arc, Mutex};
    use std::thread;
    use std::time::Duration;

    fn buf_client(prefix: &str, buf: Arc<Mutex<Vec<u8>>>) -> GraphiteClient {
        let config = GraphiteClientConfig::new("127.0.0.1").with_prefix(prefix);
        let mut client = GraphiteClient::new(config);
        client.sink = Some(GraphiteMetricsSink::buf(buf));
        client
    }

    #[test]
    fn send_simple() {
        let buf = Arc::new(Mutex::new(Vec::default()));
        let mut client = buf_client("", buf.clone());
        client
            .send_metrics(&[
                GraphiteMetric::new("a.b", "1", 10),
                GraphiteMetric::new("a.c", "2.5", 11),
            ])
            .unwrap();

        let buf = buf.lock().unwrap();
        assert_eq!(buf.as_slice(), b"a.b 1 10\na.c 2.5 11\n");
    }

    #[test]
    fn send_with_prefix() {
        let buf = Arc::new(Mutex::new(Vec::default()));
        let mut client = buf_client("test", buf.clone());
        client
            .send_metrics(&[GraphiteMetric::new("count", "20", 1)])
            .unwrap();

        let buf = buf.lock().unwrap();
        assert_eq!(buf.as_slice(), b"test.count 20 1\n");
    }

    #[test]
    fn send_empty_batch() {
        let buf = Arc::new(Mutex::new(Vec::default()));
        let mut client = buf_client("", buf.clone());
        client.send_metrics(&[]).unwrap();
        assert!(buf.lock().unwrap().is_empty());
    }

    #[test]
    fn send_empty_name() {
        let buf = Arc::new(Mutex::new(Vec::default()));
        let mut client = buf_client("", buf.clone());
        let e = client
            .send_metrics(&[
                GraphiteMetric::new("a", "1", 1),
                GraphiteMetric::new("", "2", 1),
            ])
            .unwrap_err();
        assert_eq!(e.kind(), io::ErrorKind::InvalidInput);
        assert!(buf.lock().unwrap().is_empty());
    }

    #[test]
    fn send_not_connected() {
        let config = GraphiteClientConfig::new("127.0.0.1");
        let mut client = GraphiteClient::new(config);
        assert!(!client.is_connected());
        let e = client
            .send_metrics(&[GraphiteMetric::new("a", "1", 1)])
            .unwrap_err();
        assert_eq!(e.kind(), io::ErrorKind::NotConnected);
        client.disconnect();
    }

    #[test]
    fn connect_deadline_shared() {
        let start = Instant::now();
        let deadline = start + Duration::from_secs(5);
        assert_eq!(remaining_time(deadline, start), Some(Duration::from_secs(5)));
        assert_eq!(
            remaining_time(deadline, start + Duration::from_secs(3)),
            Some(Duration::from_secs(2))
        );
        assert_eq!(remaining_time(deadline, deadline), None);
        assert_eq!(remaining_time(deadline, deadline + Duration::from_secs(1)), None);
    }

    #[test]
    fn tcp_loopback() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut received = Vec::new();
            stream.read_to_end(&mut received).unwrap();
            received
        });

        let config = GraphiteClientConfig::new("127.0.0.1")
            .with_port(port)
            .with_prefix("pre")
            .with_timeout(Duration::from_secs(2));
        let mut client = config.build();
        client.connect().unwrap();
        assert!(client.is_connected());
        client
            .send_metrics(&[
                GraphiteMetric::new("x.y", "1", 100),
                GraphiteMetric::new("x.z", "true", 101),
            ])
            .unwrap();
        client.disconnect();
        assert!(!client.is_connected());

        let received = server.join().unwrap();
        assert_eq!(received.as_slice(), b"pre.x.y 1 100\npre.x.z true 101\n");
    }

    #[test]
    fn tcp_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let config = GraphiteClientConfig::new("127.0.0.1")
            .with_port(port)
            .with_timeout(Duration::from_secs(1));
        let mut client = GraphiteClient::new(config);
        assert!(client.connect().is_err());
        assert!(!client.is_connected());
    }
}
