/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

/// One line of the plaintext protocol: `<name> <value> <timestamp>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphiteMetric {
    pub name: String,
    pub value: String,
    pub timestamp: i64,
}

impl GraphiteMetric {
    pub fn new<N, V>(name: N, value: V, timestamp: i64) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        GraphiteMetric {
            name: name.into(),
            value: value.into(),
            timestamp,
        }
    }

    pub(crate) fn encoded_len(&self, prefix: &str) -> usize {
        let mut len = self.name.len() + self.value.len() + 24;
        if !prefix.is_empty() {
            len += prefix.len() + 1;
        }
        len
    }

    pub(crate) fn encode(&self, prefix: &str, buf: &mut Vec<u8>) {
        if !prefix.is_empty() {
            buf.extend_from_slice(prefix.as_bytes());
            buf.push(b'.');
        }
        buf.extend_from_slice(self.name.as_bytes());
        buf.push(b' ');
        buf.extend_from_slice(self.value.as_bytes());
        buf.push(b' ');
        let mut ts = itoa::Buffer::new();
        buf.extend_from_slice(ts.format(self.timestamp).as_bytes());
        buf.push(b'\n');
    }
}
