/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io::{self, Write};
use std::net::{Shutdown, TcpStream};

pub(super) struct TcpMetricsSink {
    stream: TcpStream,
}

impl TcpMetricsSink {
    pub(super) fn new(stream: TcpStream) -> Self {
        TcpMetricsSink { stream }
    }

    pub(super) fn write_all(&mut self, msg: &[u8]) -> io::Result<()> {
        self.stream.write_all(msg)?;
        self.stream.flush()
    }

    pub(super) fn shutdown(&mut self) -> io::Result<()> {
        self.stream.shutdown(Shutdown::Both)
    }
}
