/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::sync::{Arc, Mutex};

pub(super) struct BufMetricsSink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl BufMetricsSink {
    pub(super) fn new(buf: Arc<Mutex<Vec<u8>>>) -> Self {
        BufMetricsSink { buf }
    }

    pub(super) fn write_all(&mut self, msg: &[u8]) -> io::Result<()> {
        let mut buf = self.buf.lock().unwrap();
        buf.extend_from_slice(msg);
        Ok(())
    }
}
