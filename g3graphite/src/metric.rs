/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;

use ahash::AHashMap;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub enum MetricData {
    Signed(i64),
    Unsigned(u64),
    Double(f64),
    Bool(bool),
    Text(String),
}

impl fmt::Display for MetricData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricData::Signed(i) => f.write_str(itoa::Buffer::new().format(*i)),
            MetricData::Unsigned(u) => f.write_str(itoa::Buffer::new().format(*u)),
            MetricData::Double(v) => f.write_str(ryu::Buffer::new().format(*v)),
            MetricData::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            MetricData::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_from {
    ($t:ty, $variant:ident, $as:ty) => {
        impl From<$t> for MetricData {
            fn from(v: $t) -> Self {
                MetricData::$variant(v as $as)
            }
        }
    };
}

impl_from!(i8, Signed, i64);
impl_from!(i16, Signed, i64);
impl_from!(i32, Signed, i64);
impl_from!(i64, Signed, i64);
impl_from!(u8, Unsigned, u64);
impl_from!(u16, Unsigned, u64);
impl_from!(u32, Unsigned, u64);
impl_from!(u64, Unsigned, u64);
impl_from!(f32, Double, f64);
impl_from!(f64, Double, f64);

impl From<bool> for MetricData {
    fn from(v: bool) -> Self {
        MetricData::Bool(v)
    }
}

impl From<String> for MetricData {
    fn from(v: String) -> Self {
        MetricData::Text(v)
    }
}

impl From<&str> for MetricData {
    fn from(v: &str) -> Self {
        MetricData::Text(v.to_string())
    }
}

/// A single measurement handed in by the collection pipeline.
#[derive(Debug, Clone)]
pub struct Metric {
    namespace: Vec<String>,
    tags: AHashMap<String, String>,
    data: MetricData,
    timestamp: DateTime<Utc>,
}

impl Metric {
    pub fn new<I, S, D>(namespace: I, data: D, timestamp: DateTime<Utc>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        D: Into<MetricData>,
    {
        Metric {
            namespace: namespace.into_iter().map(Into::into).collect(),
            tags: AHashMap::new(),
            data: data.into(),
            timestamp,
        }
    }

    pub fn with_tag<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.tags.insert(name.into(), value.into());
        self
    }

    #[inline]
    pub fn namespace(&self) -> &[String] {
        &self.namespace
    }

    #[inline]
    pub fn tags(&self) -> &AHashMap<String, String> {
        &self.tags
    }

    #[inline]
    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags.get(name).map(|v| v.as_str())
    }

    #[inline]
    pub fn data(&self) -> &MetricData {
        &self.data
    }

    #[inline]
    pub fn timestamp(&self) -> &DateTime<Utc> {
        &self.timestamp
    }

    #[inline]
    pub fn unix_timestamp(&self) -> i64 {
        self.timestamp.timestamp()
    }
}
