/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::borrow::Cow;

use crate::Metric;

const KEY_DELIMITER: char = '.';

fn replacement(c: char) -> Option<char> {
    match c {
        ' ' => Some('_'),
        ',' => Some(';'),
        '(' | '{' => Some('['),
        ')' | '}' => Some(']'),
        '/' => Some('|'),
        _ => None,
    }
}

/// Join the namespace and prepend the value of every matched prefix tag.
///
/// The tag list is scanned once in order, and each hit is prepended to the
/// key built so far, so the last matched tag ends up leftmost.
pub fn build_raw_key(metric: &Metric, prefix_tags: &[String]) -> String {
    let mut key = metric.namespace().join(".");
    for tag in prefix_tags {
        if let Some(value) = metric.tag(tag) {
            let mut prefixed = String::with_capacity(value.len() + 1 + key.len());
            prefixed.push_str(value);
            prefixed.push(KEY_DELIMITER);
            prefixed.push_str(&key);
            key = prefixed;
        }
    }
    key
}

/// Replace the chars graphite can not accept in a metric path.
///
/// Returns the input unchanged if there is nothing to replace.
pub fn sanitize_key(key: &str) -> Cow<'_, str> {
    if !key.chars().any(|c| replacement(c).is_some()) {
        return Cow::Borrowed(key);
    }
    let sanitized = key
        .chars()
        .map(|c| replacement(c).unwrap_or(c))
        .collect::<String>();
    Cow::Owned(sanitized)
}

/// The wire key of a metric, with the raw key kept if any char was replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricKey {
    raw: String,
    sanitized: Option<String>,
}

impl MetricKey {
    #[inline]
    pub fn as_str(&self) -> &str {
        self.sanitized.as_deref().unwrap_or(&self.raw)
    }

    /// The key before char replacement.
    #[inline]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[inline]
    pub fn is_sanitized(&self) -> bool {
        self.sanitized.is_some()
    }

    pub fn into_string(self) -> String {
        self.sanitized.unwrap_or(self.raw)
    }
}

/// Build the final wire key of the metric.
pub fn build_key(metric: &Metric, prefix_tags: &[String]) -> MetricKey {
    let raw = build_raw_key(metric, prefix_tags);
    let sanitized = match sanitize_key(&raw) {
        Cow::Owned(s) => Some(s),
        Cow::Borrowed(_) => None,
    };
    MetricKey { raw, sanitized }
}
