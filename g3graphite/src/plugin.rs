/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use crate::config::{ConfigSchema, ConfigSource};
use crate::{Metric, PublishError};

pub const PLUGIN_NAME: &str = "graphite";
pub const PLUGIN_VERSION: u32 = 8;
pub const PLUGIN_TYPE: &str = "publisher";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PluginMeta {
    pub name: &'static str,
    pub version: u32,
    pub plugin_type: &'static str,
}

impl PluginMeta {
    pub(crate) const GRAPHITE: PluginMeta = PluginMeta {
        name: PLUGIN_NAME,
        version: PLUGIN_VERSION,
        plugin_type: PLUGIN_TYPE,
    };
}

/// The interface the host uses to drive a publisher.
pub trait Plugin {
    fn meta(&self) -> PluginMeta;

    /// Publish the whole batch, or fail without any delivery guarantee.
    fn publish(&self, metrics: &[Metric], config: &dyn ConfigSource) -> Result<(), PublishError>;

    /// The config keys understood by `publish`.
    fn config_schema(&self) -> ConfigSchema;
}
