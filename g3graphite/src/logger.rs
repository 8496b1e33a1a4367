/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use slog::{Drain, Level, Logger, slog_o, slog_warn};

use crate::config::{ConfigSource, resolve_log_level};
use crate::plugin::{PLUGIN_NAME, PLUGIN_TYPE, PLUGIN_VERSION};

const DEFAULT_LOG_LEVEL: Level = Level::Warning;

/// Build the logger for one publish call.
///
/// The level comes from the `log-level` config of this call only.
pub(crate) fn call_logger(base: &Logger, config: &dyn ConfigSource) -> Logger {
    let (level, invalid) = match resolve_log_level(config) {
        Ok(level) => (level.unwrap_or(DEFAULT_LOG_LEVEL), None),
        Err(value) => (DEFAULT_LOG_LEVEL, Some(value)),
    };

    let drain = base.clone().filter_level(level).fuse();
    let logger = Logger::root(
        drain,
        slog_o!(
            "plugin-name" => PLUGIN_NAME,
            "plugin-version" => PLUGIN_VERSION,
            "plugin-type" => PLUGIN_TYPE,
        ),
    );

    if let Some(value) = invalid {
        slog_warn!(logger, "Invalid config value";
            "value" => value,
            "acceptable values" => "warn, error, debug, info",
        );
    }
    logger
}
