// proxywrap: proxy-injecting command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings sections.

use std::path::PathBuf;

use serde::Deserialize;

use crate::logging::{LogConfig, LogLevel};

pub const DEFAULT_PROXY_HOST: &str = "127.0.0.1";
pub const DEFAULT_PROXY_PORT: &str = "7890";
pub const DEFAULT_PROXY_SCHEME: &str = "http";

/// Proxy endpoint, kept as raw strings.
///
/// No syntax checks are made on any field; the URL is assembled as given.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProxyConfig {
    pub host: String,
    pub port: String,
    pub scheme: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_PROXY_HOST.to_string(),
            port: DEFAULT_PROXY_PORT.to_string(),
            scheme: DEFAULT_PROXY_SCHEME.to_string(),
        }
    }
}

impl ProxyConfig {
    /// Returns `scheme://host:port`.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}

/// Logging knobs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: LogLevel,
    pub file: Option<PathBuf>,
}

impl LogSettings {
    /// Builds the logging configuration; the same level is used for console
    /// and file.
    #[must_use]
    pub fn to_log_config(&self) -> LogConfig {
        LogConfig::builder()
            .with_console_level(self.level)
            .with_file_level(self.level)
            .maybe_with_log_file(self.file.clone())
            .build()
    }
}
