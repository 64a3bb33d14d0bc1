// proxywrap: proxy-injecting command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings for proxywrap.
//!
//! All settings come from environment variables; there is no settings file.
//!
//! # Environment Variable Mapping
//!
//! ```text
//! PROXY_HOST=10.0.0.1         → proxy.host   (default 127.0.0.1)
//! PROXY_PORT=8080             → proxy.port   (default 7890)
//! PROXY_TYPE=socks5           → proxy.scheme (default http)
//! PROXYWRAP_LOG_LEVEL=4       → log.level    (default 2, warn)
//! PROXYWRAP_LOG_FILE=/x.log   → log.file     (default none)
//! ```
//!
//! Empty variables are treated as unset.

pub mod loader;
pub mod types;


use serde::Deserialize;

use crate::core::env::container::Env;
use crate::error::ConfigError;

use loader::SettingsLoader;
use types::{LogSettings, ProxyConfig};

/// Complete application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Upstream proxy the child is pointed at.
    #[serde(default)]
    pub proxy: ProxyConfig,
    /// Diagnostic logging.
    #[serde(default)]
    pub log: LogSettings,
}

impl Settings {
    /// Loads settings from an environment snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if a logging variable holds an invalid value. Proxy
    /// fields accept any string.
    pub fn from_env(env: &Env) -> Result<Self, ConfigError> {
        SettingsLoader::new()?.with_env(env)?.build()
    }
}
