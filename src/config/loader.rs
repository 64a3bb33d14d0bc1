// proxywrap: proxy-injecting command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings loading from an environment snapshot.
//!
//! # Loader Pipeline
//!
//! ```text
//! SettingsLoader::new()     defaults
//!   .with_env(&Env)         non-empty PROXY_* / PROXYWRAP_* overrides
//!        |
//!        v
//!    build() --> Settings
//! ```

use std::borrow::Cow;

use super::Settings;
use super::types::{DEFAULT_PROXY_HOST, DEFAULT_PROXY_PORT, DEFAULT_PROXY_SCHEME};
use crate::core::env::container::Env;
use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Environment variables and the settings keys they feed.
pub const ENV_KEYS: [(&str, &str); 5] = [
    ("PROXY_HOST", "proxy.host"),
    ("PROXY_PORT", "proxy.port"),
    ("PROXY_TYPE", "proxy.scheme"),
    ("PROXYWRAP_LOG_LEVEL", "log.level"),
    ("PROXYWRAP_LOG_FILE", "log.file"),
];

/// Builder for loading settings from layered sources.
pub struct SettingsLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl SettingsLoader {
    /// Creates a loader with every default registered.
    ///
    /// # Errors
    ///
    /// Returns an error if a default cannot be registered.
    pub fn new() -> Result<Self, ConfigError> {
        let builder = config::Config::builder()
            .set_default("proxy.host", DEFAULT_PROXY_HOST)
            .and_then(|b| b.set_default("proxy.port", DEFAULT_PROXY_PORT))
            .and_then(|b| b.set_default("proxy.scheme", DEFAULT_PROXY_SCHEME))
            .and_then(|b| b.set_default("log.level", i64::from(LogLevel::WARN.as_u8())))?;
        Ok(Self { builder })
    }

    /// Layers non-empty values from an environment snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be registered.
    pub fn with_env(mut self, env: &Env) -> Result<Self, ConfigError> {
        for (var, key) in ENV_KEYS {
            self.builder = self
                .builder
                .set_override_option(key, env.non_empty(var).map(Cow::into_owned))?;
        }
        Ok(self)
    }

    /// Builds the settings from all layered sources.
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be deserialized, such as a log level
    /// outside 0-6.
    pub fn build(self) -> Result<Settings, ConfigError> {
        let cfg = self.builder.build()?;
        Ok(cfg.try_deserialize()?)
    }
}
