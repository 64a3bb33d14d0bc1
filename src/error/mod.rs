// proxywrap: proxy-injecting command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!        WrapError (16 bytes)
//!            |
//!   +--------+--------+
//!   |        |        |
//!   v        v        v
//! Usage   Config   Process      all fatal, exit 1
//!  Box      Box      Box
//!
//! InjectError is never fatal: the run continues without the preload.
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`WrapError`].
pub type WrapResult<T> = std::result::Result<T, WrapError>;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum WrapError {
    /// The command line could not be parsed, usually for lack of a command.
    #[error("{0}")]
    Usage(Box<clap::Error>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Command resolution or execution failed.
    #[error("{0}")]
    Process(#[from] Box<ProcessError>),
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for WrapError {
                fn from(err: $error) -> Self {
                    WrapError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    ProcessError => Process,
    clap::Error => Usage,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A settings value could not be interpreted.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Error from the `config` crate.
    #[error(transparent)]
    Source(#[from] config::ConfigError),
}

// --- Process Errors ---

/// Command resolution and process replacement errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Command could not be found on the search path.
    #[error("command '{name}' not found: {source}")]
    ExecutableNotFound {
        name: String,
        #[source]
        source: which::Error,
    },

    /// The exec-family call (or spawn, on hosts without it) failed.
    #[error("failed to execute '{command}': {source}")]
    ExecFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Inject Errors ---

/// Errors while generating the preload script.
#[derive(Debug, Error)]
pub enum InjectError {
    /// The init script could not be written.
    #[error("failed to write init script '{}': {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
