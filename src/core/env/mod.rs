// proxywrap: proxy-injecting command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! current_env() --> Env snapshot --> compose_env(url) --> child Env
//!                        |
//!                  config::load, which lookup
//! ```
//!
//! The process environment is read once into an [`Env`](container::Env)
//! snapshot and passed around explicitly; nothing here mutates the real
//! process environment.

pub mod container;
pub mod proxy;
mod types;

#[cfg(test)]
mod tests;

/// Captures the current process environment.
#[must_use]
pub fn current_env() -> container::Env {
    container::Env::from_vars(std::env::vars_os())
}
