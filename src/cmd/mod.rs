// proxywrap: proxy-injecting command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run::run_command
//! ```

pub mod run;

#[cfg(test)]
mod tests;
