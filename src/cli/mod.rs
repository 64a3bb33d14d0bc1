// proxywrap: proxy-injecting command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for proxywrap using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! proxywrap <command> [args...]
//! ```
//!
//! proxywrap has no options of its own. Every token after the program name
//! is a value: the first names the command, the rest reach it untouched,
//! including `--` and anything starting with a hyphen. An escape is placed
//! ahead of them before clap sees the line, so clap only ever reports a
//! missing command.

#[cfg(test)]
mod tests;

use std::ffi::OsString;

use clap::Parser;

use crate::config::loader::ENV_KEYS;
use crate::config::types::{DEFAULT_PROXY_HOST, DEFAULT_PROXY_PORT, DEFAULT_PROXY_SCHEME};
use crate::error::WrapResult;

/// Run a command with proxy environment variables injected.
#[derive(Debug, Parser)]
#[command(
    name = "proxywrap",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Command to run, looked up on PATH
    #[arg(value_name = "COMMAND", required = true)]
    pub command: OsString,

    /// Arguments passed to the command unchanged
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<OsString>,
}

/// Parses the process arguments.
///
/// # Errors
///
/// Returns `WrapError::Usage` if no command was given.
pub fn parse() -> WrapResult<Cli> {
    Ok(try_parse_from(std::env::args_os())?)
}

/// Parses arguments from an iterator, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if no command was given.
pub fn try_parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut argv: Vec<OsString> = iter.into_iter().map(Into::into).collect();
    if argv.len() > 1 {
        argv.insert(1, OsString::from("--"));
    }
    Cli::try_parse_from(argv)
}

/// Usage text printed when no command is given.
#[must_use]
pub fn usage(program: &str) -> String {
    let defaults = [DEFAULT_PROXY_HOST, DEFAULT_PROXY_PORT, DEFAULT_PROXY_SCHEME];
    let vars: String = ENV_KEYS
        .iter()
        .zip(defaults)
        .map(|((var, _), default)| format!("  {var} (default: {default})\n"))
        .collect();

    format!(
        "Usage: {program} <command> [args...]\n\
         Example: {program} claude chat\n\
         \n\
         Environment variables:\n\
         {vars}"
    )
}
