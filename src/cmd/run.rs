// proxywrap: proxy-injecting command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Launch pipeline.
//!
//! ```text
//! Settings (proxy url)
//!   --> which(command)              fatal: not found
//!   --> compose_env(url)            7 proxy vars appended
//!   --> inject(NODE)?               optional, failures swallowed
//!   --> announce (2 stdout lines)
//!   --> exec                        fatal: exec failed
//! ```

use std::convert::Infallible;
use std::io::Write;
use std::path::Path;

use crate::cli::Cli;
use crate::config::Settings;
use crate::core::env::container::Env;
use crate::core::env::proxy::compose_env;
use crate::core::process::builder::ProcessBuilder;
use crate::error::{ProcessError, WrapResult};
use crate::inject::engine::NODE;
use crate::inject::{Injection, inject};

/// A fully prepared child, ready to be executed.
#[derive(Debug, Clone)]
pub struct Launch {
    pub proxy_url: String,
    pub process: ProcessBuilder,
    pub injection: Option<Injection>,
}

/// Runs every step up to, but not including, the exec.
///
/// `env` is the parent environment snapshot; the init script, if any, is
/// written into `scratch_dir`.
///
/// # Errors
///
/// Returns `ProcessError::ExecutableNotFound` if the command is not on the
/// snapshot's `PATH`. Nothing is written in that case.
pub fn prepare(
    cli: &Cli,
    settings: &Settings,
    env: &Env,
    scratch_dir: &Path,
) -> std::result::Result<Launch, ProcessError> {
    let proxy_url = settings.proxy.url();
    let process = ProcessBuilder::which(&cli.command, env)?;

    let mut child_env = compose_env(env, &proxy_url);
    let injection = inject(&mut child_env, process.program(), scratch_dir, &NODE);

    tracing::trace!(env = ?child_env.to_entries(), "child environment");

    Ok(Launch {
        proxy_url,
        process: process.args(&cli.args).env(child_env),
        injection,
    })
}

/// Writes the two informational lines shown before the exec.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn announce(out: &mut impl Write, launch: &Launch) -> std::io::Result<()> {
    writeln!(out, "🔗 Using proxy: {}", launch.proxy_url)?;
    writeln!(out, "🚀 Executing: {}", launch.process.command_line())?;
    out.flush()
}

/// Main handler: prepares the launch, announces it, and replaces the
/// current process with the command.
///
/// # Errors
///
/// Returns an error if the command cannot be found or the exec fails. On
/// success this function does not return.
pub fn run_command(cli: &Cli, settings: &Settings, env: &Env) -> WrapResult<Infallible> {
    let launch = prepare(cli, settings, env, &std::env::temp_dir())?;

    if let Some(injection) = &launch.injection {
        tracing::info!(
            engine = injection.engine,
            script = %injection.script.display(),
            "preload enabled"
        );
    }

    if let Err(e) = announce(&mut std::io::stdout().lock(), &launch) {
        tracing::warn!("failed to write to stdout: {e}");
    }

    let never = launch.process.exec()?;
    match never {}
}
