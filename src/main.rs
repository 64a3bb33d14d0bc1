// proxywrap: proxy-injecting command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> env snapshot --> Settings --> Logging --> run_command
//!      |                               |                         |
//!   usage, exit 1                error, exit 1          exec, or error + exit 1
//! ```

use std::convert::Infallible;
use std::process::ExitCode;

use proxywrap::cli::{self, usage};
use proxywrap::cmd::run::run_command;
use proxywrap::config::Settings;
use proxywrap::core::env::current_env;
use proxywrap::error::{WrapError, WrapResult};
use proxywrap::logging::init_logging;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    match launch() {
        Ok(never) => match never {},
        Err(WrapError::Usage(_)) => {
            eprint!("{}", usage(&program_name()));
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn launch() -> WrapResult<Infallible> {
    let cli = cli::parse()?;
    let env = current_env();
    let settings = Settings::from_env(&env)?;

    if let Err(e) = init_logging(&settings.log.to_log_config()) {
        eprintln!("Failed to initialize logging: {e:#}");
    }

    run_command(&cli, &settings, &env)
}

fn program_name() -> String {
    std::env::args_os()
        .next()
        .map_or_else(|| "proxywrap".to_string(), |a| a.to_string_lossy().into_owned())
}
