// proxywrap: proxy-injecting command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process replacement.
//!
//! ```text
//! Unix:    execve(program, [arg0, args..], env)   same PID, never returns
//! Other:   spawn + wait, exit with child's code   new PID
//! ```

use std::convert::Infallible;
use std::process::Command;

use super::builder::ProcessBuilder;
use crate::error::ProcessError;

impl ProcessBuilder {
    /// Builds the `std` command: cleared environment refilled in entry order,
    /// so the last entry for a duplicated key wins.
    fn to_command(&self) -> Command {
        let mut command = Command::new(self.program());
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.arg0(self.arg0_str());
        }
        command.args(self.args_slice());

        if let Some(env) = self.environment() {
            command.env_clear();
            command.envs(env.iter());
        }

        command
    }

    /// Replaces the current process image with this program.
    ///
    /// Only returns if the exec call itself failed.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecFailed` when the system refuses to run the
    /// program (permission denied, bad executable format, ...).
    #[cfg(unix)]
    pub fn exec(self) -> Result<Infallible, ProcessError> {
        use std::os::unix::process::CommandExt;

        tracing::trace!(program = %self.program().display(), "exec");
        let source = self.to_command().exec();
        Err(ProcessError::ExecFailed {
            command: self.arg0_str().to_string_lossy().into_owned(),
            source,
        })
    }

    /// Runs this program to completion and exits with its exit code.
    ///
    /// Hosts without process-image replacement get a child process with
    /// inherited stdio instead; the child has its own PID.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecFailed` when the program cannot be spawned.
    #[cfg(not(unix))]
    pub fn exec(self) -> Result<Infallible, ProcessError> {
        tracing::trace!(program = %self.program().display(), "spawn");
        let status = self
            .to_command()
            .status()
            .map_err(|source| ProcessError::ExecFailed {
                command: self.arg0_str().to_string_lossy().into_owned(),
                source,
            })?;
        std::process::exit(status.code().unwrap_or(1));
    }
}
