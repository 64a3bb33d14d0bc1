// proxywrap: proxy-injecting command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process builder with configuration options.
//!
//! ```text
//! ProcessBuilder
//!  • which (PATH from an Env snapshot) / new
//!  • arg0 / args / env
//!  • command_line (display)
//!  • exec (see exec.rs)
//! ```

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::core::env::container::Env;
use crate::error::ProcessError;

/// Builder for the program that replaces the current process.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    /// Resolved path to the executable
    program: PathBuf,
    /// Conventional argument zero, the name the user typed
    arg0: OsString,
    /// Arguments after argument zero
    args: Vec<OsString>,
    /// Complete child environment; `None` inherits ours
    env: Option<Env>,
}

impl ProcessBuilder {
    /// Creates a `ProcessBuilder` for an already resolved program.
    ///
    /// Argument zero defaults to the program path as given.
    pub fn new(program: impl AsRef<Path>) -> Self {
        let program = program.as_ref().to_path_buf();
        Self {
            arg0: program.clone().into_os_string(),
            program,
            args: Vec::new(),
            env: None,
        }
    }

    /// Creates a `ProcessBuilder` after resolving `program` on the `PATH`
    /// of `env`.
    ///
    /// Names containing a path separator are resolved against the current
    /// directory instead. Argument zero is set to `program` unchanged.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError::ExecutableNotFound` if no match exists.
    pub fn which(program: &OsStr, env: &Env) -> Result<Self, ProcessError> {
        let cwd = std::env::current_dir().unwrap_or_default();
        let path = which::which_in(program, env.get("PATH"), cwd).map_err(|source| {
            ProcessError::ExecutableNotFound {
                name: program.to_string_lossy().into_owned(),
                source,
            }
        })?;

        tracing::debug!(program = %program.to_string_lossy(), path = %path.display(), "resolved command");
        Ok(Self::new(path).arg0(program))
    }

    /// Sets argument zero.
    #[must_use]
    pub fn arg0(mut self, arg0: impl AsRef<OsStr>) -> Self {
        self.arg0 = arg0.as_ref().to_os_string();
        self
    }

    /// Adds multiple arguments to the command.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// Sets the complete environment for the process.
    #[must_use]
    pub fn env(mut self, env: Env) -> Self {
        self.env = Some(env);
        self
    }

    /// Returns the resolved program path.
    #[must_use]
    pub const fn program(&self) -> &PathBuf {
        &self.program
    }

    /// Returns argument zero.
    #[must_use]
    pub fn arg0_str(&self) -> &OsStr {
        &self.arg0
    }

    /// Returns the environment, if set.
    #[must_use]
    pub const fn environment(&self) -> Option<&Env> {
        self.env.as_ref()
    }

    /// Argument zero followed by the arguments, joined by single spaces.
    ///
    /// The separator after argument zero is always present, even with no
    /// arguments.
    #[must_use]
    pub fn command_line(&self) -> String {
        let args: Vec<_> = self.args.iter().map(|a| a.to_string_lossy()).collect();
        format!("{} {}", self.arg0.to_string_lossy(), args.join(" "))
    }

    pub(super) fn args_slice(&self) -> &[OsString] {
        &self.args
    }
}
