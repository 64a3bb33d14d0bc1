// proxywrap: proxy-injecting command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Preload injection for script-engine programs.
//!
//! ```text
//! inject(env, program, dir, NODE)
//!   detect(program)?            engine.rs
//!   write_init_script(dir)?     script.rs    (failure: skip, logged at debug)
//!   add_preload(env)            NODE_OPTIONS += "--require <script>"
//! ```

pub mod engine;
pub mod script;


use std::path::{Path, PathBuf};

use crate::core::env::container::Env;

use engine::{Detection, ScriptEngine};
use script::write_init_script;

/// A preload that was wired into the child environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Injection {
    pub engine: &'static str,
    pub detection: Detection,
    pub script: PathBuf,
}

/// Adds the preload token for `script` to the engine's options variable.
///
/// The first existing entry is extended in place with a single separating
/// space; without one a new entry is appended. A token already present is
/// not added twice.
pub fn add_preload(env: &mut Env, engine: &ScriptEngine, script: &Path) {
    let present = env
        .get(engine.options_var)
        .is_some_and(|v| engine.has_preload(&v.to_string_lossy(), script));
    if present {
        tracing::debug!(var = engine.options_var, "preload already present");
        return;
    }

    env.append_token(engine.options_var, engine.preload_option(script));
}

/// Detects `program` as an `engine` program and, if so, writes the init
/// script into `dir` and requests its preload in `env`.
///
/// Returns `None` when the program was not detected or the script could not
/// be written; `env` is untouched in both cases.
pub fn inject(
    env: &mut Env,
    program: &Path,
    dir: &Path,
    engine: &ScriptEngine,
) -> Option<Injection> {
    let detection = engine.detect(program)?;
    tracing::debug!(engine = engine.name, ?detection, program = %program.display(), "script engine detected");

    let script = match write_init_script(dir) {
        Ok(path) => path,
        Err(e) => {
            tracing::debug!("skipping preload: {e}");
            return None;
        }
    };

    add_preload(env, engine, &script);
    Some(Injection {
        engine: engine.name,
        detection,
        script,
    })
}
