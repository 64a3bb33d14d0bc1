// proxywrap: proxy-injecting command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command resolution and process replacement.
//!
//! ```text
//! ProcessBuilder::which("claude", &env)
//!   .args() .env()
//!   .exec()
//!       --> std::process::Command
//!           Unix: exec (image replaced)
//!           else: spawn, wait, exit(code)
//! ```

pub mod builder;
mod exec;
