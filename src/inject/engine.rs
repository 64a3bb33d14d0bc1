// proxywrap: proxy-injecting command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Script-engine detection.
//!
//! ```text
//! detect(path)
//!   1. path contains binary marker      ("node")           → Binary
//!   2. path contains shim marker        (".nvm", ...)      → Shim
//!   3. first 100 bytes contain shebang or binary marker    → Header
//!   else / unreadable                                      → None
//! ```
//!
//! The substring checks are deliberately loose: any path with `node` in it
//! qualifies, e.g. `/opt/nodejs-unrelated-tool`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of leading bytes inspected by the header check.
pub const HEADER_LEN: u64 = 100;

/// An interpreter that can preload a script through an options variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptEngine {
    /// Display name.
    pub name: &'static str,
    /// Substring of the interpreter binary name.
    pub binary_marker: &'static str,
    /// Path fragments of version managers and package-local shims.
    pub shim_markers: &'static [&'static str],
    /// Shebang lines naming the interpreter.
    pub shebangs: &'static [&'static str],
    /// Environment variable holding default interpreter flags.
    pub options_var: &'static str,
    /// Flag that preloads a script, followed by its path.
    pub preload_flag: &'static str,
}

/// Node.js.
pub const NODE: ScriptEngine = ScriptEngine {
    name: "node",
    binary_marker: "node",
    shim_markers: &[".nvm", "node_modules"],
    shebangs: &["#!/usr/bin/env node", "#!/usr/bin/node"],
    options_var: "NODE_OPTIONS",
    preload_flag: "--require",
};

/// Which heuristic classified a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    /// The path names the interpreter binary.
    Binary,
    /// The path lies under a version manager or package-local bin directory.
    Shim,
    /// The file header carries a shebang or mentions the interpreter.
    Header,
}

impl ScriptEngine {
    /// Classifies `path`, checking heuristics in order.
    ///
    /// File errors count as "not detected".
    #[must_use]
    pub fn detect(&self, path: &Path) -> Option<Detection> {
        let text = path.to_string_lossy();
        if text.contains(self.binary_marker) {
            return Some(Detection::Binary);
        }
        if self.shim_markers.iter().any(|m| text.contains(m)) {
            return Some(Detection::Shim);
        }

        let header = read_header(path)?;
        let header = String::from_utf8_lossy(&header);
        let hit = self.shebangs.iter().any(|s| header.contains(s))
            || header.contains(self.binary_marker);
        hit.then_some(Detection::Header)
    }

    /// The options-variable token that preloads `script`.
    ///
    /// Paths with whitespace are double-quoted, which Node's option parser
    /// accepts.
    #[must_use]
    pub fn preload_option(&self, script: &Path) -> String {
        let script = script.to_string_lossy();
        if script.chars().any(char::is_whitespace) {
            format!("{} \"{script}\"", self.preload_flag)
        } else {
            format!("{} {script}", self.preload_flag)
        }
    }

    /// Whether `options` already preloads `script`.
    ///
    /// Accepts `<flag> <path>` and `<flag>=<path>`, with the path bare or
    /// double-quoted. Other paths, including ones sharing a prefix with
    /// `script`, do not count.
    #[must_use]
    pub fn has_preload(&self, options: &str, script: &Path) -> bool {
        let script = script.to_string_lossy();
        let tokens = option_tokens(options);
        let mut iter = tokens.iter().peekable();
        while let Some(token) = iter.next() {
            if token == self.preload_flag {
                if iter.peek().is_some_and(|path| **path == script) {
                    return true;
                }
            } else if token
                .strip_prefix(self.preload_flag)
                .and_then(|rest| rest.strip_prefix('='))
                .is_some_and(|path| path == script)
            {
                return true;
            }
        }
        false
    }
}

/// Splits an options value on whitespace, honoring double quotes and
/// backslash escapes inside them.
fn option_tokens(options: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;
    let mut chars = options.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            '\\' if quoted => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if in_token {
        tokens.push(current);
    }
    tokens
}

fn read_header(path: &Path) -> Option<Vec<u8>> {
    let file = File::open(path).ok()?;
    let mut header = Vec::new();
    file.take(HEADER_LEN).read_to_end(&mut header).ok()?;
    Some(header)
}
