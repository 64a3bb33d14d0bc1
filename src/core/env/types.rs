// proxywrap: proxy-injecting command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment variable management.
//!
//! ```text
//! EnvKey:   exact on Unix, case-insensitive on Windows (PATH == Path)
//! ```

use std::ffi::{OsStr, OsString};

/// An environment variable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct EnvKey(OsString);

impl EnvKey {
    pub(super) fn new(s: impl Into<OsString>) -> Self {
        Self(s.into())
    }

    pub(super) fn as_os_str(&self) -> &OsStr {
        &self.0
    }

    /// Whether this key names the same variable as `other` on this host.
    pub(super) fn matches(&self, other: &OsStr) -> bool {
        if cfg!(windows) {
            self.0.eq_ignore_ascii_case(other)
        } else {
            self.0 == other
        }
    }
}
