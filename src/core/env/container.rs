// proxywrap: proxy-injecting command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ordered environment set.
//!
//! ```text
//! Env: Vec<(EnvKey, OsString)>
//!   push()            append, duplicates kept
//!   append_token()    extend first match in place, else append
//!   get()             first match
//! ```

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};

use super::types::EnvKey;

/// An ordered sequence of `KEY=VALUE` entries.
///
/// Entries keep their insertion order and the same key may appear more than
/// once. When handed to a child process the entries are applied in order, so
/// the last entry for a key is the one the child sees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: Vec<(EnvKey, OsString)>,
}

impl Env {
    /// Creates an environment from `(key, value)` pairs, keeping their order.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (EnvKey::new(k), v.into()))
                .collect(),
        }
    }

    /// Appends an entry without looking for an existing one.
    pub fn push(&mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> &mut Self {
        self.vars.push((EnvKey::new(key), value.into()));
        self
    }

    /// Appends `value` to the first entry for `key` as a space-separated
    /// token.
    ///
    /// The entry is rewritten in place and later duplicates are left alone.
    /// An empty existing value takes `value` without a separator; without an
    /// existing entry a new one is appended.
    pub fn append_token(
        &mut self,
        key: impl Into<OsString>,
        value: impl Into<OsString>,
    ) -> &mut Self {
        let key = key.into();
        let value = value.into();

        let Some(slot) = self.position(&key) else {
            self.vars.push((EnvKey::new(key), value));
            return self;
        };

        let existing = &mut self.vars[slot].1;
        if !existing.is_empty() {
            existing.push(" ");
        }
        existing.push(value);

        self
    }

    /// Gets the value of the first entry for `key`.
    #[must_use]
    pub fn get(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.position(key.as_ref())
            .map(|i| self.vars[i].1.as_os_str())
    }

    /// Gets the first value for `key` as text when it is not empty.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD rather than hiding the
    /// value.
    #[must_use]
    pub fn non_empty(&self, key: impl AsRef<OsStr>) -> Option<Cow<'_, str>> {
        self.get(key)
            .filter(|v| !v.is_empty())
            .map(OsStr::to_string_lossy)
    }

    /// Returns an iterator over entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars
            .iter()
            .map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }

    /// Renders every entry as `KEY=VALUE`, in order.
    #[must_use]
    pub fn to_entries(&self) -> Vec<String> {
        self.iter()
            .map(|(k, v)| format!("{}={}", k.to_string_lossy(), v.to_string_lossy()))
            .collect()
    }

    fn position(&self, key: &OsStr) -> Option<usize> {
        self.vars.iter().position(|(k, _)| k.matches(key))
    }
}
