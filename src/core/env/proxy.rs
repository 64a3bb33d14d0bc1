// proxywrap: proxy-injecting command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Proxy variable overlay.

use super::container::Env;

/// Variables set to the proxy URL in the child environment, in append order.
pub const PROXY_VARS: [&str; 7] = [
    "http_proxy",
    "https_proxy",
    "HTTP_PROXY",
    "HTTPS_PROXY",
    "ALL_PROXY",
    "ftp_proxy",
    "FTP_PROXY",
];

/// Returns `base` with every [`PROXY_VARS`] entry appended, set to `proxy_url`.
///
/// Existing proxy entries are kept; the appended ones come later in the
/// sequence and therefore win in the child.
#[must_use]
pub fn compose_env(base: &Env, proxy_url: &str) -> Env {
    let mut env = base.clone();
    for key in PROXY_VARS {
        env.push(key, proxy_url);
    }
    env
}
