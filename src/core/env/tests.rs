// proxywrap: proxy-injecting command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the environment module.

use std::ffi::OsStr;

use super::current_env;
use crate::core::env::container::Env;
use crate::core::env::proxy::{PROXY_VARS, compose_env};

#[test]
fn test_env_basic_operations() {
    let mut env = Env::default();
    env.push("FOO", "bar");

    assert_eq!(env.get("FOO"), Some(OsStr::new("bar")));
    assert_eq!(env.get("NOTEXIST"), None);
    assert_eq!(env.iter().count(), 1);
}

#[test]
fn test_env_push_keeps_duplicates() {
    let mut env = Env::from_vars([("A", "1"), ("B", "2")]);
    env.push("A", "3");

    insta::assert_snapshot!(env.to_entries().join(" "), @"A=1 B=2 A=3");
    // Lookups see the first entry.
    assert_eq!(env.get("A"), Some(OsStr::new("1")));
}

#[test]
fn test_env_append_token_rewrites_first_match_in_place() {
    let mut env = Env::from_vars([("A", "1"), ("B", "2"), ("A", "3")]);
    env.append_token("A", "x");
    env.append_token("C", "new");

    insta::assert_snapshot!(env.to_entries().join(" "), @"A=1 x B=2 A=3 C=new");
}

#[test]
fn test_env_append_token() {
    let mut env = Env::from_vars([("OPTS", "--one"), ("EMPTY", "")]);
    env.append_token("OPTS", "--two");
    env.append_token("EMPTY", "--solo");
    env.append_token("MISSING", "--fresh");

    insta::assert_snapshot!(
        env.to_entries().join(" | "),
        @"OPTS=--one --two | EMPTY=--solo | MISSING=--fresh"
    );
}

#[test]
fn test_env_non_empty() {
    let env = Env::from_vars([("SET", "value"), ("BLANK", "")]);
    assert_eq!(env.non_empty("SET").as_deref(), Some("value"));
    assert_eq!(env.non_empty("BLANK").as_deref(), None);
    assert_eq!(env.non_empty("UNSET").as_deref(), None);
}

#[cfg(not(windows))]
#[test]
fn test_env_keys_are_case_sensitive() {
    let env = Env::from_vars([("http_proxy", "lower")]);
    assert_eq!(env.get("HTTP_PROXY"), None);
}

#[test]
fn test_compose_env_appends_all_proxy_vars() {
    let base = Env::from_vars([("PATH", "/usr/bin"), ("http_proxy", "http://old:1")]);
    let env = compose_env(&base, "socks5://10.0.0.1:8080");

    assert_eq!(env.iter().count(), base.iter().count() + PROXY_VARS.len());
    insta::assert_snapshot!(env.to_entries().join("\n"), @r"
    PATH=/usr/bin
    http_proxy=http://old:1
    http_proxy=socks5://10.0.0.1:8080
    https_proxy=socks5://10.0.0.1:8080
    HTTP_PROXY=socks5://10.0.0.1:8080
    HTTPS_PROXY=socks5://10.0.0.1:8080
    ALL_PROXY=socks5://10.0.0.1:8080
    ftp_proxy=socks5://10.0.0.1:8080
    FTP_PROXY=socks5://10.0.0.1:8080
    ");
}

#[test]
fn test_compose_env_leaves_base_untouched() {
    let base = Env::from_vars([("HOME", "/home/user")]);
    let _ = compose_env(&base, "http://127.0.0.1:7890");
    assert_eq!(base.to_entries(), ["HOME=/home/user"]);
}

#[test]
fn test_current_env_not_empty() {
    let env = current_env();
    assert!(env.iter().next().is_some(), "test process should have some environment");
}
