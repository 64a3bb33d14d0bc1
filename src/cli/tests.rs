// proxywrap: proxy-injecting command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::ffi::OsString;

use crate::cli::{try_parse_from, usage};

fn os(args: &[&str]) -> Vec<OsString> {
    args.iter().map(OsString::from).collect()
}

#[test]
fn test_parse_command_only() {
    let cli = try_parse_from(["proxywrap", "claude"]).unwrap();
    assert_eq!(cli.command, "claude");
    assert!(cli.args.is_empty());
}

#[test]
fn test_parse_command_with_args() {
    let cli = try_parse_from(["proxywrap", "claude", "chat", "--model", "opus"]).unwrap();
    assert_eq!(cli.command, "claude");
    assert_eq!(cli.args, os(&["chat", "--model", "opus"]));
}

#[test]
fn test_parse_passes_help_and_version_through() {
    let cli = try_parse_from(["proxywrap", "curl", "--help", "-V", "-x"]).unwrap();
    assert_eq!(cli.command, "curl");
    assert_eq!(cli.args, os(&["--help", "-V", "-x"]));
}

#[test]
fn test_parse_keeps_separator_after_command() {
    let cli = try_parse_from(["proxywrap", "echo", "--", "hi"]).unwrap();
    assert_eq!(cli.command, "echo");
    assert_eq!(cli.args, os(&["--", "hi"]));

    let cli = try_parse_from(["proxywrap", "npm", "run", "x", "--", "--watch"]).unwrap();
    assert_eq!(cli.args, os(&["run", "x", "--", "--watch"]));
}

#[test]
fn test_parse_leading_separator_is_the_command() {
    let cli = try_parse_from(["proxywrap", "--", "echo", "hi"]).unwrap();
    assert_eq!(cli.command, "--");
    assert_eq!(cli.args, os(&["echo", "hi"]));
}

#[test]
fn test_parse_hyphenated_command() {
    let cli = try_parse_from(["proxywrap", "-x", "--help"]).unwrap();
    assert_eq!(cli.command, "-x");
    assert_eq!(cli.args, os(&["--help"]));

    let cli = try_parse_from(["proxywrap", "--version"]).unwrap();
    assert_eq!(cli.command, "--version");
    assert!(cli.args.is_empty());
}

#[test]
fn test_parse_help_token_is_a_command() {
    let cli = try_parse_from(["proxywrap", "help"]).unwrap();
    assert_eq!(cli.command, "help");
}

#[test]
fn test_parse_no_command_fails() {
    let err = try_parse_from(["proxywrap"]).unwrap_err();
    assert_eq!(
        err.kind(),
        clap::error::ErrorKind::MissingRequiredArgument
    );
}

#[test]
fn test_usage_text() {
    insta::assert_snapshot!(usage("proxywrap"), @r"
    Usage: proxywrap <command> [args...]
    Example: proxywrap claude chat

    Environment variables:
      PROXY_HOST (default: 127.0.0.1)
      PROXY_PORT (default: 7890)
      PROXY_TYPE (default: http)
    ");
}
