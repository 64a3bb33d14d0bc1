// proxywrap: proxy-injecting command launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use crate::cli::try_parse_from;
use crate::config::Settings;
use crate::core::env::container::Env;
use crate::core::env::proxy::PROXY_VARS;
use crate::error::ProcessError;
use crate::inject::script::INIT_FILE_NAME;

use super::run::{announce, prepare};

#[cfg(unix)]
fn install(dir: &Path, name: &str, content: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn snapshot(bin: &Path, extra: &[(&str, &str)]) -> Env {
    let mut env = Env::from_vars([("PATH", bin.as_os_str())]);
    for (k, v) in extra {
        env.push(*k, *v);
    }
    env
}

#[cfg(unix)]
#[test]
fn test_prepare_plain_command() {
    let bin = tempfile::tempdir().unwrap();
    let scratch = tempfile::tempdir().unwrap();
    let program = install(bin.path(), "echo-tool", "#!/bin/sh\necho \"$@\"\n");
    let env = snapshot(
        bin.path(),
        &[
            ("PROXY_HOST", "10.0.0.1"),
            ("PROXY_PORT", "8080"),
            ("PROXY_TYPE", "socks5"),
        ],
    );

    let cli = try_parse_from(["proxywrap", "echo-tool", "hi"]).unwrap();
    let settings = Settings::from_env(&env).unwrap();
    let launch = prepare(&cli, &settings, &env, scratch.path()).unwrap();

    assert_eq!(launch.proxy_url, "socks5://10.0.0.1:8080");
    assert_eq!(launch.process.program(), &program);
    assert!(launch.injection.is_none());
    assert!(!scratch.path().join(INIT_FILE_NAME).exists());

    let child_env = launch.process.environment().unwrap();
    let entries = child_env.to_entries();
    for var in PROXY_VARS {
        let entry = format!("{var}=socks5://10.0.0.1:8080");
        assert!(entries.contains(&entry), "missing {entry}");
    }
    assert_eq!(child_env.non_empty("NODE_OPTIONS").as_deref(), None);
}

#[cfg(unix)]
#[test]
fn test_prepare_node_command() {
    let bin = tempfile::tempdir().unwrap();
    let scratch = tempfile::tempdir().unwrap();
    install(bin.path(), "claude", "#!/usr/bin/env node\nconsole.log('hi')\n");
    let env = snapshot(bin.path(), &[("NODE_OPTIONS", "--max-old-space-size=4096")]);

    let cli = try_parse_from(["proxywrap", "claude", "chat"]).unwrap();
    let settings = Settings::from_env(&env).unwrap();
    let launch = prepare(&cli, &settings, &env, scratch.path()).unwrap();

    let injection = launch.injection.expect("node script should be detected");
    let script = scratch.path().join(INIT_FILE_NAME);
    assert_eq!(injection.script, script);
    assert!(script.exists());

    let child_env = launch.process.environment().unwrap();
    let expected = format!("--max-old-space-size=4096 --require {}", script.display());
    assert_eq!(child_env.non_empty("NODE_OPTIONS").as_deref(), Some(expected.as_str()));
    // NODE_OPTIONS was rewritten in place, not duplicated.
    let count = child_env
        .iter()
        .filter(|(k, _)| *k == "NODE_OPTIONS")
        .count();
    assert_eq!(count, 1);
}

#[test]
fn test_prepare_missing_command_writes_nothing() {
    let bin = tempfile::tempdir().unwrap();
    let scratch = tempfile::tempdir().unwrap();
    let env = snapshot(bin.path(), &[]);

    let cli = try_parse_from(["proxywrap", "node-missing-tool"]).unwrap();
    let settings = Settings::from_env(&env).unwrap();
    let err = prepare(&cli, &settings, &env, scratch.path()).unwrap_err();

    assert!(matches!(err, ProcessError::ExecutableNotFound { .. }));
    assert!(err.to_string().contains("node-missing-tool"));
    assert_eq!(std::fs::read_dir(scratch.path()).unwrap().count(), 0);
}

#[cfg(unix)]
#[test]
fn test_announce() {
    let bin = tempfile::tempdir().unwrap();
    let scratch = tempfile::tempdir().unwrap();
    install(bin.path(), "tool", "#!/bin/sh\n");
    let env = snapshot(bin.path(), &[]);

    let cli = try_parse_from(["proxywrap", "tool", "a", "b"]).unwrap();
    let settings = Settings::from_env(&env).unwrap();
    let launch = prepare(&cli, &settings, &env, scratch.path()).unwrap();

    let mut out = Vec::new();
    announce(&mut out, &launch).unwrap();
    insta::assert_snapshot!(String::from_utf8(out).unwrap(), @r"
    🔗 Using proxy: http://127.0.0.1:7890
    🚀 Executing: tool a b
    ");
}
