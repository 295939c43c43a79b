// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for CLI specs.
//!
//! `jrl()` builds a hermetic invocation: no user config file, no ambient
//! `JRUBY_OPTS`/`JRUBY_HOME`, no inherited java resolution, plain output.
//! Individual specs opt back in with `.env(...)`.

#![allow(dead_code)]

use std::path::Path;

use assert_cmd::assert::Assert;
use assert_cmd::Command;

pub fn jrl() -> SpecCmd {
    let mut cmd = Command::cargo_bin("jrl").expect("jrl binary should be built");
    cmd.env_remove("JRUBY_OPTS")
        .env_remove("JRUBY_HOME")
        .env_remove("JAVACMD")
        .env_remove("JAVA_HOME")
        .env_remove("JRL_LOG")
        .env("JRL_CONFIG", "/nonexistent/jrl/config.toml")
        .env("NO_COLOR", "1");
    SpecCmd { cmd }
}

pub struct SpecCmd {
    cmd: Command,
}

impl SpecCmd {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Route the launch through `/bin/true` so specs never need a real JVM.
    pub fn fake_java(self) -> Self {
        self.env("JAVACMD", "/bin/true")
    }

    pub fn passes(mut self) -> SpecAssert {
        SpecAssert {
            assert: self.cmd.assert().success(),
        }
    }

    pub fn fails_with(mut self, code: i32) -> SpecAssert {
        SpecAssert {
            assert: self.cmd.assert().code(code),
        }
    }
}

pub struct SpecAssert {
    assert: Assert,
}

impl SpecAssert {
    pub fn stdout_has(self, needle: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.assert.get_output().stdout).to_string();
        assert!(stdout.contains(needle), "stdout missing {needle:?}:\n{stdout}");
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        let stdout = String::from_utf8_lossy(&self.assert.get_output().stdout).to_string();
        assert!(!stdout.contains(needle), "stdout unexpectedly has {needle:?}:\n{stdout}");
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let stderr = String::from_utf8_lossy(&self.assert.get_output().stderr).to_string();
        assert!(stderr.contains(needle), "stderr missing {needle:?}:\n{stderr}");
        self
    }
}

/// A fake `java` executable that records its argv and environment, then
/// exits with the given code.
pub struct FakeJava {
    pub dir: tempfile::TempDir,
}

impl FakeJava {
    pub fn exiting(code: i32) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let script = format!(
            "#!/bin/sh\n\
             printf '%s\\n' \"$@\" > \"{0}/argv.txt\"\n\
             printf '%s' \"$JRUBY_HOME\" > \"{0}/home.txt\"\n\
             exit {1}\n",
            dir.path().display(),
            code
        );
        write_executable(&dir.path().join("java"), &script);
        Self { dir }
    }

    pub fn path(&self) -> String {
        self.dir.path().join("java").display().to_string()
    }

    /// Recorded argv, one token per line.
    pub fn argv(&self) -> Vec<String> {
        let raw = std::fs::read_to_string(self.dir.path().join("argv.txt")).expect("argv.txt");
        raw.lines().map(str::to_string).collect()
    }

    pub fn recorded_home(&self) -> String {
        std::fs::read_to_string(self.dir.path().join("home.txt")).expect("home.txt")
    }
}

fn write_executable(path: &Path, contents: &str) {
    use std::os::unix::fs::PermissionsExt;

    std::fs::write(path, contents).expect("write script");
    let mut perms = std::fs::metadata(path).expect("script metadata").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).expect("chmod script");
}
