// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host java executable resolution.

use std::path::PathBuf;

/// Resolve the JVM launcher.
///
/// Priority: `$JAVACMD` → `$JAVA_HOME/bin/java` → `java` from `PATH`.
/// Empty variables are treated as unset.
pub fn resolve_java() -> PathBuf {
    if let Some(cmd) = std::env::var_os("JAVACMD") {
        if !cmd.is_empty() {
            return PathBuf::from(cmd);
        }
    }
    if let Some(home) = std::env::var_os("JAVA_HOME") {
        if !home.is_empty() {
            return PathBuf::from(home).join("bin").join("java");
        }
    }
    PathBuf::from("java")
}

#[cfg(test)]
#[path = "java_tests.rs"]
mod tests;
