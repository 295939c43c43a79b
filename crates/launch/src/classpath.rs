// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime classpath computation.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Platform separator for classpath lists.
#[cfg(windows)]
pub const CLASSPATH_SEPARATOR: &str = ";";
/// Platform separator for classpath lists.
#[cfg(not(windows))]
pub const CLASSPATH_SEPARATOR: &str = ":";

/// Collect the runtime classpath: every `*.jar` directly under `lib_dir`,
/// sorted so the launch line is deterministic.
///
/// A missing or unreadable directory yields an empty list; the launcher does
/// not require a populated runtime home to assemble a command.
pub fn runtime_classpath(lib_dir: &Path) -> Vec<PathBuf> {
    let pattern = lib_dir.join("*.jar");
    let Some(pattern) = pattern.to_str() else {
        warn!(dir = %lib_dir.display(), "library directory is not valid UTF-8, skipping");
        return Vec::new();
    };

    let mut jars: Vec<PathBuf> = match glob::glob(pattern) {
        Ok(paths) => paths.flatten().collect(),
        Err(err) => {
            warn!(%err, dir = %lib_dir.display(), "invalid classpath pattern");
            Vec::new()
        }
    };
    jars.sort();
    debug!(count = jars.len(), dir = %lib_dir.display(), "computed runtime classpath");
    jars
}

#[cfg(test)]
#[path = "classpath_tests.rs"]
mod tests;
