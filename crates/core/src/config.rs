// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Launcher configuration.
//!
//! The original launcher scripts leaned on global suite state (current
//! directory, ambient environment, a singleton suite object). Here the
//! launcher's knobs live in an explicit [`LaunchConfig`] that the caller
//! loads once and passes down; the classifier itself takes no configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Entry point class for the host runtime.
pub const DEFAULT_MAIN_CLASS: &str = "org.jruby.Main";
/// Flag appended to the launch line to select the embedded Truffle
/// interpreter. Omitted in legacy mode.
pub const DEFAULT_EMBEDDED_FLAG: &str = "-X+T";

const DEFAULT_HOME: &str = "/opt/jruby";
const DEFAULT_BOOTSTRAP_JAR: &str = "lib/truffle/truffle-api.jar";
const DEFAULT_LIB_DIR: &str = "lib";

/// Errors raised while loading the launcher configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`LaunchConfig`].
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Static launcher configuration, deserialized from a TOML file.
///
/// Relative `bootstrap_jar` and `lib_dir` paths are resolved under `home`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LaunchConfig {
    /// Runtime home directory, exported to the child as `JRUBY_HOME`.
    pub home: PathBuf,
    /// Main class placed after the classpath on the launch line.
    pub main_class: String,
    /// Bootstrap jar, emitted as `-Xbootclasspath/a:<path>`.
    pub bootstrap_jar: PathBuf,
    /// Directory scanned for `*.jar` to build the runtime classpath.
    pub lib_dir: PathBuf,
    /// Embedded-interpreter flag appended unless legacy mode is selected.
    pub embedded_flag: String,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            home: PathBuf::from(DEFAULT_HOME),
            main_class: DEFAULT_MAIN_CLASS.to_string(),
            bootstrap_jar: PathBuf::from(DEFAULT_BOOTSTRAP_JAR),
            lib_dir: PathBuf::from(DEFAULT_LIB_DIR),
            embedded_flag: DEFAULT_EMBEDDED_FLAG.to_string(),
        }
    }
}

impl LaunchConfig {
    /// Load the configuration from `explicit`, else `$JRL_CONFIG`, else
    /// `<user config dir>/jrl/config.toml`.
    ///
    /// A missing file yields the defaults; a malformed file is an error.
    /// `JRUBY_HOME`, when set and non-empty, overrides the configured home.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os("JRL_CONFIG").map(PathBuf::from))
            .or_else(|| dirs::config_dir().map(|dir| dir.join("jrl").join("config.toml")));

        let mut config = match path {
            Some(path) if path.is_file() => Self::from_file(&path)?,
            _ => Self::default(),
        };

        if let Some(home) = std::env::var_os("JRUBY_HOME") {
            if !home.is_empty() {
                config.home = PathBuf::from(home);
            }
        }
        Ok(config)
    }

    /// Parse a specific configuration file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Bootstrap jar with a relative path resolved under `home`.
    pub fn bootstrap_jar_path(&self) -> PathBuf {
        self.resolve(&self.bootstrap_jar)
    }

    /// Library directory with a relative path resolved under `home`.
    pub fn lib_dir_path(&self) -> PathBuf {
        self.resolve(&self.lib_dir)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.home.join(path)
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
