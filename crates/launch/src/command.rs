// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Launch-command assembly.

use std::path::PathBuf;

use jrl_core::{Classification, LaunchConfig};

use crate::classpath::CLASSPATH_SEPARATOR;

/// A fully assembled launch command: program, argv, and the extra environment
/// exported to the child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
}

impl LaunchPlan {
    /// Assemble the final launch tokens:
    ///
    /// host options, the bootstrap entry, `-cp` with the joined classpath,
    /// the main class, the embedded-interpreter flag (unless classic mode is
    /// selected), then the script arguments.
    pub fn build(
        config: &LaunchConfig,
        java: PathBuf,
        classified: &Classification,
        runtime_classpath: &[PathBuf],
    ) -> Self {
        let mut args = classified.host_options.clone();
        args.push(format!(
            "-Xbootclasspath/a:{}",
            config.bootstrap_jar_path().display()
        ));
        args.push("-cp".to_string());
        args.push(join_classpath(&classified.classpath, runtime_classpath));
        args.push(config.main_class.clone());
        if !classified.legacy_mode {
            args.push(config.embedded_flag.clone());
        }
        args.extend(classified.script_args.iter().cloned());

        let env = vec![("JRUBY_HOME".to_string(), config.home.display().to_string())];
        LaunchPlan { program: java, args, env }
    }

    /// Render the command as a single shell-style line for `-J-cmd`.
    pub fn render(&self) -> String {
        let mut line = quote(&self.program.display().to_string());
        for arg in &self.args {
            line.push(' ');
            line.push_str(&quote(arg));
        }
        line
    }
}

/// User-supplied entries come first so they shadow the bundled jars.
fn join_classpath(user: &[String], runtime: &[PathBuf]) -> String {
    let mut entries = user.to_vec();
    entries.extend(runtime.iter().map(|p| p.display().to_string()));
    entries.join(CLASSPATH_SEPARATOR)
}

fn quote(token: &str) -> String {
    if token.is_empty() || token.chars().any(char::is_whitespace) {
        format!("'{token}'")
    } else {
        token.to_string()
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
