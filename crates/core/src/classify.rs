// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-pass classifier for launcher command tokens.
//!
//! Tokens arrive from two sources: the `JRUBY_OPTS` environment variable and
//! the explicit command line. Each list is classified independently, left to
//! right. The first token of a list that matches no rule ends flag parsing
//! for that list; it and everything after it are handed to the script
//! verbatim. A token-consuming rule (`-J-cp`) never reaches across the
//! boundary between the two lists.

use tracing::warn;

use crate::error::ClassifyError;

/// Enable the embedded Truffle interpreter. Embedded mode is the default, so
/// the token is accepted and dropped.
const EMBEDDED_FLAG: &str = "-X+T";
/// Force the classic (non-Truffle) execution mode.
const CLASSIC_FLAG: &str = "-Xclassic";
/// Print the assembled launch command before executing it.
const PRINT_FLAG: &str = "-J-cmd";
/// Deprecated Graal option spelling, rewritten to a `-Dgraal.*` property.
const GRAAL_PREFIX: &str = "-J-G:";
/// Host (JVM) option prefix; stripped before the option is forwarded.
const HOST_PREFIX: &str = "-J";
/// Runtime option prefix; rewritten to `-Djruby.*` unless a boolean toggle.
const RUNTIME_PREFIX: &str = "-X";
/// Classpath flags; each consumes the next token of the same list.
const CLASSPATH_FLAGS: [&str; 2] = ["-J-cp", "-J-classpath"];

/// The partitioned launcher arguments.
///
/// Field order within each list mirrors the order the tokens appeared in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Options for the host JVM launcher (`-J` prefix stripped).
    pub host_options: Vec<String>,
    /// Arguments for the embedded interpreter and the user's script.
    pub script_args: Vec<String>,
    /// Entries prepended to the runtime classpath.
    pub classpath: Vec<String>,
    /// Print the assembled launch command before executing it.
    pub print_command: bool,
    /// Run through the classic entry point instead of the Truffle one.
    pub legacy_mode: bool,
}

/// Classify the environment-supplied tokens, then the explicit command-line
/// tokens, into a single [`Classification`].
///
/// The two lists are processed as separate passes so that a consuming rule in
/// the environment list can never swallow the first explicit argument.
pub fn classify(
    env_tokens: &[String],
    cli_tokens: &[String],
) -> Result<Classification, ClassifyError> {
    let mut result = Classification::default();
    classify_list(env_tokens, &mut result)?;
    classify_list(cli_tokens, &mut result)?;
    Ok(result)
}

fn classify_list(tokens: &[String], out: &mut Classification) -> Result<(), ClassifyError> {
    let mut index = 0;
    while index < tokens.len() {
        let token = tokens[index].as_str();
        index += 1;

        if token == EMBEDDED_FLAG {
            continue;
        }
        if token == CLASSIC_FLAG {
            out.legacy_mode = true;
            continue;
        }
        if token == PRINT_FLAG {
            out.print_command = true;
            continue;
        }
        if let Some(name) = token.strip_prefix(GRAAL_PREFIX) {
            out.host_options.push(rewrite_graal_option(token, name));
            continue;
        }
        if CLASSPATH_FLAGS.contains(&token) {
            let entry = tokens
                .get(index)
                .ok_or_else(|| ClassifyError::MissingClasspathEntry { flag: token.to_string() })?
                .as_str();
            index += 1;
            let entry = entry.strip_prefix(HOST_PREFIX).unwrap_or(entry);
            out.classpath.push(entry.to_string());
            continue;
        }
        if let Some(option) = token.strip_prefix(HOST_PREFIX) {
            out.host_options.push(option.to_string());
            continue;
        }
        if token.starts_with("-X+") || token.starts_with("-X-") {
            out.script_args.push(token.to_string());
            continue;
        }
        if let Some(option) = token.strip_prefix(RUNTIME_PREFIX) {
            out.host_options.push(format!("-Djruby.{option}"));
            continue;
        }

        // First non-flag token: the rest of this list belongs to the script
        // and is not re-examined against the rules above.
        out.script_args.push(token.to_string());
        out.script_args.extend(tokens[index..].iter().cloned());
        break;
    }
    Ok(())
}

/// Rewrite `-J-G:+Name` / `-J-G:-Name` / `-J-G:Name=value` into the canonical
/// `-Dgraal.*` property spelling.
fn rewrite_graal_option(token: &str, name: &str) -> String {
    warn!("{token}: the -G: option spelling is deprecated, use -J-Dgraal.* instead");
    if let Some(name) = name.strip_prefix('+') {
        format!("-Dgraal.{name}=true")
    } else if let Some(name) = name.strip_prefix('-') {
        format!("-Dgraal.{name}=false")
    } else {
        format!("-Dgraal.{name}")
    }
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
