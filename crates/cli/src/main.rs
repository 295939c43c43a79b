// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jrl: launcher for a Graal/Truffle-hosted Ruby runtime.

mod color;
mod exit_error;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use jrl_core::{classify, env_tokens, ClassifyError, LaunchConfig};
use jrl_launch::{resolve_java, runtime_classpath, LaunchPlan};

use crate::exit_error::ExitError;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_GIT_HASH"), ")");

/// Launch the Ruby runtime on the host JVM.
///
/// `-J` and `-X` tokens are interpreted by the launcher itself; the first
/// token that is neither ends flag parsing and everything from there on is
/// handed to the script. Tokens in `JRUBY_OPTS` are classified before the
/// command line.
#[derive(Debug, Parser)]
#[command(name = "jrl", version, long_version = LONG_VERSION, styles = color::styles())]
struct Cli {
    /// Launcher configuration file (default: $JRL_CONFIG, then the user
    /// config directory).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Host options, runtime options, then the script and its arguments.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    args: Vec<String>,
}

#[tokio::main]
async fn main() {
    init_tracing();
    match launch().await {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            let code = err.downcast_ref::<ExitError>().map(|e| e.code).unwrap_or(1);
            eprintln!("jrl: {err:#}");
            std::process::exit(code);
        }
    }
}

async fn launch() -> anyhow::Result<i32> {
    let cli = Cli::parse();

    let config =
        LaunchConfig::load(cli.config.as_deref()).context("loading launcher configuration")?;

    let env_opts = std::env::var("JRUBY_OPTS").ok();
    let env_list = env_tokens(env_opts.as_deref());
    let classified = classify(&env_list, &cli.args).map_err(usage_error)?;

    let java = resolve_java();
    let classpath = runtime_classpath(&config.lib_dir_path());
    let plan = LaunchPlan::build(&config, java, &classified, &classpath);

    if classified.print_command {
        println!("{}", color::muted(&plan.render()));
    }

    let code = jrl_launch::run(&plan).await?;
    Ok(code)
}

/// Classifier failures are usage errors: exit 2, nothing is launched.
fn usage_error(err: ClassifyError) -> anyhow::Error {
    ExitError::new(2, err.to_string()).into()
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env("JRL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
