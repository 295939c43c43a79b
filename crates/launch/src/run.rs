// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Child process execution.

use tokio::process::Command;
use tracing::debug;

use crate::command::LaunchPlan;
use crate::error::LaunchError;

/// Spawn the assembled command, wait for it, and return its exit code.
///
/// Stdio is inherited from the launcher process. A child killed by a signal
/// reports exit code 1.
pub async fn run(plan: &LaunchPlan) -> Result<i32, LaunchError> {
    debug!(program = %plan.program.display(), args = plan.args.len(), "spawning host runtime");

    let mut command = Command::new(&plan.program);
    command.args(&plan.args);
    for (key, value) in &plan.env {
        command.env(key, value);
    }

    let mut child = command.spawn().map_err(|source| LaunchError::SpawnFailed {
        program: plan.program.display().to_string(),
        source,
    })?;
    let status = child.wait().await.map_err(|source| LaunchError::WaitFailed {
        program: plan.program.display().to_string(),
        source,
    })?;
    Ok(status.code().unwrap_or(1))
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
