// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Launch error types.

use thiserror::Error;

/// Errors raised while executing the assembled launch command.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The host executable could not be spawned.
    #[error("failed to spawn `{program}`: {source}")]
    SpawnFailed {
        program: String,
        source: std::io::Error,
    },

    /// The child was spawned but waiting on it failed.
    #[error("failed waiting for `{program}`: {source}")]
    WaitFailed {
        program: String,
        source: std::io::Error,
    },
}
