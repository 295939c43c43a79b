// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Classifier error types.

use thiserror::Error;

/// Usage errors raised while classifying launcher arguments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// A classpath flag appeared as the last token of its list, with nothing
    /// left to consume.
    #[error("{flag} requires a following classpath entry")]
    MissingClasspathEntry {
        /// The flag spelling as the user wrote it (`-J-cp` or `-J-classpath`).
        flag: String,
    },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
