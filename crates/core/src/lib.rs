// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jrl-core: argument classification and configuration for the jrl launcher

pub mod classify;
pub mod config;
pub mod error;
pub mod token;

pub use classify::{classify, Classification};
pub use config::{ConfigError, LaunchConfig};
pub use error::ClassifyError;
pub use token::env_tokens;
