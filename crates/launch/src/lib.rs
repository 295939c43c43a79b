// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jrl-launch: launch-command assembly and process execution for jrl

pub mod classpath;
pub mod command;
pub mod error;
pub mod java;
pub mod run;

pub use classpath::{runtime_classpath, CLASSPATH_SEPARATOR};
pub use command::LaunchPlan;
pub use error::LaunchError;
pub use java::resolve_java;
pub use run::run;
