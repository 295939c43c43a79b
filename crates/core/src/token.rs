// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token sourcing for the launcher's two input lists.

/// Split an environment-supplied option string (`JRUBY_OPTS`) into tokens.
///
/// Splitting is on ASCII whitespace runs; there is no quoting convention,
/// matching the original launcher scripts. `None` and the empty string both
/// yield an empty list.
pub fn env_tokens(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| value.split_ascii_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
